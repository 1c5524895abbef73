//! Keccak-f[1600] with the lane permutation written out
//!
//! θ is folded into the combined ρ/π step and every lane move is explicit,
//! so the round body has no index tables and no data-dependent addressing.

use super::{KeccakPermutation, KeccakState, RC};

/// Lane-explicit form of the permutation. The default backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnrolledKeccak;

impl KeccakPermutation for UnrolledKeccak {
    const NAME: &'static str = "unrolled";

    #[inline]
    fn permute(state: &mut KeccakState) {
        for &rc in RC.iter() {
            round(state, rc);
        }
    }
}

#[inline(always)]
pub(super) fn round(a: &mut KeccakState, rc: u64) {
    let c0 = a[0] ^ a[5] ^ a[10] ^ a[15] ^ a[20];
    let c1 = a[1] ^ a[6] ^ a[11] ^ a[16] ^ a[21];
    let c2 = a[2] ^ a[7] ^ a[12] ^ a[17] ^ a[22];
    let c3 = a[3] ^ a[8] ^ a[13] ^ a[18] ^ a[23];
    let c4 = a[4] ^ a[9] ^ a[14] ^ a[19] ^ a[24];

    let d0 = c4 ^ c1.rotate_left(1);
    let d1 = c0 ^ c2.rotate_left(1);
    let d2 = c1 ^ c3.rotate_left(1);
    let d3 = c2 ^ c4.rotate_left(1);
    let d4 = c3 ^ c0.rotate_left(1);

    // B[y, 2x + 3y] = rot(A[x, y] ^ D[x], r[x, y])
    let mut b = [0u64; 25];
    b[0] = a[0] ^ d0;
    b[10] = (a[1] ^ d1).rotate_left(1);
    b[20] = (a[2] ^ d2).rotate_left(62);
    b[5] = (a[3] ^ d3).rotate_left(28);
    b[15] = (a[4] ^ d4).rotate_left(27);
    b[16] = (a[5] ^ d0).rotate_left(36);
    b[1] = (a[6] ^ d1).rotate_left(44);
    b[11] = (a[7] ^ d2).rotate_left(6);
    b[21] = (a[8] ^ d3).rotate_left(55);
    b[6] = (a[9] ^ d4).rotate_left(20);
    b[7] = (a[10] ^ d0).rotate_left(3);
    b[17] = (a[11] ^ d1).rotate_left(10);
    b[2] = (a[12] ^ d2).rotate_left(43);
    b[12] = (a[13] ^ d3).rotate_left(25);
    b[22] = (a[14] ^ d4).rotate_left(39);
    b[23] = (a[15] ^ d0).rotate_left(41);
    b[8] = (a[16] ^ d1).rotate_left(45);
    b[18] = (a[17] ^ d2).rotate_left(15);
    b[3] = (a[18] ^ d3).rotate_left(21);
    b[13] = (a[19] ^ d4).rotate_left(8);
    b[14] = (a[20] ^ d0).rotate_left(18);
    b[24] = (a[21] ^ d1).rotate_left(2);
    b[9] = (a[22] ^ d2).rotate_left(61);
    b[19] = (a[23] ^ d3).rotate_left(56);
    b[4] = (a[24] ^ d4).rotate_left(14);

    for y in (0..25).step_by(5) {
        let (b0, b1, b2, b3, b4) = (b[y], b[y + 1], b[y + 2], b[y + 3], b[y + 4]);
        a[y] = b0 ^ (!b1 & b2);
        a[y + 1] = b1 ^ (!b2 & b3);
        a[y + 2] = b2 ^ (!b3 & b4);
        a[y + 3] = b3 ^ (!b4 & b0);
        a[y + 4] = b4 ^ (!b0 & b1);
    }

    a[0] ^= rc;
}
