//! Table-driven Keccak-f[1600]

use super::{KeccakPermutation, KeccakState, RC};

const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Straightforward loop form of the permutation, one step mapping per pass.
///
/// Slower than [`super::UnrolledKeccak`] but easy to audit against FIPS 202.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceKeccak;

impl KeccakPermutation for ReferenceKeccak {
    const NAME: &'static str = "reference";

    fn permute(state: &mut KeccakState) {
        for &rc in RC.iter() {
            // θ
            let mut c = [0u64; 5];
            for (x, cx) in c.iter_mut().enumerate() {
                *cx = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
            }
            for x in 0..5 {
                let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
                for y in 0..5 {
                    state[x + 5 * y] ^= d;
                }
            }

            // ρ and π
            let mut t = state[1];
            for (&j, &r) in PI.iter().zip(RHO.iter()) {
                let tmp = state[j];
                state[j] = t.rotate_left(r);
                t = tmp;
            }

            // χ
            for y in 0..5 {
                let mut row = [0u64; 5];
                row.copy_from_slice(&state[5 * y..5 * y + 5]);
                for x in 0..5 {
                    state[x + 5 * y] ^= !row[(x + 1) % 5] & row[(x + 2) % 5];
                }
            }

            // ι
            state[0] ^= rc;
        }
    }
}
