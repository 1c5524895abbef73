//! Keccak-f[1600] on the ARMv8.2 SHA3 extension
//!
//! Each lane sits in the low half of its own vector register; the high half
//! is carried along and discarded. θ is `EOR3` plus `RAX1`, the combined
//! θ/ρ step is `XAR` (rotate right of an XOR, so the immediates are
//! `64 - r`), and χ is `BCAX`.

use core::arch::aarch64::*;

use super::super::{KeccakState, RC};

/// # Safety
///
/// The CPU must support the SHA3 extension.
#[target_feature(enable = "neon,sha3")]
pub(super) unsafe fn permute_sha3(state: &mut KeccakState) {
    let mut a = [vdupq_n_u64(0); 25];
    for (v, &lane) in a.iter_mut().zip(state.iter()) {
        *v = vdupq_n_u64(lane);
    }
    for &rc in RC.iter() {
        round(&mut a, rc);
    }
    for (lane, v) in state.iter_mut().zip(a.iter()) {
        *lane = vgetq_lane_u64::<0>(*v);
    }
}

#[target_feature(enable = "neon,sha3")]
#[inline]
unsafe fn round(a: &mut [uint64x2_t; 25], rc: u64) {
    let c0 = veor3q_u64(veor3q_u64(a[0], a[5], a[10]), a[15], a[20]);
    let c1 = veor3q_u64(veor3q_u64(a[1], a[6], a[11]), a[16], a[21]);
    let c2 = veor3q_u64(veor3q_u64(a[2], a[7], a[12]), a[17], a[22]);
    let c3 = veor3q_u64(veor3q_u64(a[3], a[8], a[13]), a[18], a[23]);
    let c4 = veor3q_u64(veor3q_u64(a[4], a[9], a[14]), a[19], a[24]);

    // RAX1: n ^ rol(m, 1)
    let d0 = vrax1q_u64(c4, c1);
    let d1 = vrax1q_u64(c0, c2);
    let d2 = vrax1q_u64(c1, c3);
    let d3 = vrax1q_u64(c2, c4);
    let d4 = vrax1q_u64(c3, c0);

    // B[y, 2x + 3y] = rot(A[x, y] ^ D[x], r[x, y])
    let b0 = veorq_u64(a[0], d0);
    let b10 = vxarq_u64::<63>(a[1], d1);
    let b20 = vxarq_u64::<2>(a[2], d2);
    let b5 = vxarq_u64::<36>(a[3], d3);
    let b15 = vxarq_u64::<37>(a[4], d4);
    let b16 = vxarq_u64::<28>(a[5], d0);
    let b1 = vxarq_u64::<20>(a[6], d1);
    let b11 = vxarq_u64::<58>(a[7], d2);
    let b21 = vxarq_u64::<9>(a[8], d3);
    let b6 = vxarq_u64::<44>(a[9], d4);
    let b7 = vxarq_u64::<61>(a[10], d0);
    let b17 = vxarq_u64::<54>(a[11], d1);
    let b2 = vxarq_u64::<21>(a[12], d2);
    let b12 = vxarq_u64::<39>(a[13], d3);
    let b22 = vxarq_u64::<25>(a[14], d4);
    let b23 = vxarq_u64::<23>(a[15], d0);
    let b8 = vxarq_u64::<19>(a[16], d1);
    let b18 = vxarq_u64::<49>(a[17], d2);
    let b3 = vxarq_u64::<43>(a[18], d3);
    let b13 = vxarq_u64::<56>(a[19], d4);
    let b14 = vxarq_u64::<46>(a[20], d0);
    let b24 = vxarq_u64::<62>(a[21], d1);
    let b9 = vxarq_u64::<3>(a[22], d2);
    let b19 = vxarq_u64::<8>(a[23], d3);
    let b4 = vxarq_u64::<50>(a[24], d4);

    // BCAX: n ^ (m & !a), so A[x] = B[x] ^ (!B[x+1] & B[x+2])
    let b = [
        b0, b1, b2, b3, b4, b5, b6, b7, b8, b9, b10, b11, b12, b13, b14, b15, b16, b17, b18, b19,
        b20, b21, b22, b23, b24,
    ];
    for y in (0..25).step_by(5) {
        a[y] = vbcaxq_u64(b[y], b[y + 2], b[y + 1]);
        a[y + 1] = vbcaxq_u64(b[y + 1], b[y + 3], b[y + 2]);
        a[y + 2] = vbcaxq_u64(b[y + 2], b[y + 4], b[y + 3]);
        a[y + 3] = vbcaxq_u64(b[y + 3], b[y], b[y + 4]);
        a[y + 4] = vbcaxq_u64(b[y + 4], b[y + 1], b[y]);
    }

    a[0] = veorq_u64(a[0], vdupq_n_u64(rc));
}
