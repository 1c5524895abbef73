//! BMI1/BMI2 build of the lane-explicit round

use super::super::{unrolled, KeccakState, RC};

/// # Safety
///
/// The CPU must support BMI1 and BMI2.
#[target_feature(enable = "bmi1,bmi2")]
pub(super) unsafe fn permute_bmi(state: &mut KeccakState) {
    for &rc in RC.iter() {
        unrolled::round(state, rc);
    }
}
