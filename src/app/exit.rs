//! Exit code policy.

use crate::config::{FailOn, EXIT_CODE_POLICY_FAILURE};
use crate::models::Summary;

/// Maps the batch summary to a process exit code under `fail_on`.
pub fn evaluate_exit_code(fail_on: FailOn, summary: &Summary) -> i32 {
    match fail_on {
        FailOn::Never => 0,
        FailOn::AnyMissing => {
            if summary.missing > 0 {
                EXIT_CODE_POLICY_FAILURE
            } else {
                0
            }
        }
    }
}
