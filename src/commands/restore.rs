//! `git restore` → `sl revert`.
//!
//! Working-tree restoration only; there is no staging area on the sl side,
//! so `--staged` has nothing to act on.

use crate::core::error::GitslError;
use crate::core::sl;

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let mut sl_args = vec!["revert".to_string()];
    sl_args.extend(args.iter().cloned());
    sl::passthrough(&sl_args)
}
