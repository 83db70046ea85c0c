//! `git init` → `sl init`, arguments passed through unchanged.

use crate::core::error::GitslError;
use crate::core::sl;

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let mut sl_args = vec!["init".to_string()];
    sl_args.extend(args.iter().cloned());
    sl::passthrough(&sl_args)
}
