//! Infrastructure shared by every command translator: argv handling, the
//! target-tool invoker, the generic flag scanner, and the pure output
//! transformers.

pub mod args;
pub mod error;
pub mod output;
pub mod porcelain;
pub mod scan;
pub mod sl;
pub mod templates;
