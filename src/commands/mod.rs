//! One module per translated git command.

pub mod add;
pub mod blame;
pub mod branch;
pub mod checkout;
pub mod clean;
pub mod clone;
pub mod commit;
pub mod config;
pub mod diff;
pub mod grep;
pub mod init;
pub mod log;
pub mod mv;
pub mod restore;
pub mod rev_parse;
pub mod rm;
pub mod show;
pub mod stash;
pub mod status;
pub mod switch;
