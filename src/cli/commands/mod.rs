//! CLI command implementations

pub mod init;
pub mod process;
pub mod status;
pub mod submit;
pub mod validate;
pub mod worker;
