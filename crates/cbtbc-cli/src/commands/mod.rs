//! CLI command implementations.

pub mod classify;
pub mod init;
pub mod inspect;
pub mod train;
