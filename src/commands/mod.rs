//! Command implementations for waypath

pub mod dispatch;
pub mod export;
pub mod format;
pub mod graph;
pub mod import;
pub mod init;
pub mod location;
pub mod path;
pub mod route;
pub mod status;
