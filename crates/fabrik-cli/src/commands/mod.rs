pub mod completions;
pub mod computer;
pub mod config;
pub mod init;
pub mod list;
pub mod shape;
