//! CLI commands

pub mod check;
pub mod feed;
pub mod list;
