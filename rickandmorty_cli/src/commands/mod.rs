//! CLI subcommand implementations.

pub mod all;
pub mod browse;
pub mod info;
pub mod list;
pub mod multi;
pub mod page;
pub mod search;
pub mod show;
