pub mod apps;
pub mod asset;
pub mod commands;
pub mod config;
pub mod countdown;
pub mod download;
pub mod github;
pub mod release;
pub mod runtime;
pub mod streaks;
