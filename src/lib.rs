pub mod analysis;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod github;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod server;
pub mod types;
