pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod search;
pub mod sniffer;
pub mod translator;
