//! Core application wiring

pub mod config;

pub use config::Config;
