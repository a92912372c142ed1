pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod lookup;
pub mod server;
pub mod service;
pub mod stats;
