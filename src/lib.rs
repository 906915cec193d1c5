//! Mini Blog - A small authenticated posting API
//!
//! Users sign up, log in and manage short text posts. Post listings are served
//! through a per-user TTL cache with LRU eviction.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
