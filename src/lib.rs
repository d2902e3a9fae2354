//! Popcorn Library
//!
//! Search a movie database, inspect details, and keep a personally rated
//! watched list that survives restarts.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod storage;
pub mod utils;

pub use error::{Error, Result};
