//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP classifier client, command-line
//! configuration, and log file setup.

pub mod classifier;
pub mod config;
pub mod logging;

pub use classifier::*;
pub use config::*;
