//! TSENT - Terminal Sentiment Client Library
//!
//! A terminal client that submits free-form text to a sentiment
//! classification service and shows a positive/negative verdict.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
