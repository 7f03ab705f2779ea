//! Domain layer: wire types, the submission phase, and response interpretation.

pub mod models;
pub mod services;
pub mod errors;

pub use models::*;
pub use services::*;
pub use errors::*;
