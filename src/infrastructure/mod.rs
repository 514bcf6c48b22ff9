//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! configuration, logging, and the HTTP collaborators.

pub mod config;
pub mod logging;
pub mod passenger_api;
pub mod submission;

pub use config::*;
pub use logging::*;
pub use passenger_api::*;
pub use submission::*;
