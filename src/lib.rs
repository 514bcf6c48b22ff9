//! TSFORM - Terminal Signup Form Library
//!
//! A three-step signup wizard with schema validation and a paginated
//! table of remote passenger records, rendered in the terminal.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
