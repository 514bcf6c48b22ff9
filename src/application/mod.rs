//! Application layer managing state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the signup wizard, the passenger table controller, and the shell that
//! holds both.

pub mod wizard;
pub mod table;
pub mod dispatcher;
pub mod state;

pub use wizard::*;
pub use table::*;
pub use dispatcher::*;
pub use state::*;
