pub mod models;
pub mod validation;
pub mod ports;
pub mod errors;

pub use models::*;
pub use validation::*;
pub use ports::*;
pub use errors::*;
