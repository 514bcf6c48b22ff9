//! Collaborators the application layer talks to without knowing how they
//! are implemented.

use super::errors::{FetchResult, SubmitError};
use super::models::{PassengerPage, SignupForm};

/// Remote listing of passengers, read one page at a time.
///
/// Implementations are called from worker threads.
pub trait PassengerSource: Send + Sync {
    fn fetch_page(&self, page: usize, rows_per_page: usize) -> FetchResult<PassengerPage>;
}

/// Receives the completed signup form.
pub trait SubmissionService {
    fn submit(&self, form: &SignupForm) -> Result<(), SubmitError>;
}
