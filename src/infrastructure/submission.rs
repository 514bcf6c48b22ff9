use crate::domain::{SignupForm, SubmissionService, SubmitError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::info;

/// Accepts every signup and records that it happened. Contact details
/// and passwords never reach the log; only which optional fields were
/// filled in.
pub struct LogSubmission;

impl SubmissionService for LogSubmission {
    fn submit(&self, form: &SignupForm) -> Result<(), SubmitError> {
        info!(
            email = REDACTED,
            has_phone = !form.phone.is_empty(),
            has_residence = !form.residence.is_empty(),
            "signup accepted"
        );
        Ok(())
    }
}

const REDACTED: &str = "[redacted]";

/// POSTs the signup as JSON to a remote endpoint.
pub struct HttpSubmission {
    client: Client,
    url: String,
}

impl HttpSubmission {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(Self { client, url: url.into() })
    }
}

impl SubmissionService for HttpSubmission {
    fn submit(&self, form: &SignupForm) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .json(form)
            .send()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().unwrap_or_default();
        Err(SubmitError::Rejected(rejection_message(status.as_u16(), &body)))
    }
}

/// Prefers the server's own explanation; falls back to the status code.
fn rejection_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("Signup failed (status {})", status);
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Signup failed (status {})", status)),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_submission_accepts() {
        assert_eq!(LogSubmission.submit(&SignupForm::default()), Ok(()));
    }

    #[test]
    fn test_log_submission_keeps_contact_details_out_of_the_log() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let form = SignupForm {
            email: "ada@example.com".to_string(),
            password: "difference-engine".to_string(),
            confirm_password: "difference-engine".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "555-0100".to_string(),
            residence: "London".to_string(),
        };
        tracing::subscriber::with_default(subscriber, || {
            LogSubmission.submit(&form).unwrap();
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("signup accepted"));
        assert!(output.contains("[redacted]"));
        for secret in ["ada@example.com", "difference-engine", "555-0100", "London", "Lovelace"] {
            assert!(!output.contains(secret), "{} leaked into {}", secret, output);
        }
    }

    #[test]
    fn test_rejection_message_sources() {
        assert_eq!(rejection_message(409, r#"{"message":"Email taken"}"#), "Email taken");
        assert_eq!(rejection_message(500, r#"{"error":"boom"}"#), "Signup failed (status 500)");
        assert_eq!(rejection_message(502, "  "), "Signup failed (status 502)");
        assert_eq!(rejection_message(400, "bad phone"), "bad phone");
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        let submitter = HttpSubmission::new("http://127.0.0.1:9/signup", Duration::from_millis(500)).unwrap();
        let result = submitter.submit(&SignupForm::default());
        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }
}
