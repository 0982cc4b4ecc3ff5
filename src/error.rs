//! Console Errors
//!
//! Every network or input failure is converted into one of these at the
//! adapter/submission boundary; nothing reaches the UI root unhandled.

use thiserror::Error;

/// Banner shown in place of a grid whose fetch failed
pub const FETCH_FAILED_MESSAGE: &str = "The server was unable to handle that request.";

/// Banner shown when a form page cannot load its initial data
pub const LOAD_FAILED_MESSAGE: &str = "The server is experiencing problems right now";

pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "Account already exists. Please choose a different email address.";
pub const WRONG_PASSWORD_MESSAGE: &str = "Current password was incorrect";
pub const SERVER_ERROR_MESSAGE: &str = "Server error, try again later";

/// Network, transport or envelope failure of a read request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("malformed response: {0}")]
    Envelope(String),
}

impl FetchError {
    /// Every fetch failure shows the same fixed banner
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Local field check failure. Marks one field, blocks nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown filter category `{0}`")]
    UnknownCategory(String),
    #[error("`{operator}` cannot be used with {category}")]
    OperatorNotAllowed { category: String, operator: String },
    #[error("a value is required")]
    EmptyValue,
    #[error("`{0}` is not a whole number")]
    NotAnInteger(String),
    #[error("`{0}` is not a date (expected YYYY-MM-DD)")]
    NotADate(String),
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Field marked by a submission failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
}

/// A mutating POST failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("email not unique")]
    DuplicateEmail,
    #[error("old password incorrect")]
    WrongPassword,
    #[error("server error: {0}")]
    Server(String),
}

impl SubmissionError {
    /// Map the plain-text error body of a failed POST
    pub fn from_body(body: &str) -> Self {
        match body.trim() {
            "email not unique" => SubmissionError::DuplicateEmail,
            "old password incorrect" => SubmissionError::WrongPassword,
            other => SubmissionError::Server(other.to_string()),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::DuplicateEmail => DUPLICATE_EMAIL_MESSAGE,
            SubmissionError::WrongPassword => WRONG_PASSWORD_MESSAGE,
            SubmissionError::Server(_) => SERVER_ERROR_MESSAGE,
        }
    }

    /// The one field a failure marks invalid, if any
    pub fn field(&self) -> Option<FormField> {
        match self {
            SubmissionError::DuplicateEmail => Some(FormField::Email),
            _ => None,
        }
    }
}

impl From<FetchError> for SubmissionError {
    fn from(err: FetchError) -> Self {
        SubmissionError::Server(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_share_one_message() {
        for err in [
            FetchError::Status(500),
            FetchError::Timeout(30_000),
            FetchError::Transport("reset".into()),
            FetchError::Envelope("missing field `aaData`".into()),
        ] {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_submission_error_from_body() {
        let dup = SubmissionError::from_body("email not unique\n");
        assert_eq!(dup, SubmissionError::DuplicateEmail);
        assert_eq!(dup.field(), Some(FormField::Email));
        assert_eq!(dup.user_message(), DUPLICATE_EMAIL_MESSAGE);

        let wrong = SubmissionError::from_body("old password incorrect");
        assert_eq!(wrong.user_message(), WRONG_PASSWORD_MESSAGE);
        assert_eq!(wrong.field(), None);

        let other = SubmissionError::from_body("boom");
        assert_eq!(other.user_message(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_transport_failure_becomes_server_error() {
        let err: SubmissionError = FetchError::Status(502).into();
        assert_eq!(err.user_message(), SERVER_ERROR_MESSAGE);
    }
}
