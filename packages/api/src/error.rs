//! Failure taxonomy for everything that crosses the network.
//!
//! Every request helper in this crate returns `Result<_, ApiError>`. The
//! variants map one-to-one onto what the UI needs to distinguish: a message
//! to show inline, a forced return to the login screen, or a retry hint.
//! Authentication rejections are special-cased because the client handles
//! them globally; callers only ever see [`ApiError::Unauthorized`] after the
//! stored session has already been cleared.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request was understood but refused, with a server-provided reason.
    #[error("{0}")]
    Validation(String),

    /// The server rejected our credentials. The stored session has already
    /// been cleared by the time callers observe this; the message is the
    /// server's own (e.g. "Invalid email or password" from a login attempt).
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// The resource is already past the requested change, e.g. approving an
    /// item a second time.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Server(String),

    #[error("Request timeout - server took too long to respond")]
    Timeout,

    #[error("Cannot connect to server. Please check if the server is running.")]
    Unreachable,
}

impl ApiError {
    /// Map a non-2xx HTTP status plus the message the server put in its error
    /// envelope (when it sent one) onto the taxonomy.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let msg = |fallback: &str| message.clone().unwrap_or_else(|| fallback.to_string());
        match status {
            401 => ApiError::Unauthorized(msg("Session expired. Please log in again.")),
            403 => ApiError::Forbidden(msg("You do not have permission to do that.")),
            404 => ApiError::NotFound(msg("Resource not found.")),
            409 => ApiError::Conflict(msg("This item was already updated.")),
            400..=499 => ApiError::Validation(msg("Request failed.")),
            _ => ApiError::Server(msg("Server error. Please try again later.")),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Collapse a repeated status transition into success.
///
/// A transition request that comes back as a conflict means somebody (or a
/// double click) already moved the item; the list is re-fetched either way,
/// so the caller has nothing useful to do with the error.
pub fn absorb_conflict<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_conflict() => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from_status(401, None),
            ApiError::Unauthorized("Session expired. Please log in again.".into())
        );
        assert_eq!(
            ApiError::from_status(401, Some("Invalid email or password".into())),
            ApiError::Unauthorized("Invalid email or password".into())
        );
        assert_eq!(
            ApiError::from_status(404, Some("Notice not found".into())),
            ApiError::NotFound("Notice not found".into())
        );
        assert_eq!(
            ApiError::from_status(409, Some("Already approved".into())),
            ApiError::Conflict("Already approved".into())
        );
        assert_eq!(
            ApiError::from_status(400, Some("Title is required".into())),
            ApiError::Validation("Title is required".into())
        );
        assert_eq!(
            ApiError::from_status(500, None),
            ApiError::Server("Server error. Please try again later.".into())
        );
    }

    #[test]
    fn test_server_message_wins_over_fallback() {
        let err = ApiError::from_status(422, Some("Subject too long".into()));
        assert_eq!(err.to_string(), "Subject too long");
    }

    #[test]
    fn test_distinguished_messages() {
        assert_eq!(
            ApiError::Timeout.to_string(),
            "Request timeout - server took too long to respond"
        );
        assert_eq!(
            ApiError::Unreachable.to_string(),
            "Cannot connect to server. Please check if the server is running."
        );
    }

    #[test]
    fn test_absorb_conflict() {
        let repeated: Result<(), ApiError> = Err(ApiError::Conflict("done already".into()));
        assert_eq!(absorb_conflict(repeated), Ok(None));

        let fresh: Result<(), ApiError> = Ok(());
        assert_eq!(absorb_conflict(fresh), Ok(Some(())));

        let broken: Result<(), ApiError> = Err(ApiError::Timeout);
        assert_eq!(absorb_conflict(broken), Err(ApiError::Timeout));
    }
}
