use thiserror::Error;

/// Classification of an [`OrderError`], for callers that route on kind
/// rather than message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, unresolvable ID, wrong entity kind, or a failed
    /// domain rule. User-correctable.
    BadRequest,
    /// Entities resolved but the issuer lacks authorization. Not retryable
    /// without a state change.
    Forbidden,
    /// An internal invariant violated — a defect in the caller or pipeline,
    /// not in user input.
    Bug,
    /// A deliberately unfinished stage or command.
    NotImplemented,
    /// Reserved for transport-layer authentication failures.
    Unauthorized,
}

/// Error produced while validating or executing a single order.
///
/// Command handlers return the first blocking error for their order; the
/// turn pipeline collects these and always runs to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("invalid request: {0}")]
    BadRequest(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("bug: {0}")]
    Bug(String),
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::BadRequest(_) => ErrorKind::BadRequest,
            OrderError::Forbidden(_) => ErrorKind::Forbidden,
            OrderError::Bug(_) => ErrorKind::Bug,
            OrderError::NotImplemented(_) => ErrorKind::NotImplemented,
            OrderError::Unauthorized(_) => ErrorKind::Unauthorized,
        }
    }

    pub(crate) fn bad_request(msg: impl Into<String>) -> Self {
        OrderError::BadRequest(msg.into())
    }

    pub(crate) fn forbidden(msg: impl Into<String>) -> Self {
        OrderError::Forbidden(msg.into())
    }

    /// Log and wrap an internal defect. Bug-class errors are surfaced
    /// distinctly from user errors so they reach operators, not players.
    pub(crate) fn bug(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!(defect = %msg, "internal invariant violated");
        OrderError::Bug(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_classify() {
        assert_eq!(
            OrderError::bad_request("x").kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(OrderError::NotImplemented("junk").kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn messages_render_with_prefix() {
        let err = OrderError::forbidden("asset refuses order");
        assert_eq!(err.to_string(), "forbidden: asset refuses order");
    }
}
