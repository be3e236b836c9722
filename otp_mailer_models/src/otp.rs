use crate::Sensitive;

/// A request to deliver a one-time password to an email address.
///
/// Both fields are opaque: they are neither validated nor normalized and are
/// handed to the email provider exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmailRequest {
    pub email: String,
    pub otp: Sensitive<String>,
}

/// Outcome of a single otp email dispatch.
///
/// `error` is set if and only if `success` is `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmailResult {
    success: bool,
    error: Option<String>,
}

impl OtpEmailResult {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_error(self) -> Option<String> {
        self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_error() {
        let result = OtpEmailResult::success();
        assert!(result.is_success());
        assert_eq!(result.error(), None);
    }

    #[test]
    fn failure_keeps_message() {
        let result = OtpEmailResult::failure("invalid recipient");
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("invalid recipient"));
    }
}
