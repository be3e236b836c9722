use otp_mailer_models::otp::{OtpEmailRequest, OtpEmailResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiOtpEmailRequest {
    /// Address the otp is sent to
    pub email: String,
    /// The one-time password, included in the email as is
    pub otp: String,
}

impl From<ApiOtpEmailRequest> for OtpEmailRequest {
    fn from(value: ApiOtpEmailRequest) -> Self {
        Self {
            email: value.email,
            otp: value.otp.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiOtpEmailResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<OtpEmailResult> for ApiOtpEmailResult {
    fn from(value: OtpEmailResult) -> Self {
        Self {
            success: value.is_success(),
            error: value.into_error(),
        }
    }
}
