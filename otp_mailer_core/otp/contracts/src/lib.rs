use std::future::Future;

use otp_mailer_models::otp::{OtpEmailRequest, OtpEmailResult};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait OtpEmailService: Send + Sync + 'static {
    /// Send the one-time password in `request` to its email address.
    ///
    /// Delivery failures are reported in the returned [`OtpEmailResult`];
    /// this never fails otherwise.
    fn send_otp_email(
        &self,
        request: OtpEmailRequest,
    ) -> impl Future<Output = OtpEmailResult> + Send;
}

#[cfg(feature = "mock")]
impl MockOtpEmailService {
    pub fn with_send_otp_email(mut self, request: OtpEmailRequest, result: OtpEmailResult) -> Self {
        self.expect_send_otp_email()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
