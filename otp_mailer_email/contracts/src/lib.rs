use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hand a single message to the email provider.
    ///
    /// Any error returned here means the provider did not accept the message.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Check that the provider is reachable and accepts our credentials.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// A plain text email.
///
/// Addresses are passed to the provider as they are. Rejecting malformed
/// addresses is left to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: String,
    pub sender: String,
    pub subject: String,
    pub body: String,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_send_error(mut self, email: Email, message: impl Into<String>) -> Self {
        let message = message.into();
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(message)))));
        self
    }
}
