//! Wiring of the concrete service types.

use otp_mailer_api_callable::CallableServer;
use otp_mailer_core_otp_impl::OtpEmailServiceImpl;
use otp_mailer_email_impl::EmailServiceImpl;

pub type Email = EmailServiceImpl;
pub type OtpEmail = OtpEmailServiceImpl<Email>;
pub type Server = CallableServer<OtpEmail>;

pub fn otp_email(email: Email) -> OtpEmail {
    OtpEmailServiceImpl::new(email)
}

pub fn server(email: Email) -> Server {
    CallableServer::new(otp_email(email))
}
