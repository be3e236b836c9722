pub mod email;
pub mod otp;
pub mod serve;
