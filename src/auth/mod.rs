//! Admin authentication: the email + one-time-code flow, the legacy password
//! login, and logout. The session token itself lives in `store::LocalState`.

pub mod client;
pub mod flow;
pub mod otp;
pub mod types;

pub use self::client::{login, logout, request_otp, verify_otp};
pub use self::flow::{AuthStep, OtpFlow};
pub use self::otp::{OTP_LENGTH, OtpCode, OtpInput};
pub use self::types::AdminUser;
