pub mod email;
pub mod identity;
pub mod otp;
pub mod password;
pub mod role;
pub mod tokens;
pub mod user;
