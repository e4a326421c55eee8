pub mod use_cases;

pub use use_cases::{
    federated_login::{FederatedLoginError, FederatedLoginUseCase},
    forgot_password::{ForgotPasswordError, ForgotPasswordUseCase},
    list_users::ListUsersUseCase,
    login::{LoginError, LoginUseCase},
    my_profile::MyProfileUseCase,
    platform_stats::{PlatformStats, PlatformStatsUseCase},
    register::{RegisterError, RegisterUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
    update_role::{UpdateRoleError, UpdateRoleUseCase},
    verify_otp::{VerifyOtpError, VerifyOtpUseCase},
};

/// Validity window of the activation token.
pub const ACTIVATION_TOKEN_TTL_SECONDS: i64 = 5 * 60;
/// Validity window of the session token.
pub const SESSION_TOKEN_TTL_SECONDS: i64 = 15 * 24 * 60 * 60;
/// Validity window claimed by the reset token itself.
pub const RESET_TOKEN_TTL_SECONDS: i64 = 10 * 60;
/// Server-side reset watermark; shorter than the token TTL and
/// authoritative over it.
pub const RESET_WATERMARK_TTL_SECONDS: i64 = 5 * 60;
