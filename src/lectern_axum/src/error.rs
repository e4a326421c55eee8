use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lectern_application::{
    ForgotPasswordError, LoginError, RegisterError, ResetPasswordError, UpdateRoleError,
    VerifyOtpError,
};
use lectern_core::{EmailError, OtpError, PasswordError, RoleError, TokenError, UserStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Single HTTP error boundary. Every handler failure funnels through
/// here and comes out as a uniform `{"message"}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadCredentials(String),

    /// Session credential resolved to a user that no longer exists.
    #[error("Session is no longer valid")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ApiError::Validation(_) | ApiError::BadCredentials(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<OtpError> for ApiError {
    fn from(error: OtpError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<RoleError> for ApiError {
    fn from(error: RoleError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::Validation(error.to_string()),
            UserStoreError::UserNotFound => ApiError::NotFound(error.to_string()),
            UserStoreError::UnexpectedError(e) => ApiError::Unexpected(e),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired | TokenError::Invalid => ApiError::Validation(error.to_string()),
            TokenError::Unexpected(e) => ApiError::Unexpected(e),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserAlreadyExists => ApiError::Validation(error.to_string()),
            RegisterError::UserStore(e) => e.into(),
            RegisterError::Hasher(e) => ApiError::Unexpected(e.to_string()),
            RegisterError::Token(e) => ApiError::Unexpected(e.to_string()),
            RegisterError::Email(e) => ApiError::Unexpected(e),
        }
    }
}

impl From<VerifyOtpError> for ApiError {
    fn from(error: VerifyOtpError) -> Self {
        match error {
            VerifyOtpError::IncorrectOtp => ApiError::Validation(error.to_string()),
            VerifyOtpError::Token(e) => e.into(),
            VerifyOtpError::UserStore(UserStoreError::UserAlreadyExists) => {
                ApiError::Validation(UserStoreError::UserAlreadyExists.to_string())
            }
            VerifyOtpError::UserStore(e) => ApiError::Unexpected(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            // A missing account and a wrong password are the same
            // failure to the caller.
            LoginError::UserStore(UserStoreError::UserNotFound) | LoginError::IncorrectPassword => {
                ApiError::BadCredentials("Invalid email or password".to_string())
            }
            LoginError::UserStore(e) => ApiError::Unexpected(e.to_string()),
            LoginError::Hasher(e) => ApiError::Unexpected(e.to_string()),
            LoginError::Token(e) => ApiError::Unexpected(e.to_string()),
        }
    }
}

impl From<ForgotPasswordError> for ApiError {
    fn from(error: ForgotPasswordError) -> Self {
        match error {
            ForgotPasswordError::UserStore(e) => e.into(),
            ForgotPasswordError::Token(e) => ApiError::Unexpected(e.to_string()),
            ForgotPasswordError::Email(e) => ApiError::Unexpected(e),
        }
    }
}

impl From<ResetPasswordError> for ApiError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::Token(e) => e.into(),
            ResetPasswordError::WatermarkExpired => ApiError::Validation(error.to_string()),
            ResetPasswordError::UserStore(e) => e.into(),
            ResetPasswordError::Hasher(e) => ApiError::Unexpected(e.to_string()),
        }
    }
}

impl From<UpdateRoleError> for ApiError {
    fn from(error: UpdateRoleError) -> Self {
        match error {
            UpdateRoleError::UserStore(e) => e.into(),
        }
    }
}
