//! # Lectern - E-learning Authentication Service Library
//!
//! This is a facade crate that re-exports all public APIs from the auth service components.
//! Use this crate to get access to all authentication functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! lectern = { path = "../lectern" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `Otp`, `Role`, etc.
//! - **Port traits**: `UserStore`, `EmailClient`, `PasswordHasher`, `TokenCodec`, `IdentityProvider`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `ResetPasswordUseCase`, etc.
//! - **Adapters**: `HashMapUserStore`, `JwtTokenCodec`, `Argon2PasswordHasher`,
//!   `PostmarkEmailClient`, `GoogleIdentityProvider`, etc.
//! - **Service**: `AuthService` - The main entry point for the auth service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use lectern_core::*;
}

// Re-export most commonly used core types at the root level
pub use lectern_core::{
    ActivationClaims, Email, Otp, Password, PendingUser, ResetClaims, Role, SessionClaims,
    TokenKind, User, UserId, VerifiedIdentity,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use lectern_core::ports::*;
}

// Re-export port traits at root level
pub use lectern_core::{
    EmailClient, IdentityProvider, PasswordHasher, TokenCodec, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use lectern_application::*;
}

// Re-export use cases at root level
pub use lectern_application::{
    FederatedLoginUseCase, ForgotPasswordUseCase, ListUsersUseCase, LoginUseCase, MyProfileUseCase,
    PlatformStatsUseCase, RegisterUseCase, ResetPasswordUseCase, UpdateRoleUseCase,
    VerifyOtpUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use lectern_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use lectern_adapters::email::*;
    }

    /// Token codec implementations
    pub mod tokens {
        pub use lectern_adapters::tokens::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use lectern_adapters::hashing::*;
    }

    /// Federated identity providers
    pub mod federation {
        pub use lectern_adapters::federation::*;
    }

    /// Configuration
    pub mod config {
        pub use lectern_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use lectern_adapters::{
    Argon2PasswordHasher, GoogleIdentityProvider, HashMapUserStore, JwtTokenCodec,
    MockEmailClient, PostmarkEmailClient, Settings,
};

// ============================================================================
// HTTP Layer
// ============================================================================

/// Axum handlers, session gate, and the API error boundary
pub mod http_layer {
    pub use lectern_axum::*;
}

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use lectern_auth_service::{AuthService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
