//! Axum HTTP layer for the Lectern authentication service.
//!
//! Handlers stay thin: extract and validate the request shape, run the
//! matching use case from `lectern_application`, and translate its error
//! through the single [`ApiError`] boundary. Session authentication lives
//! in [`gate`], applied as router middleware by the composition crate.

pub mod error;
pub mod gate;
pub mod responses;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use gate::{AuthenticatedUser, SessionCredential, authenticate, require_admin, session_cookie};
pub use responses::{LoginResponse, MessageResponse, RegisterResponse, RoleResponse, UserProfile};
pub use state::AppState;
