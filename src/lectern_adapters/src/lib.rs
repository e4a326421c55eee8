pub mod config;
pub mod email;
pub mod federation;
pub mod hashing;
pub mod persistence;
pub mod tokens;

pub use config::{AllowedOrigins, Settings};
pub use email::{MockEmailClient, PostmarkEmailClient};
pub use federation::GoogleIdentityProvider;
pub use hashing::Argon2PasswordHasher;
pub use persistence::HashMapUserStore;
pub use tokens::JwtTokenCodec;
