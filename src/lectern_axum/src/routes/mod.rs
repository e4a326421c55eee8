//! Route handlers, one module per operation.

pub mod admin;
pub mod federated;
pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod update_role;
pub mod verify;

pub use admin::{list_users, platform_stats};
pub use federated::{google_callback, google_login};
pub use forgot_password::forgot_password;
pub use login::login;
pub use logout::logout;
pub use profile::my_profile;
pub use register::register;
pub use reset_password::reset_password;
pub use update_role::update_role;
pub use verify::verify;
