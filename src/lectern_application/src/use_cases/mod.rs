pub mod federated_login;
pub mod forgot_password;
pub mod list_users;
pub mod login;
pub mod my_profile;
pub mod platform_stats;
pub mod register;
pub mod reset_password;
pub mod update_role;
pub mod verify_otp;

#[cfg(test)]
pub(crate) mod test_support;
