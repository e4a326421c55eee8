use serde::Deserialize;

use crate::domain::email::Email;

/// Identity asserted by the federated provider after a successful
/// authorization-code exchange. Arrives pre-verified; no local password
/// check happens on this path.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedIdentity {
    pub email: Email,
    pub name: String,
}
