//! User model.

use serde::{Deserialize, Serialize};

/// A user record stored by the service.
///
/// The id is assigned by the repository on insert and immutable afterwards.
/// A client-supplied id in a request body deserializes (so create payloads
/// may carry one) but is ignored on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Repository-assigned identifier, strictly increasing from 1.
    #[serde(default)]
    pub id: u64,

    /// Display name.
    pub name: String,
}
