// Account and session records

use serde::{Deserialize, Serialize};

/// A registered account as persisted in the accounts table.
///
/// The secret is stored and compared as entered. That matches the local
/// demo-grade store this crate implements; anything facing real users
/// would keep a salted hash here instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub secret: String,
}

/// The single active login, persisted in the session table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub account_id: String,
    pub email: String,
    /// Opaque token minted at login. Never validated against anything,
    /// only carried so a future remote backend has a slot to fill.
    pub token: String,
}

impl Session {
    /// Secret-free identity of the logged-in account.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.account_id.clone(),
            email: self.email.clone(),
        }
    }
}

/// What the rest of the app gets to know about the logged-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}
