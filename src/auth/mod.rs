// Accounts and the single active session.
//
// `SessionStore` is the only writer of the accounts and session tables.
// Everything else asks it `current_user()` and treats the answer as the
// sole source of "who is logged in".

mod error;
mod models;
mod store;

// Re-export public API
pub use error::{AuthError, AuthResult};
pub use models::{Account, Identity, Session};
pub use store::{SessionStore, ACCOUNTS_TABLE, DEMO_ACCOUNT_ID, SESSION_TABLE};
