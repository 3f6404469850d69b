// Account registry and single-session lifecycle

use log::info;

use crate::ids;
use crate::storage::TableStore;

use super::error::{AuthError, AuthResult};
use super::models::{Account, Identity, Session};

/// Table holding every registered account.
pub const ACCOUNTS_TABLE: &str = "accounts";
/// Table holding the active session; empty or one record, never more.
pub const SESSION_TABLE: &str = "session";

/// Account seeded on first use so the app is explorable without signing up.
pub const DEMO_ACCOUNT_ID: &str = "demo-user-001";
const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_SECRET: &str = "demo123";

/// Local account registry plus the single active session.
///
/// Owns the accounts and session tables outright; no other module reads
/// or writes them. At most one session exists at a time and logging in
/// replaces whatever session was there before.
pub struct SessionStore {
    tables: TableStore,
}

impl SessionStore {
    /// Opens the store over `tables`, seeding the demo account if the
    /// account table is empty.
    pub fn new(tables: TableStore) -> Self {
        let store = Self { tables };
        store.seed_demo_account();
        store
    }

    /// Creates an account for `email` and logs it straight in.
    ///
    /// Fails with [`AuthError::DuplicateEmail`] when the email is already
    /// registered. Emails are compared byte-for-byte; `A@x.com` and
    /// `a@x.com` are two different accounts.
    pub fn register(&self, email: &str, secret: &str) -> AuthResult<Session> {
        let mut accounts: Vec<Account> = self.tables.read(ACCOUNTS_TABLE);
        if accounts.iter().any(|account| account.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let account = Account {
            id: ids::generate(),
            email: email.to_string(),
            secret: secret.to_string(),
        };
        accounts.push(account.clone());
        self.tables.write(ACCOUNTS_TABLE, &accounts);

        Ok(self.open_session(&account))
    }

    /// Logs in when `email` and `secret` exactly match a stored account.
    pub fn login(&self, email: &str, secret: &str) -> AuthResult<Session> {
        let accounts: Vec<Account> = self.tables.read(ACCOUNTS_TABLE);
        let account = accounts
            .iter()
            .find(|account| account.email == email && account.secret == secret)
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(self.open_session(account))
    }

    /// Clears the active session. A no-op when nobody is logged in.
    pub fn logout(&self) {
        self.tables.write::<Session>(SESSION_TABLE, &[]);
    }

    /// The active session, if any. Answered from the session table alone;
    /// the account registry is never consulted.
    pub fn current_session(&self) -> Option<Session> {
        self.tables
            .read::<Session>(SESSION_TABLE)
            .into_iter()
            .next()
    }

    /// Identity of the logged-in account, if any.
    pub fn current_user(&self) -> Option<Identity> {
        self.current_session().map(|session| session.identity())
    }

    fn open_session(&self, account: &Account) -> Session {
        let session = Session {
            account_id: account.id.clone(),
            email: account.email.clone(),
            token: ids::generate(),
        };
        self.tables
            .write(SESSION_TABLE, std::slice::from_ref(&session));
        session
    }

    fn seed_demo_account(&self) {
        let accounts: Vec<Account> = self.tables.read(ACCOUNTS_TABLE);
        if !accounts.is_empty() {
            return;
        }
        info!("Seeding demo account {}", DEMO_EMAIL);
        self.tables.write(
            ACCOUNTS_TABLE,
            &[Account {
                id: DEMO_ACCOUNT_ID.to_string(),
                email: DEMO_EMAIL.to_string(),
                secret: DEMO_SECRET.to_string(),
            }],
        );
    }
}
