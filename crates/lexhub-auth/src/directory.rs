//! Account store trait used by the authenticator.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use lexhub_core::result::AppResult;
use lexhub_entity::account::{Account, Role};

/// Read/write access to account rows, scoped to exactly the operations the
/// login flow needs. Implemented by `AccountRepository` in
/// `lexhub-database`; tests substitute an in-memory directory.
#[async_trait]
pub trait AccountDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve an account by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// Resolve an account by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Look up the role attached to an account.
    async fn role_by_id(&self, id: i32) -> AppResult<Option<Role>>;

    /// Persist a failed attempt: the new counter value and, when the
    /// lockout threshold was reached, the lockout deadline — in a single
    /// write. The counter is computed by the caller from the row it read;
    /// concurrent failures may lose an increment, which is accepted.
    async fn record_failed_attempt(
        &self,
        account_id: i64,
        attempts: i32,
        locked_until: Option<DateTime<Utc>>,
    ) -> AppResult<()>;

    /// Persist a successful login: reset the counter, clear the lockout,
    /// and stamp the last-access time — in a single write.
    async fn record_successful_login(&self, account_id: i64, at: DateTime<Utc>) -> AppResult<()>;
}
