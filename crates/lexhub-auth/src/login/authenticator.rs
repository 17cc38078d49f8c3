//! The authenticator — validates a login attempt and enforces brute-force
//! protection.
//!
//! Per-account state machine:
//!
//! - `Unlocked(n)` --wrong password--> `Unlocked(n+1)` while `n+1` is below
//!   the threshold, else `Locked(now + lockout_duration)`.
//! - `Unlocked(n)` --correct password--> `Unlocked(0)`.
//! - `Locked(until)` rejects every attempt before `until` without invoking
//!   password verification; the lock expires by wall-clock comparison
//!   alone, there is no expiry job.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, error, warn};

use lexhub_core::config::auth::AuthConfig;
use lexhub_core::error::AppError;
use lexhub_core::result::AppResult;
use lexhub_entity::account::AccountWithRole;

use crate::directory::AccountDirectory;
use crate::password::CredentialVerifier;

/// Generic rejection for unknown identifier and wrong password alike, so a
/// caller cannot probe which usernames exist.
pub const MSG_CREDENCIALES_INVALIDAS: &str = "Credenciales inválidas";
/// Rejection while a lockout is in effect.
pub const MSG_CUENTA_BLOQUEADA: &str = "Cuenta bloqueada temporalmente. Intente más tarde.";
/// Rejection for administratively disabled accounts.
pub const MSG_CUENTA_DESACTIVADA: &str = "Esta cuenta está desactivada";
/// Verification-primitive failure; never attributed to the credentials.
pub const MSG_ERROR_VERIFICACION: &str = "Error al verificar las credenciales";

/// The login identifier, as supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub enum LoginIdentifier<'a> {
    /// Look the account up by username.
    Username(&'a str),
    /// Look the account up by email.
    Email(&'a str),
}

/// Validates login attempts against the account directory.
#[derive(Debug, Clone)]
pub struct Authenticator {
    /// Account store.
    directory: Arc<dyn AccountDirectory>,
    /// Password verification capability.
    verifier: Arc<dyn CredentialVerifier>,
    /// Lockout policy.
    config: AuthConfig,
}

impl Authenticator {
    /// Creates a new authenticator with injected capabilities.
    pub fn new(
        directory: Arc<dyn AccountDirectory>,
        verifier: Arc<dyn CredentialVerifier>,
        config: AuthConfig,
    ) -> Self {
        Self {
            directory,
            verifier,
            config,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Resolve the account by username or email
    /// 2. Reject while a lockout is in effect (no verification)
    /// 3. Reject disabled accounts (no verification)
    /// 4. Delegate password verification
    /// 5. On mismatch, bump the counter and lock at the threshold
    /// 6. On match, reset the counter and stamp the last access
    pub async fn authenticate(
        &self,
        identifier: LoginIdentifier<'_>,
        password: &str,
    ) -> AppResult<AccountWithRole> {
        // Step 1: Resolve the account. Lookup errors and unknown
        // identifiers collapse into the same generic rejection.
        let lookup = match identifier {
            LoginIdentifier::Username(username) => {
                self.directory.find_by_username(username).await
            }
            LoginIdentifier::Email(email) => self.directory.find_by_email(email).await,
        };

        let mut account = match lookup {
            Ok(Some(account)) => account,
            Ok(None) => {
                debug!("Login attempt for unknown identifier");
                return Err(AppError::unauthorized(MSG_CREDENCIALES_INVALIDAS));
            }
            Err(e) => {
                warn!(error = %e, "Account lookup failed during login");
                return Err(AppError::unauthorized(MSG_CREDENCIALES_INVALIDAS));
            }
        };

        let now = Utc::now();

        // Step 2: Lockout short-circuit. The password is not checked.
        if account.is_locked_at(now) {
            warn!(
                account_id = account.id,
                locked_until = ?account.bloqueado_hasta,
                "Rejected login attempt on locked account"
            );
            return Err(AppError::forbidden(MSG_CUENTA_BLOQUEADA));
        }

        // Step 3: Disabled short-circuit. The password is not checked.
        if !account.activo {
            warn!(account_id = account.id, "Rejected login on disabled account");
            return Err(AppError::forbidden(MSG_CUENTA_DESACTIVADA));
        }

        // Step 4: Delegate verification. A failure here is an internal
        // error, never a credential problem.
        let password_valid = self
            .verifier
            .verify(password, &account.password_hash)
            .map_err(|e| {
                error!(account_id = account.id, error = %e, "Password verification failed");
                AppError::internal(MSG_ERROR_VERIFICACION)
            })?;

        // Step 5: Mismatch — bump the counter, lock at the threshold.
        if !password_valid {
            self.register_failure(&account).await?;
            return Err(AppError::unauthorized(MSG_CREDENCIALES_INVALIDAS));
        }

        // Step 6: Match — reset the counter, clear any lockout, stamp the
        // last access.
        self.directory
            .record_successful_login(account.id, now)
            .await?;
        account.intentos_fallidos = Some(0);
        account.bloqueado_hasta = None;
        account.ultimo_acceso = Some(now);

        let rol = self
            .directory
            .role_by_id(account.rol_id)
            .await?
            .ok_or_else(|| {
                error!(
                    account_id = account.id,
                    rol_id = account.rol_id,
                    "Account references a missing role"
                );
                AppError::internal(MSG_ERROR_VERIFICACION)
            })?;

        debug!(account_id = account.id, "Login successful");
        Ok(AccountWithRole { account, rol })
    }

    /// Persists a failed attempt: the incremented counter and, when the
    /// threshold is reached, the lockout deadline — one write.
    async fn register_failure(
        &self,
        account: &lexhub_entity::account::Account,
    ) -> AppResult<()> {
        let attempts = account.failed_attempts() + 1;

        let locked_until = if attempts >= self.config.max_failed_attempts {
            let until = Utc::now() + Duration::minutes(self.config.lockout_duration_minutes);
            warn!(
                account_id = account.id,
                attempts,
                locked_until = %until,
                "Account locked after repeated failed login attempts"
            );
            Some(until)
        } else {
            debug!(account_id = account.id, attempts, "Failed login attempt");
            None
        };

        self.directory
            .record_failed_attempt(account.id, attempts, locked_until)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{DateTime, Utc};

    use lexhub_core::error::ErrorKind;
    use lexhub_entity::account::{Account, Role};

    /// In-memory account directory tracking every write.
    #[derive(Debug)]
    struct MemoryDirectory {
        account: Mutex<Option<Account>>,
        role: Role,
        lookups: AtomicUsize,
        fail_lookups: bool,
    }

    impl MemoryDirectory {
        fn with_account(account: Account) -> Self {
            Self {
                account: Mutex::new(Some(account)),
                role: rol_empleado(),
                lookups: AtomicUsize::new(0),
                fail_lookups: false,
            }
        }

        fn empty() -> Self {
            Self {
                account: Mutex::new(None),
                role: rol_empleado(),
                lookups: AtomicUsize::new(0),
                fail_lookups: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_lookups: true,
                ..Self::empty()
            }
        }

        fn stored(&self) -> Account {
            self.account.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl AccountDirectory for MemoryDirectory {
        async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail_lookups {
                return Err(AppError::database("connection refused"));
            }
            Ok(self
                .account
                .lock()
                .unwrap()
                .clone()
                .filter(|a| a.username == username))
        }

        async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail_lookups {
                return Err(AppError::database("connection refused"));
            }
            Ok(self
                .account
                .lock()
                .unwrap()
                .clone()
                .filter(|a| a.email == email))
        }

        async fn role_by_id(&self, id: i32) -> AppResult<Option<Role>> {
            Ok(Some(self.role.clone()).filter(|r| r.id == id))
        }

        async fn record_failed_attempt(
            &self,
            account_id: i64,
            attempts: i32,
            locked_until: Option<DateTime<Utc>>,
        ) -> AppResult<()> {
            let mut guard = self.account.lock().unwrap();
            let account = guard.as_mut().expect("no account to update");
            assert_eq!(account.id, account_id);
            account.intentos_fallidos = Some(attempts);
            if locked_until.is_some() {
                account.bloqueado_hasta = locked_until;
            }
            Ok(())
        }

        async fn record_successful_login(
            &self,
            account_id: i64,
            at: DateTime<Utc>,
        ) -> AppResult<()> {
            let mut guard = self.account.lock().unwrap();
            let account = guard.as_mut().expect("no account to update");
            assert_eq!(account.id, account_id);
            account.intentos_fallidos = Some(0);
            account.bloqueado_hasta = None;
            account.ultimo_acceso = Some(at);
            Ok(())
        }
    }

    /// Verifier with a scripted outcome and a call counter.
    #[derive(Debug)]
    struct ScriptedVerifier {
        outcome: Result<bool, ()>,
        calls: AtomicUsize,
    }

    impl ScriptedVerifier {
        fn matching() -> Self {
            Self {
                outcome: Ok(true),
                calls: AtomicUsize::new(0),
            }
        }

        fn mismatching() -> Self {
            Self {
                outcome: Ok(false),
                calls: AtomicUsize::new(0),
            }
        }

        fn erroring() -> Self {
            Self {
                outcome: Err(()),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CredentialVerifier for ScriptedVerifier {
        fn hash(&self, _password: &str) -> AppResult<String> {
            Ok("$argon2id$stub".to_string())
        }

        fn verify(&self, _password: &str, _hash: &str) -> AppResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome
                .map_err(|_| AppError::internal("hash backend unavailable"))
        }
    }

    fn rol_empleado() -> Role {
        Role {
            id: 2,
            nombre: "empleado".into(),
            descripcion: None,
            permisos: None,
            activo: true,
        }
    }

    fn jdoe(intentos: Option<i32>, bloqueado_hasta: Option<DateTime<Utc>>, activo: bool) -> Account {
        let now = Utc::now();
        Account {
            id: 7,
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            password_hash: "$argon2id$stub".into(),
            nombre_completo: Some("Jane Doe".into()),
            telefono: None,
            avatar_url: None,
            activo,
            verificado: true,
            intentos_fallidos: intentos,
            bloqueado_hasta,
            ultimo_acceso: None,
            rol_id: 2,
            cliente_id: None,
            empleado_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn authenticator(
        directory: Arc<MemoryDirectory>,
        verifier: Arc<ScriptedVerifier>,
    ) -> Authenticator {
        Authenticator::new(directory, verifier, AuthConfig::default())
    }

    #[tokio::test]
    async fn test_wrong_password_increments_without_lock_below_threshold() {
        for n in 0..4 {
            let dir = Arc::new(MemoryDirectory::with_account(jdoe(Some(n), None, true)));
            let auth = authenticator(dir.clone(), Arc::new(ScriptedVerifier::mismatching()));

            let err = auth
                .authenticate(LoginIdentifier::Username("jdoe"), "wrong")
                .await
                .unwrap_err();

            assert_eq!(err.kind, ErrorKind::Unauthorized);
            assert_eq!(err.message, MSG_CREDENCIALES_INVALIDAS);
            let stored = dir.stored();
            assert_eq!(stored.intentos_fallidos, Some(n + 1));
            assert!(stored.bloqueado_hasta.is_none(), "locked too early at n={n}");
        }
    }

    #[tokio::test]
    async fn test_fifth_failure_locks_for_fifteen_minutes() {
        let dir = Arc::new(MemoryDirectory::with_account(jdoe(Some(4), None, true)));
        let auth = authenticator(dir.clone(), Arc::new(ScriptedVerifier::mismatching()));

        let before = Utc::now();
        let err = auth
            .authenticate(LoginIdentifier::Username("jdoe"), "wrong")
            .await
            .unwrap_err();
        let after = Utc::now();

        // The locking attempt itself still reports invalid credentials;
        // the 403 starts with the next attempt.
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let stored = dir.stored();
        assert_eq!(stored.intentos_fallidos, Some(5));
        let until = stored.bloqueado_hasta.expect("lockout not set");
        assert!(until >= before + Duration::minutes(15));
        assert!(until <= after + Duration::minutes(15));

        // Thereafter: forbidden until the deadline passes.
        let err = auth
            .authenticate(LoginIdentifier::Username("jdoe"), "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, MSG_CUENTA_BLOQUEADA);
    }

    #[tokio::test]
    async fn test_locked_account_rejected_without_verification() {
        let until = Utc::now() + Duration::minutes(10);
        let dir = Arc::new(MemoryDirectory::with_account(jdoe(Some(5), Some(until), true)));
        let verifier = Arc::new(ScriptedVerifier::matching());
        let auth = authenticator(dir.clone(), verifier.clone());

        let err = auth
            .authenticate(LoginIdentifier::Username("jdoe"), "correct")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, MSG_CUENTA_BLOQUEADA);
        assert_eq!(verifier.call_count(), 0, "password must not be checked");
        // State unchanged while locked.
        assert_eq!(dir.stored().intentos_fallidos, Some(5));
    }

    #[tokio::test]
    async fn test_expired_lock_allows_login_and_resets() {
        let until = Utc::now() - Duration::seconds(1);
        let dir = Arc::new(MemoryDirectory::with_account(jdoe(Some(5), Some(until), true)));
        let auth = authenticator(dir.clone(), Arc::new(ScriptedVerifier::matching()));

        let result = auth
            .authenticate(LoginIdentifier::Username("jdoe"), "correct")
            .await
            .unwrap();

        assert_eq!(result.account.intentos_fallidos, Some(0));
        assert!(result.account.bloqueado_hasta.is_none());
        assert!(result.account.ultimo_acceso.is_some());
        assert_eq!(result.rol.nombre, "empleado");

        let stored = dir.stored();
        assert_eq!(stored.intentos_fallidos, Some(0));
        assert!(stored.bloqueado_hasta.is_none());
        assert!(stored.ultimo_acceso.is_some());
    }

    #[tokio::test]
    async fn test_disabled_account_rejected_without_verification() {
        let dir = Arc::new(MemoryDirectory::with_account(jdoe(Some(0), None, false)));
        let verifier = Arc::new(ScriptedVerifier::matching());
        let auth = authenticator(dir, verifier.clone());

        let err = auth
            .authenticate(LoginIdentifier::Username("jdoe"), "correct")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, MSG_CUENTA_DESACTIVADA);
        assert_eq!(verifier.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_identifier_and_lookup_error_are_indistinguishable() {
        let empty = authenticator(
            Arc::new(MemoryDirectory::empty()),
            Arc::new(ScriptedVerifier::matching()),
        );
        let failing = authenticator(
            Arc::new(MemoryDirectory::failing()),
            Arc::new(ScriptedVerifier::matching()),
        );

        let err_missing = empty
            .authenticate(LoginIdentifier::Username("nobody"), "pw")
            .await
            .unwrap_err();
        let err_broken = failing
            .authenticate(LoginIdentifier::Username("nobody"), "pw")
            .await
            .unwrap_err();

        assert_eq!(err_missing.kind, ErrorKind::Unauthorized);
        assert_eq!(err_broken.kind, ErrorKind::Unauthorized);
        assert_eq!(err_missing.message, err_broken.message);
    }

    #[tokio::test]
    async fn test_email_lookup_path() {
        let dir = Arc::new(MemoryDirectory::with_account(jdoe(None, None, true)));
        let auth = authenticator(dir, Arc::new(ScriptedVerifier::matching()));

        let result = auth
            .authenticate(LoginIdentifier::Email("jdoe@example.com"), "correct")
            .await
            .unwrap();

        assert_eq!(result.account.username, "jdoe");
    }

    #[tokio::test]
    async fn test_verifier_failure_is_internal_not_credential() {
        let dir = Arc::new(MemoryDirectory::with_account(jdoe(Some(2), None, true)));
        let auth = authenticator(dir.clone(), Arc::new(ScriptedVerifier::erroring()));

        let err = auth
            .authenticate(LoginIdentifier::Username("jdoe"), "correct")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message, MSG_ERROR_VERIFICACION);
        // Verifier failures do not count against the account.
        assert_eq!(dir.stored().intentos_fallidos, Some(2));
    }

    #[tokio::test]
    async fn test_null_counter_treated_as_zero() {
        let dir = Arc::new(MemoryDirectory::with_account(jdoe(None, None, true)));
        let auth = authenticator(dir.clone(), Arc::new(ScriptedVerifier::mismatching()));

        auth.authenticate(LoginIdentifier::Username("jdoe"), "wrong")
            .await
            .unwrap_err();

        assert_eq!(dir.stored().intentos_fallidos, Some(1));
        assert!(dir.stored().bloqueado_hasta.is_none());
    }

    #[tokio::test]
    async fn test_scenario_three_then_four_then_locked() {
        let dir = Arc::new(MemoryDirectory::with_account(jdoe(Some(3), None, true)));
        let auth = authenticator(dir.clone(), Arc::new(ScriptedVerifier::mismatching()));

        let err = auth
            .authenticate(LoginIdentifier::Username("jdoe"), "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(dir.stored().intentos_fallidos, Some(4));
        assert!(dir.stored().bloqueado_hasta.is_none());

        auth.authenticate(LoginIdentifier::Username("jdoe"), "wrong")
            .await
            .unwrap_err();
        let stored = dir.stored();
        assert_eq!(stored.intentos_fallidos, Some(5));
        let until = stored.bloqueado_hasta.expect("lockout not set");
        let delta = until - Utc::now();
        assert!(delta > Duration::minutes(14) && delta <= Duration::minutes(15));
    }
}
