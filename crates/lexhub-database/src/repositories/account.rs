//! Account repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lexhub_auth::directory::AccountDirectory;
use lexhub_core::error::{AppError, ErrorKind};
use lexhub_core::result::AppResult;
use lexhub_entity::account::model::{CreateAccount, UpdateAccount};
use lexhub_entity::account::{Account, Role};

/// Repository for account CRUD and the authentication directory.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by id", e)
            })
    }

    /// List all accounts, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM usuarios ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list accounts", e))
    }

    /// Create a new account.
    pub async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO usuarios (username, email, password_hash, nombre_completo, telefono, \
                                   avatar_url, activo, verificado, rol_id, cliente_id, empleado_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.nombre_completo)
        .bind(&data.telefono)
        .bind(&data.avatar_url)
        .bind(data.activo)
        .bind(data.verificado)
        .bind(data.rol_id)
        .bind(data.cliente_id)
        .bind(data.empleado_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("usuarios_username_key") =>
            {
                AppError::conflict("El nombre de usuario ya está en uso")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("usuarios_email_key") =>
            {
                AppError::conflict("El correo electrónico ya está en uso")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }

    /// Update an account's fields. Only supplied values change.
    pub async fn update(&self, id: i64, data: &UpdateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE usuarios SET username = COALESCE($2, username), \
                                 email = COALESCE($3, email), \
                                 password_hash = COALESCE($4, password_hash), \
                                 nombre_completo = COALESCE($5, nombre_completo), \
                                 telefono = COALESCE($6, telefono), \
                                 avatar_url = COALESCE($7, avatar_url), \
                                 rol_id = COALESCE($8, rol_id), \
                                 activo = COALESCE($9, activo), \
                                 verificado = COALESCE($10, verificado), \
                                 cliente_id = COALESCE($11, cliente_id), \
                                 empleado_id = COALESCE($12, empleado_id), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.nombre_completo)
        .bind(&data.telefono)
        .bind(&data.avatar_url)
        .bind(data.rol_id)
        .bind(data.activo)
        .bind(data.verificado)
        .bind(data.cliente_id)
        .bind(data.empleado_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update account", e))?
        .ok_or_else(|| AppError::not_found("Usuario no encontrado"))
    }

    /// Delete an account by id.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete account", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait::async_trait]
impl AccountDirectory for AccountRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM usuarios WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by username", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM usuarios WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    async fn role_by_id(&self, id: i32) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find role", e))
    }

    async fn record_failed_attempt(
        &self,
        account_id: i64,
        attempts: i32,
        locked_until: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        // Counter and lockout deadline land in one UPDATE. The value was
        // computed from the previously-read row; concurrent failures may
        // lose an increment (accepted, best-effort deterrent).
        sqlx::query(
            "UPDATE usuarios SET intentos_fallidos = $2, \
                                 bloqueado_hasta = COALESCE($3, bloqueado_hasta), \
                                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(account_id)
        .bind(attempts)
        .bind(locked_until)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record failed attempt", e)
        })?;
        Ok(())
    }

    async fn record_successful_login(&self, account_id: i64, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            "UPDATE usuarios SET intentos_fallidos = 0, \
                                 bloqueado_hasta = NULL, \
                                 ultimo_acceso = $2, \
                                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(account_id)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record successful login", e)
        })?;
        Ok(())
    }
}
