//! Client creation with portal-account provisioning.

use std::sync::Arc;

use tracing::{info, warn};

use lexhub_auth::directory::AccountDirectory;
use lexhub_auth::password::CredentialVerifier;
use lexhub_core::error::AppError;
use lexhub_core::result::AppResult;
use lexhub_database::repositories::account::AccountRepository;
use lexhub_database::repositories::cliente::ClienteRepository;
use lexhub_database::repositories::role::RoleRepository;
use lexhub_entity::account::model::CreateAccount;
use lexhub_entity::account::{Account, RoleName};
use lexhub_entity::cliente::{Cliente, CreateCliente};

/// Result of creating a client: the row itself plus the outcome of the
/// portal-account provisioning step.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ClienteCreado {
    /// The created client.
    pub cliente: Cliente,
    /// The auto-provisioned portal account, when one was created.
    pub cuenta: Option<Account>,
    /// Why provisioning was skipped or failed, when it was.
    pub cuenta_nota: Option<String>,
}

/// Creates clients and provisions their portal accounts.
///
/// The account step uses the client's email as username and the cédula as
/// the initial password. A provisioning failure does not roll the client
/// row back; the outcome is reported to the caller instead.
#[derive(Debug, Clone)]
pub struct ClienteService {
    /// Client repository.
    cliente_repo: Arc<ClienteRepository>,
    /// Account repository.
    account_repo: Arc<AccountRepository>,
    /// Role repository, for the "cliente" role lookup.
    role_repo: Arc<RoleRepository>,
    /// Password hashing capability.
    hasher: Arc<dyn CredentialVerifier>,
}

impl ClienteService {
    /// Creates a new client service.
    pub fn new(
        cliente_repo: Arc<ClienteRepository>,
        account_repo: Arc<AccountRepository>,
        role_repo: Arc<RoleRepository>,
        hasher: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            cliente_repo,
            account_repo,
            role_repo,
            hasher,
        }
    }

    /// Creates the client row, then provisions the portal account.
    pub async fn create_cliente(&self, data: &CreateCliente) -> AppResult<ClienteCreado> {
        let cliente = self.cliente_repo.create(data).await?;
        info!(cliente_id = cliente.id, "Client created");

        match self.provision_account(&cliente).await {
            Ok(Some(cuenta)) => Ok(ClienteCreado {
                cliente,
                cuenta: Some(cuenta),
                cuenta_nota: None,
            }),
            Ok(None) => Ok(ClienteCreado {
                cliente,
                cuenta: None,
                cuenta_nota: Some(
                    "Ya existe un usuario con este correo electrónico".to_string(),
                ),
            }),
            Err(e) => {
                // The client row stays; the portal account can be created
                // manually later.
                warn!(cliente_id = cliente.id, error = %e, "Portal account provisioning failed");
                Ok(ClienteCreado {
                    cliente,
                    cuenta: None,
                    cuenta_nota: Some("No se pudo crear el usuario del portal".to_string()),
                })
            }
        }
    }

    /// Provisions the portal account for a new client, unless the email is
    /// already taken. Username is the email, initial password the cédula.
    async fn provision_account(&self, cliente: &Cliente) -> AppResult<Option<Account>> {
        let existing = self.account_repo.find_by_email(&cliente.email).await?;
        if existing.is_some() {
            return Ok(None);
        }

        let rol = self
            .role_repo
            .find_by_nombre(RoleName::Cliente.as_str())
            .await?
            .ok_or_else(|| AppError::configuration("Role 'cliente' is not seeded"))?;

        let password_hash = self.hasher.hash(&cliente.cedula)?;

        let cuenta = self
            .account_repo
            .create(&CreateAccount {
                username: cliente.email.clone(),
                email: cliente.email.clone(),
                password_hash,
                nombre_completo: Some(cliente.nombre.clone()),
                telefono: cliente.telefono.clone(),
                avatar_url: None,
                activo: true,
                verificado: false,
                rol_id: rol.id,
                cliente_id: Some(cliente.id),
                empleado_id: None,
            })
            .await?;

        info!(
            cliente_id = cliente.id,
            account_id = cuenta.id,
            "Portal account provisioned"
        );
        Ok(Some(cuenta))
    }
}
