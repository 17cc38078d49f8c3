//! Account (login identity) domain entities.

pub mod model;
pub mod role;

pub use model::{Account, AccountWithRole, CreateAccount, UpdateAccount};
pub use role::{Role, RoleName};
