//! Repository implementations for all LexHub entities.

pub mod account;
pub mod caso;
pub mod cliente;
pub mod documento;
pub mod empleado;
pub mod role;

pub use account::AccountRepository;
pub use caso::CasoRepository;
pub use cliente::ClienteRepository;
pub use documento::DocumentoRepository;
pub use empleado::EmpleadoRepository;
pub use role::RoleRepository;
