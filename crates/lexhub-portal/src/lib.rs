//! # lexhub-portal
//!
//! The client-side half of LexHub authentication, shared by the desktop
//! and portal front ends:
//!
//! - [`SessionController`] — owns the current session, restores it from
//!   the persisted store on startup, and applies login/logout.
//! - [`RouteTable`] — an explicit route-pattern → allowed-roles table with
//!   a pure reconciliation step, re-run on every navigation.
//! - [`AuthApi`] — the network boundary to the login endpoint, with a
//!   reqwest implementation.
//! - [`SessionStore`] — the persisted key-value mirror of the session
//!   (file-backed, or in-memory for tests).
//!
//! The controller never panics or propagates store errors: any persistence
//! failure degrades to "no session", erring toward a re-login.

pub mod api;
pub mod controller;
pub mod routes;
pub mod session;
pub mod store;

pub use api::{AuthApi, HttpAuthApi};
pub use controller::SessionController;
pub use routes::{RouteClass, RouteTable};
pub use session::{PortalSession, SessionRol};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
