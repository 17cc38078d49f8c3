//! Login flow: credential resolution, lockout policy, attempt bookkeeping.

pub mod authenticator;

pub use authenticator::{Authenticator, LoginIdentifier};
