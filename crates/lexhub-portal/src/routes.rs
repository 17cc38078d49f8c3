//! Role-based route reconciliation.
//!
//! Routes are classified by an explicit pattern table rather than
//! scattered prefix checks, so the redirect decision is a pure function
//! that can be tested without any rendering framework.

use lexhub_entity::account::RoleName;

/// The public login entry point.
pub const LOGIN_PATH: &str = "/login";
/// The client-portal root.
pub const PORTAL_ROOT: &str = "/portal";
/// The staff dashboard root.
pub const SYSTEM_ROOT: &str = "/";

/// Route classes, each tied to an allowed set of roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without a session (login and similar).
    Public,
    /// Reserved for the "cliente" role.
    ClientPortal,
    /// Staff application areas; also the fallback for unlisted paths.
    System,
}

/// The route-pattern → class table.
///
/// A pattern matches its exact path and everything below it
/// (`"/casos"` matches `"/casos"` and `"/casos/42"` but not
/// `"/casosx"`). Longer patterns win over shorter ones, so overlapping
/// prefixes are unambiguous. Unlisted paths classify as [`RouteClass::System`].
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<(String, RouteClass)>,
}

impl RouteTable {
    /// The application's route table.
    pub fn with_defaults() -> Self {
        let mut rules = Vec::new();
        for path in ["/login", "/register", "/forgot-password"] {
            rules.push((path.to_string(), RouteClass::Public));
        }
        rules.push((PORTAL_ROOT.to_string(), RouteClass::ClientPortal));
        for path in [
            "/",
            "/casos",
            "/clientes",
            "/equipo",
            "/documentos",
            "/calendario",
            "/settings",
        ] {
            rules.push((path.to_string(), RouteClass::System));
        }
        Self { rules }
    }

    /// Classify a requested path.
    pub fn classify(&self, path: &str) -> RouteClass {
        self.rules
            .iter()
            .filter(|(pattern, _)| pattern_matches(pattern, path))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, class)| *class)
            .unwrap_or(RouteClass::System)
    }

    /// Decide whether a navigation must be redirected.
    ///
    /// `role` is the current session's role name, or `None` when
    /// unauthenticated. Returns the redirect target, or `None` to render
    /// the requested path. Idempotent: reconciling a redirect target
    /// yields no further redirect.
    pub fn reconcile(&self, role: Option<&str>, path: &str) -> Option<&'static str> {
        let class = self.classify(path);

        let Some(role) = role else {
            // No session: everything but public paths goes to login.
            return (class != RouteClass::Public).then_some(LOGIN_PATH);
        };

        match role.parse::<RoleName>() {
            Ok(RoleName::Cliente) => {
                (class == RouteClass::System).then_some(PORTAL_ROOT)
            }
            Ok(role) if role.is_staff() => {
                if class == RouteClass::ClientPortal {
                    return Some(SYSTEM_ROOT);
                }
                // Already authenticated, no reason to see the login form.
                (path == LOGIN_PATH).then_some(SYSTEM_ROOT)
            }
            // Unknown role names never match a class; render as-is.
            _ => None,
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Exact-or-below prefix match. `"/"` matches everything.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    if pattern == "/" {
        return true;
    }
    path == pattern || path.strip_prefix(pattern).is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let table = RouteTable::with_defaults();
        assert_eq!(table.classify("/login"), RouteClass::Public);
        assert_eq!(table.classify("/portal"), RouteClass::ClientPortal);
        assert_eq!(table.classify("/portal/42"), RouteClass::ClientPortal);
        assert_eq!(table.classify("/"), RouteClass::System);
        assert_eq!(table.classify("/casos/7"), RouteClass::System);
        // Unlisted paths fall back to the system class.
        assert_eq!(table.classify("/reportes"), RouteClass::System);
        // A prefix must end at a segment boundary.
        assert_eq!(table.classify("/portalx"), RouteClass::System);
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let table = RouteTable::with_defaults();
        assert_eq!(table.reconcile(None, "/"), Some(LOGIN_PATH));
        assert_eq!(table.reconcile(None, "/casos"), Some(LOGIN_PATH));
        assert_eq!(table.reconcile(None, "/portal"), Some(LOGIN_PATH));
        assert_eq!(table.reconcile(None, "/login"), None);
        assert_eq!(table.reconcile(None, "/forgot-password"), None);
    }

    #[test]
    fn test_cliente_confined_to_portal() {
        let table = RouteTable::with_defaults();
        assert_eq!(table.reconcile(Some("cliente"), "/"), Some(PORTAL_ROOT));
        assert_eq!(table.reconcile(Some("cliente"), "/casos"), Some(PORTAL_ROOT));
        assert_eq!(table.reconcile(Some("cliente"), "/portal"), None);
        assert_eq!(table.reconcile(Some("cliente"), "/portal/estado"), None);
        assert_eq!(table.reconcile(Some("cliente"), "/login"), None);
    }

    #[test]
    fn test_staff_kept_out_of_portal_and_login() {
        let table = RouteTable::with_defaults();
        for role in ["administrador", "empleado"] {
            assert_eq!(table.reconcile(Some(role), "/portal"), Some(SYSTEM_ROOT));
            assert_eq!(table.reconcile(Some(role), "/portal/42"), Some(SYSTEM_ROOT));
            assert_eq!(table.reconcile(Some(role), "/login"), Some(SYSTEM_ROOT));
            assert_eq!(table.reconcile(Some(role), "/"), None);
            assert_eq!(table.reconcile(Some(role), "/casos/7"), None);
            // Other public paths stay reachable.
            assert_eq!(table.reconcile(Some(role), "/forgot-password"), None);
        }
    }

    #[test]
    fn test_reconciliation_is_idempotent() {
        let table = RouteTable::with_defaults();
        let redirect = table.reconcile(Some("cliente"), "/").unwrap();
        assert_eq!(table.reconcile(Some("cliente"), redirect), None);

        let redirect = table.reconcile(None, "/casos").unwrap();
        assert_eq!(table.reconcile(None, redirect), None);
    }

    #[test]
    fn test_unknown_role_renders_as_is() {
        let table = RouteTable::with_defaults();
        assert_eq!(table.reconcile(Some("auditor"), "/portal"), None);
        assert_eq!(table.reconcile(Some("auditor"), "/"), None);
    }
}
