//! Route authorization policy.
//!
//! Every route declares a [`RouteAccess`]; [`authorize`] turns the current
//! session and that requirement into a single [`AccessDecision`]. The
//! frontend guard renders, redirects or shows the access-denied screen from
//! the decision alone.

use crate::models::session::{Role, Session, UserUpdate};

pub const LOGIN_PATH: &str = "/login";

/// What a route requires of the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone, logged in or not.
    Public,
    /// Only visitors without a session (login and sign-up screens).
    PublicOnly,
    /// Any logged-in visitor.
    Authenticated,
    /// A logged-in visitor whose role satisfies this one.
    Role(Role),
}

impl RouteAccess {
    pub fn requires_session(&self) -> bool {
        matches!(self, RouteAccess::Authenticated | RouteAccess::Role(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// Navigate elsewhere; `from` is the origin to come back to after login.
    Redirect { to: String, from: Option<String> },
    /// Logged in but lacking the role.
    Deny { required: Role },
}

pub fn authorize(session: Option<&Session>, access: &RouteAccess, current_path: &str) -> AccessDecision {
    match (access, session) {
        (RouteAccess::Public, _) => AccessDecision::Allow,
        (RouteAccess::PublicOnly, None) => AccessDecision::Allow,
        (RouteAccess::PublicOnly, Some(session)) => AccessDecision::Redirect {
            to: session.landing_path().to_string(),
            from: None,
        },
        (RouteAccess::Authenticated | RouteAccess::Role(_), None) => AccessDecision::Redirect {
            to: LOGIN_PATH.to_string(),
            from: is_safe_return_path(current_path).then(|| current_path.to_string()),
        },
        (RouteAccess::Authenticated, Some(_)) => AccessDecision::Allow,
        (RouteAccess::Role(required), Some(session)) => {
            if session.role().satisfies(required) {
                AccessDecision::Allow
            } else {
                AccessDecision::Deny { required: required.clone() }
            }
        }
    }
}

/// Rejects anything that could leave the site: protocol-relative URLs,
/// schemes and backslash tricks.
pub fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains("://")
        && !path.contains('\\')
}

/// Where to go right after a successful login.
///
/// `access_of` resolves a path to the access rule of the route it matches.
pub fn post_login_target<F>(session: &Session, from: Option<&str>, access_of: F) -> String
where
    F: Fn(&str) -> RouteAccess,
{
    from.filter(|path| is_safe_return_path(path))
        .filter(|path| {
            let access = access_of(path);
            access != RouteAccess::PublicOnly
                && authorize(Some(session), &access, path) == AccessDecision::Allow
        })
        .map(str::to_string)
        .unwrap_or_else(|| session.landing_path().to_string())
}

/// Result of asking the backend whether the stored token is still good.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyOutcome {
    Verified(Option<UserUpdate>),
    /// 401/403 or an explicit `success: false`.
    Rejected,
    /// Network failure or server error; says nothing about the token.
    Unreachable,
}

/// Applies a verification outcome to the session it was run for.
pub fn reconcile(session: Option<Session>, outcome: &VerifyOutcome) -> Option<Session> {
    match outcome {
        VerifyOutcome::Verified(update) => session.map(|mut session| {
            if let Some(update) = update {
                session.user.merge(update);
            }
            session
        }),
        VerifyOutcome::Rejected => None,
        VerifyOutcome::Unreachable => session,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::SessionUser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn session(role: Role) -> Session {
        Session {
            token: "tok".into(),
            user: SessionUser {
                id: "u1".into(),
                email: "u1@arena.test".into(),
                name: "U One".into(),
                role,
                created_at: None,
            },
        }
    }

    fn route_table(path: &str) -> RouteAccess {
        if path.starts_with("/panel") {
            RouteAccess::Role(Role::Admin)
        } else if path == "/login" || path == "/signUp" {
            RouteAccess::PublicOnly
        } else {
            RouteAccess::Public
        }
    }

    #[test]
    fn guarded_route_without_session_goes_to_login_with_origin() {
        let decision = authorize(None, &RouteAccess::Role(Role::Admin), "/panel/organizors");
        assert_eq!(
            decision,
            AccessDecision::Redirect {
                to: "/login".into(),
                from: Some("/panel/organizors".into())
            }
        );
        assert_eq!(
            authorize(None, &RouteAccess::Authenticated, "/apply"),
            AccessDecision::Redirect { to: "/login".into(), from: Some("/apply".into()) }
        );
    }

    #[test]
    fn unsafe_origin_is_not_preserved() {
        assert_eq!(
            authorize(None, &RouteAccess::Authenticated, "//evil.example"),
            AccessDecision::Redirect { to: "/login".into(), from: None }
        );
    }

    #[rstest]
    #[case(Role::Admin, AccessDecision::Allow)]
    #[case(Role::User, AccessDecision::Deny { required: Role::Admin })]
    #[case(Role::Organizer, AccessDecision::Deny { required: Role::Admin })]
    fn admin_routes_deny_other_roles(#[case] role: Role, #[case] expected: AccessDecision) {
        let s = session(role);
        assert_eq!(authorize(Some(&s), &RouteAccess::Role(Role::Admin), "/panel"), expected);
    }

    #[test]
    fn admin_passes_any_role_requirement() {
        let s = session(Role::Admin);
        assert_eq!(
            authorize(Some(&s), &RouteAccess::Role(Role::Organizer), "/x"),
            AccessDecision::Allow
        );
    }

    #[rstest]
    #[case(Role::Admin, "/panel")]
    #[case(Role::User, "/")]
    #[case(Role::Company, "/")]
    fn public_only_sends_logged_in_visitors_home(#[case] role: Role, #[case] landing: &str) {
        let s = session(role);
        assert_eq!(
            authorize(Some(&s), &RouteAccess::PublicOnly, "/login"),
            AccessDecision::Redirect { to: landing.into(), from: None }
        );
        assert_eq!(authorize(None, &RouteAccess::PublicOnly, "/login"), AccessDecision::Allow);
    }

    #[test]
    fn public_routes_always_render() {
        assert_eq!(authorize(None, &RouteAccess::Public, "/"), AccessDecision::Allow);
        let s = session(Role::User);
        assert_eq!(authorize(Some(&s), &RouteAccess::Public, "/"), AccessDecision::Allow);
    }

    #[test]
    fn post_login_returns_to_allowed_origin() {
        let admin = session(Role::Admin);
        assert_eq!(
            post_login_target(&admin, Some("/panel/organizors"), route_table),
            "/panel/organizors"
        );
        assert_eq!(post_login_target(&admin, None, route_table), "/panel");
    }

    #[test]
    fn post_login_ignores_forbidden_or_unsafe_origin() {
        let user = session(Role::User);
        assert_eq!(post_login_target(&user, Some("/panel"), route_table), "/");
        assert_eq!(post_login_target(&user, Some("/login"), route_table), "/");
        assert_eq!(post_login_target(&user, Some("https://evil.example"), route_table), "/");
        assert_eq!(post_login_target(&user, Some("/tournaments/soccer"), route_table), "/tournaments/soccer");
    }

    #[test]
    fn rejection_drops_session_and_outage_keeps_it() {
        let s = session(Role::User);
        assert_eq!(reconcile(Some(s.clone()), &VerifyOutcome::Rejected), None);
        assert_eq!(reconcile(Some(s.clone()), &VerifyOutcome::Unreachable), Some(s.clone()));
        assert_eq!(reconcile(None, &VerifyOutcome::Verified(None)), None);
    }

    #[test]
    fn verification_merges_returned_profile() {
        let s = session(Role::User);
        let update = UserUpdate { role: Some("admin".into()), ..Default::default() };
        let merged = reconcile(Some(s), &VerifyOutcome::Verified(Some(update))).unwrap();
        assert!(merged.is_admin());
        assert_eq!(merged.user.id, "u1");
    }
}
