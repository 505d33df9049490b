use rstest::rstest;
use shared::{AccessDecision, Organizer, OrganizerStatus, Role, RouteAccess, Session, SessionUser, SharedError, VerifyOutcome, UserUpdate};

use crate::{access_for_path, Route};

fn session(role: Role) -> Session {
    Session {
        token: "tok-1".into(),
        user: SessionUser {
            id: "u1".into(),
            email: "fan@arena.test".into(),
            name: "Fan".into(),
            role,
            created_at: None,
        },
    }
}

fn organizer(id: &str, name: &str, status: OrganizerStatus) -> Organizer {
    Organizer {
        id: id.into(),
        name: name.into(),
        email: format!("{}@clubs.pk", id),
        contact: "+92 300 1234567".into(),
        status,
        events: 4,
        ..Organizer::default()
    }
}

mod routing {
    use super::*;
    use pretty_assertions::assert_eq;
    use yew_router::Routable;

    #[rstest]
    #[case("/", RouteAccess::Public)]
    #[case("/tournaments/soccer", RouteAccess::Public)]
    #[case("/login", RouteAccess::PublicOnly)]
    #[case("/signUp", RouteAccess::PublicOnly)]
    #[case("/auth", RouteAccess::PublicOnly)]
    #[case("/panel", RouteAccess::Role(Role::Admin))]
    #[case("/panel/organizors/add-organizor", RouteAccess::Role(Role::Admin))]
    #[case("/no/such/page", RouteAccess::Public)]
    fn paths_resolve_to_access_rules(#[case] path: &str, #[case] expected: RouteAccess) {
        assert_eq!(access_for_path(path), expected);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(access_for_path("/panel?tab=1"), RouteAccess::Role(Role::Admin));
        assert_eq!(access_for_path("/login#top"), RouteAccess::PublicOnly);
    }

    #[test]
    fn category_route_carries_its_slug() {
        assert_eq!(
            Route::recognize("/tournaments/table-tennis"),
            Some(Route::TournamentCategory { category: "table-tennis".into() })
        );
        assert_eq!(Route::Contact.access(), RouteAccess::Public);
    }
}

mod guard {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::guard::redirect_target;

    #[test]
    fn anonymous_visitor_is_sent_to_login_with_origin() {
        let access = RouteAccess::Role(Role::Admin);
        let decision = shared::authorize(None, &access, "/panel/organizors");
        assert_eq!(
            redirect_target(&decision, &access, None, None),
            Some(("/login".to_string(), Some("/panel/organizors".to_string())))
        );
    }

    #[test]
    fn login_screen_returns_admin_to_requested_page() {
        let admin = session(Role::Admin);
        let decision = shared::authorize(Some(&admin), &RouteAccess::PublicOnly, "/login");
        assert_eq!(
            redirect_target(&decision, &RouteAccess::PublicOnly, Some(&admin), Some("/panel/organizors")),
            Some(("/panel/organizors".to_string(), None))
        );
    }

    #[test]
    fn return_path_the_user_cannot_open_falls_back_to_landing() {
        let user = session(Role::User);
        let decision = shared::authorize(Some(&user), &RouteAccess::PublicOnly, "/login");
        assert_eq!(
            redirect_target(&decision, &RouteAccess::PublicOnly, Some(&user), Some("/panel")),
            Some(("/".to_string(), None))
        );
        assert_eq!(
            redirect_target(&decision, &RouteAccess::PublicOnly, Some(&user), Some("//evil.example")),
            Some(("/".to_string(), None))
        );
    }

    #[test]
    fn allowed_and_denied_decisions_do_not_navigate() {
        assert_eq!(redirect_target(&AccessDecision::Allow, &RouteAccess::Public, None, None), None);
        let denied = AccessDecision::Deny { required: Role::Admin };
        let user = session(Role::User);
        assert_eq!(
            redirect_target(&denied, &RouteAccess::Role(Role::Admin), Some(&user), None),
            None
        );
    }
}

mod auth_state {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::auth::{AuthAction, AuthState, Verification, SESSION_EXPIRED_MESSAGE};

    #[test]
    fn login_flow_sets_and_clears_loading() {
        let started = AuthState::default().next(&AuthAction::LoginStarted);
        assert!(started.loading);
        let done = started.next(&AuthAction::LoginSuccess(session(Role::Admin)));
        assert!(!done.loading);
        assert!(done.is_admin());
        assert_eq!(done.verification, Verification::Verified);
    }

    #[test]
    fn failed_login_keeps_message_until_cleared() {
        let failed = AuthState::default().next(&AuthAction::LoginError("Invalid email or password.".into()));
        assert_eq!(failed.error.as_deref(), Some("Invalid email or password."));
        assert!(!failed.is_authenticated());
        assert_eq!(failed.next(&AuthAction::ClearError).error, None);
    }

    #[test]
    fn restored_session_waits_for_verification() {
        let state = AuthState::restored(Some(session(Role::User)));
        assert!(state.awaiting_verification());
        let verified = state.next(&AuthAction::VerifyFinished {
            token: "tok-1".into(),
            outcome: VerifyOutcome::Verified(Some(UserUpdate {
                name: Some("Renamed".into()),
                ..UserUpdate::default()
            })),
        });
        assert!(!verified.awaiting_verification());
        assert_eq!(verified.session.map(|s| s.user.name), Some("Renamed".to_string()));
    }

    #[test]
    fn rejected_token_expires_the_session() {
        let state = AuthState::restored(Some(session(Role::Admin)));
        let next = state.next(&AuthAction::VerifyFinished {
            token: "tok-1".into(),
            outcome: VerifyOutcome::Rejected,
        });
        assert!(next.session.is_none());
        assert_eq!(next.error.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    }

    #[test]
    fn unreachable_backend_keeps_the_session_offline() {
        let state = AuthState::restored(Some(session(Role::Admin)));
        let next = state.next(&AuthAction::VerifyFinished {
            token: "tok-1".into(),
            outcome: VerifyOutcome::Unreachable,
        });
        assert!(next.is_admin());
        assert_eq!(next.verification, Verification::Offline);
    }

    #[test]
    fn verification_for_a_replaced_token_is_ignored() {
        let state = AuthState::restored(Some(session(Role::User)));
        let next = state.next(&AuthAction::VerifyFinished {
            token: "older-token".into(),
            outcome: VerifyOutcome::Rejected,
        });
        assert_eq!(next, state);
    }

    #[test]
    fn failed_login_and_logout_wipe_stored_session() {
        assert!(AuthAction::LoginError("Invalid email or password.".into()).clears_session_data());
        assert!(AuthAction::Expired.clears_session_data());
        assert!(AuthAction::Logout.clears_session_data());
        assert!(!AuthAction::LoginStarted.clears_session_data());
        assert!(!AuthAction::TokenRefreshed("tok-2".into()).clears_session_data());
    }

    #[test]
    fn refresh_swaps_only_the_token() {
        let state = AuthState::restored(Some(session(Role::User)));
        let next = state.next(&AuthAction::TokenRefreshed("tok-2".into()));
        let refreshed = next.session.clone().unwrap();
        assert_eq!(refreshed.token, "tok-2");
        assert_eq!(refreshed.user.id, "u1");
        assert_eq!(next.next(&AuthAction::Logout), AuthState::default());
    }
}

mod token_refresh {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::auth::{refresh_step, AuthAction, AuthState, RefreshStep};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn jwt_expiring_at(exp: DateTime<Utc>) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{}}}"#, exp.timestamp()))
        )
    }

    fn login_time() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn ticks_follow_the_refreshed_token() {
        let start = login_time();
        let old = jwt_expiring_at(start + Duration::minutes(50));
        let fresh = jwt_expiring_at(start + Duration::days(7));

        let mut state = AuthState::restored(Some(Session { token: old.clone(), ..session(Role::User) }));
        assert_eq!(refresh_step(state.token().unwrap(), start + Duration::minutes(30)), RefreshStep::Refresh);

        state = state.next(&AuthAction::TokenRefreshed(fresh.clone()));
        assert_eq!(state.token(), Some(fresh.as_str()));

        let next_tick = start + Duration::minutes(60);
        assert_eq!(refresh_step(state.token().unwrap(), next_tick), RefreshStep::Wait);
        assert_eq!(refresh_step(&old, next_tick), RefreshStep::Expire);
    }

    #[test]
    fn opaque_tokens_never_refresh() {
        assert_eq!(refresh_step("opaque-session-id", login_time()), RefreshStep::Wait);
        assert_eq!(AuthState::default().token(), None);
    }
}

mod listing {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::api::tournaments::listing_state;
    use shared::dto::tournament::LISTING_UNAVAILABLE;
    use shared::LoadState;

    #[test]
    fn rejected_listing_reads_as_unavailable_even_with_a_message() {
        let rejected = SharedError::Server {
            status: 500,
            message: r#"{"success":false,"message":"Database offline"}"#.into(),
        };
        assert_eq!(
            listing_state(Err(rejected), Some("soccer")),
            LoadState::Failed(LISTING_UNAVAILABLE.to_string())
        );
        assert_eq!(
            listing_state(Err(SharedError::Network("refused".into())), None),
            LoadState::Failed(LISTING_UNAVAILABLE.to_string())
        );
    }

    #[test]
    fn successful_listing_is_loaded() {
        let body = r#"{"success":true,"data":{"tournaments":[{"_id":"t1","title":"Spring Cup"}]}}"#;
        let state = listing_state(Ok(body.to_string()), None);
        assert_eq!(state.data().map(|list| list.len()), Some(1));
        assert!(matches!(listing_state(Ok("<html>".into()), None), LoadState::Failed(_)));
    }
}

mod analytics {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::analytics::{init_precheck, should_track, InitOutcome};

    #[rstest]
    #[case(true, Some("accepted"), Some("G-1"), Some(InitOutcome::AlreadyStarted))]
    #[case(false, None, Some("G-1"), Some(InitOutcome::NoConsent))]
    #[case(false, Some("rejected"), Some("G-1"), Some(InitOutcome::NoConsent))]
    #[case(false, Some("accepted"), None, Some(InitOutcome::NotConfigured))]
    #[case(false, Some("accepted"), Some("G-1"), None)]
    fn init_requires_consent_and_an_id(
        #[case] already: bool,
        #[case] consent: Option<&str>,
        #[case] id: Option<&str>,
        #[case] expected: Option<InitOutcome>,
    ) {
        assert_eq!(init_precheck(already, consent, id), expected);
    }

    #[test]
    fn withdrawn_consent_stops_tracking() {
        assert!(should_track(true, Some("accepted")));
        assert!(!should_track(true, Some("rejected")));
        assert!(!should_track(false, Some("accepted")));
    }
}

mod pages {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::components::data_table::filter_rows;
    use crate::pages::admin::organizer_form::add_failure_message;
    use crate::pages::admin::organizers::{with_status, without};
    use crate::pages::admin::panel::active_section;
    use crate::pages::home::{next_slide, prev_slide};
    use crate::pages::signup::registration_failure;
    use crate::PanelRoute;

    #[test]
    fn carousel_wraps_both_ways() {
        assert_eq!(next_slide(2, 3), 0);
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(prev_slide(0, 3), 2);
        assert_eq!(next_slide(5, 0), 0);
        assert_eq!(prev_slide(0, 0), 0);
    }

    #[test]
    fn table_search_matches_any_column() {
        let rows = vec![
            organizer("a1", "Lahore Lions", OrganizerStatus::Active),
            organizer("b2", "Karachi Kings", OrganizerStatus::Inactive),
        ];
        let names: Vec<&str> = filter_rows(&rows, "KINGS").iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Karachi Kings"]);
        assert_eq!(filter_rows(&rows, "inactive").len(), 1);
        assert_eq!(filter_rows(&rows, "  ").len(), 2);
    }

    #[test]
    fn roster_updates_touch_only_the_target() {
        let rows = vec![
            organizer("a1", "Lahore Lions", OrganizerStatus::Active),
            organizer("b2", "Karachi Kings", OrganizerStatus::Active),
        ];
        let toggled = with_status(&rows, "b2", OrganizerStatus::Inactive);
        assert_eq!(toggled[0].status, OrganizerStatus::Active);
        assert_eq!(toggled[1].status, OrganizerStatus::Inactive);
        let remaining = without(&rows, "a1");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "b2");
    }

    #[test]
    fn add_organizer_failures_read_by_kind() {
        assert_eq!(
            add_failure_message(&SharedError::Network("refused".into())),
            "Unable to connect to server. Please check your connection."
        );
        assert_eq!(
            add_failure_message(&SharedError::from_status(409, "Email already exists")),
            "Email already exists"
        );
        assert_eq!(add_failure_message(&SharedError::from_status(500, "")), "Failed to add organizor");
        assert_eq!(
            add_failure_message(&SharedError::Conversion("bad json".into())),
            "An unexpected error occurred. Please try again."
        );
    }

    #[test]
    fn signup_failure_prefers_the_validation_message() {
        assert_eq!(
            registration_failure(&SharedError::Validation("Email already registered".into())),
            "Email already registered"
        );
        assert_eq!(
            registration_failure(&SharedError::Network("offline".into())),
            "Registration failed. Please try again."
        );
    }

    #[test]
    fn add_organizer_highlights_the_organizers_entry() {
        assert_eq!(active_section(&PanelRoute::AddOrganizer), Some(PanelRoute::Organizers));
        assert_eq!(active_section(&PanelRoute::Dashboard), Some(PanelRoute::Dashboard));
        assert_eq!(active_section(&PanelRoute::NotFound), None);
    }
}
