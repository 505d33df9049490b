//! Login, guarded navigation and logout against in-memory storage.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared::models::access::LOGIN_PATH;
use shared::models::session::{AUTH_COOKIE, USER_KEY};
use shared::{
    authorize, post_login_target, reconcile, AccessDecision, LoginUserResponse, MemoryStorage,
    Role, RouteAccess, SessionStorage, SessionStore, VerifyOutcome,
};

fn route_access(path: &str) -> RouteAccess {
    match path {
        "/login" | "/signUp" | "/auth" => RouteAccess::PublicOnly,
        p if p.starts_with("/panel") => RouteAccess::Role(Role::Admin),
        _ => RouteAccess::Public,
    }
}

fn login_response(role: &str) -> LoginUserResponse {
    serde_json::from_str(&format!(
        r#"{{"data":{{"accessToken":"opaque-abc","user":{{"_id":"u1","email":"boss@arena.pk","name":"Boss","role":"{}"}}}}}}"#,
        role
    ))
    .unwrap()
}

#[test]
fn admin_logs_in_returns_to_origin_then_logs_out() {
    let _ = env_logger::builder().is_test(true).try_init();
    let now = Utc.with_ymd_and_hms(2025, 5, 10, 9, 30, 0).unwrap();
    let store = SessionStore::new(MemoryStorage::new());

    let origin = "/panel/organizors";
    let decision = authorize(store.load(now).as_ref(), &route_access(origin), origin);
    assert_eq!(
        decision,
        AccessDecision::Redirect { to: LOGIN_PATH.to_string(), from: Some(origin.to_string()) }
    );

    let session = login_response("admin").into_session("2025-05-10T09:30:00.000Z").unwrap();
    store.persist(&session, now).unwrap();
    let target = post_login_target(&session, Some(origin), route_access);
    assert_eq!(target, origin);

    let loaded = reconcile(store.load(now), &VerifyOutcome::Unreachable);
    assert_eq!(authorize(loaded.as_ref(), &route_access(origin), origin), AccessDecision::Allow);
    assert_eq!(
        authorize(loaded.as_ref(), &RouteAccess::PublicOnly, "/login"),
        AccessDecision::Redirect { to: "/panel".to_string(), from: None }
    );

    store.clear();
    assert_eq!(store.storage().read_cookie(AUTH_COOKIE), None);
    assert_eq!(store.storage().get_item(USER_KEY), None);
    assert!(matches!(
        authorize(store.load(now).as_ref(), &route_access("/panel"), "/panel"),
        AccessDecision::Redirect { .. }
    ));
}

#[test]
fn regular_user_is_denied_the_panel_and_rejected_tokens_log_out() {
    let now = Utc.with_ymd_and_hms(2025, 5, 10, 9, 30, 0).unwrap();
    let store = SessionStore::new(MemoryStorage::new());
    let session = login_response("user").into_session("now").unwrap();
    store.persist(&session, now).unwrap();

    assert_eq!(post_login_target(&session, Some("/panel"), route_access), "/");
    assert_eq!(
        authorize(store.load(now).as_ref(), &route_access("/panel"), "/panel"),
        AccessDecision::Deny { required: Role::Admin }
    );

    let revoked = reconcile(store.load(now), &VerifyOutcome::Rejected);
    assert_eq!(revoked, None);
}
