use chrono::{DateTime, SecondsFormat, Utc};
use gloo_timers::callback::Interval;
use log::{debug, error, warn};
use shared::dto::auth::login_failure;
use shared::{reconcile, token, LoginUserRequest, Session, VerifyOutcome};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::analytics;
use crate::api::auth;
use crate::config::Config;
use crate::storage::session_store;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Whether the backend has confirmed the current session's token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Verification {
    #[default]
    Pending,
    Verified,
    /// The backend could not be reached; the local session stands.
    Offline,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub verification: Verification,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn restored(session: Option<Session>) -> Self {
        Self { session, ..Default::default() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().map(Session::is_admin).unwrap_or(false)
    }

    /// Token of the current session; the refresh loop is rebuilt whenever it changes.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// A guarded render must wait for the backend's first answer.
    pub fn awaiting_verification(&self) -> bool {
        self.session.is_some() && self.verification == Verification::Pending
    }

    /// State transition without any storage side effects.
    pub fn next(&self, action: &AuthAction) -> Self {
        match action {
            AuthAction::LoginStarted => Self {
                loading: true,
                error: None,
                ..self.clone()
            },
            AuthAction::LoginSuccess(session) => Self {
                session: Some(session.clone()),
                verification: Verification::Verified,
                loading: false,
                error: None,
            },
            AuthAction::LoginError(message) => Self {
                session: None,
                verification: Verification::Pending,
                loading: false,
                error: Some(message.clone()),
            },
            AuthAction::VerifyFinished { token, outcome } => {
                let current = match &self.session {
                    Some(session) if &session.token == token => Some(session.clone()),
                    // A different session was established meanwhile.
                    _ => return self.clone(),
                };
                match reconcile(current, outcome) {
                    Some(session) => Self {
                        session: Some(session),
                        verification: match outcome {
                            VerifyOutcome::Unreachable => Verification::Offline,
                            _ => Verification::Verified,
                        },
                        ..self.clone()
                    },
                    None => Self {
                        session: None,
                        verification: Verification::Pending,
                        loading: false,
                        error: Some(SESSION_EXPIRED_MESSAGE.to_string()),
                    },
                }
            }
            AuthAction::TokenRefreshed(token) => Self {
                session: self.session.clone().map(|mut session| {
                    session.token = token.clone();
                    session
                }),
                ..self.clone()
            },
            AuthAction::Expired => Self {
                session: None,
                verification: Verification::Pending,
                loading: false,
                error: Some(SESSION_EXPIRED_MESSAGE.to_string()),
            },
            AuthAction::Logout => Self::default(),
            AuthAction::ClearError => Self {
                error: None,
                ..self.clone()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSuccess(Session),
    LoginError(String),
    VerifyFinished { token: String, outcome: VerifyOutcome },
    TokenRefreshed(String),
    /// The token ran out or could not be refreshed.
    Expired,
    Logout,
    ClearError,
}

impl AuthAction {
    /// Actions after which nothing of the session may stay in storage.
    pub fn clears_session_data(&self) -> bool {
        matches!(self, AuthAction::LoginError(_) | AuthAction::Expired | AuthAction::Logout)
    }
}

/// What a refresh tick does with the token it was scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshStep {
    Wait,
    Refresh,
    Expire,
}

pub fn refresh_step(token: &str, now: DateTime<Utc>) -> RefreshStep {
    if token::is_expired(token, now) {
        RefreshStep::Expire
    } else if token::needs_refresh(token, now) {
        RefreshStep::Refresh
    } else {
        RefreshStep::Wait
    }
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(&action);
        let store = session_store();
        match &action {
            AuthAction::VerifyFinished { .. } => match &next.session {
                Some(session) if next.session != self.session => {
                    if let Err(e) = store.update_user(&session.user) {
                        error!("Failed to store verified user: {}", e);
                    }
                }
                Some(_) => {}
                None if self.session.is_some() => store.clear(),
                None => {}
            },
            AuthAction::TokenRefreshed(token) => store.replace_token(token),
            action if action.clears_session_data() => store.clear(),
            _ => {}
        }
        Rc::new(next)
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<LoginUserRequest>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

impl AuthContext {
    pub fn session(&self) -> Option<&Session> {
        self.state.session.as_ref()
    }
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer_eq(|| AuthState::restored(session_store().load(Utc::now())));

    // Backend verification, once per restored session
    {
        let auth = auth.clone();
        let pending_token = auth
            .awaiting_verification()
            .then(|| auth.session.as_ref().map(|s| s.token.clone()))
            .flatten();
        use_effect_with(pending_token, move |pending_token| {
            if let Some(token) = pending_token.clone() {
                spawn_local(async move {
                    let outcome = auth::verify(&token).await;
                    debug!("Verification outcome: {:?}", outcome);
                    auth.dispatch(AuthAction::VerifyFinished { token, outcome });
                });
            }
            || ()
        });
    }

    // Token refresh check - runs every 30 minutes while logged in, restarted
    // for each new token so a tick never looks at a replaced one
    {
        let auth = auth.clone();
        use_effect_with(auth.token().map(str::to_string), move |current| {
            let interval = current.clone().map(|token| {
                Interval::new(Config::refresh_check_interval_ms(), move || {
                    let auth = auth.clone();
                    let token = token.clone();
                    spawn_local(async move { refresh_if_needed(auth, token).await });
                })
            });
            move || drop(interval)
        });
    }

    let login = {
        let auth = auth.clone();
        Callback::from(move |request: LoginUserRequest| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LoginStarted);
                let now = Utc::now();
                match auth::login(&request).await {
                    Ok(response) => {
                        let login_time = now.to_rfc3339_opts(SecondsFormat::Millis, true);
                        match response.into_session(&login_time) {
                            Some(session) => match session_store().persist(&session, now) {
                                Ok(()) => {
                                    analytics::track_event("Auth", "Login", session.role().as_str());
                                    auth.dispatch(AuthAction::LoginSuccess(session));
                                }
                                Err(e) => {
                                    error!("Failed to store session: {}", e);
                                    auth.dispatch(AuthAction::LoginError(
                                        "Could not save your session. Please check your browser settings.".to_string(),
                                    ));
                                }
                            },
                            None => auth.dispatch(AuthAction::LoginError(
                                "Invalid response from server".to_string(),
                            )),
                        }
                    }
                    Err(e) => {
                        warn!("Login failed: {}", e);
                        auth.dispatch(AuthAction::LoginError(login_failure(&e)));
                    }
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            debug!("Logging out");
            analytics::track_event("Auth", "Logout", "");
            auth.dispatch(AuthAction::Logout);
        })
    };

    let clear_error = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::ClearError))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
        clear_error,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

async fn refresh_if_needed(auth: UseReducerHandle<AuthState>, token: String) {
    match refresh_step(&token, Utc::now()) {
        RefreshStep::Wait => {}
        RefreshStep::Expire => {
            debug!("Token expired, logging out");
            auth.dispatch(AuthAction::Expired);
        }
        RefreshStep::Refresh => match auth::refresh(&token).await {
            Ok(Some(token)) => {
                debug!("Token refreshed");
                auth.dispatch(AuthAction::TokenRefreshed(token));
            }
            Ok(None) => debug!("Refresh returned no new token"),
            Err(e) => {
                warn!("Token refresh failed: {}", e);
                auth.dispatch(AuthAction::Expired);
            }
        },
    }
}
