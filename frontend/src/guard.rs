use log::debug;
use serde::{Deserialize, Serialize};
use shared::{authorize, post_login_target, AccessDecision, Role, RouteAccess, Session};
use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::AnyRoute;

use crate::auth::AuthContext;
use crate::{access_for_path, Route};

/// Query string carried to the login page: where to return afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub access: RouteAccess,
    #[prop_or_default]
    pub children: Children,
}

/// Where a redirect decision should land, with the origin to carry along.
///
/// Public-only screens bounce a logged-in visitor to the page they were
/// originally headed for, when that page is one they may now visit.
pub fn redirect_target(
    decision: &AccessDecision,
    access: &RouteAccess,
    session: Option<&Session>,
    return_to: Option<&str>,
) -> Option<(String, Option<String>)> {
    let AccessDecision::Redirect { to, from } = decision else {
        return None;
    };
    match (access, session) {
        (RouteAccess::PublicOnly, Some(session)) => {
            Some((post_login_target(session, return_to, access_for_path), None))
        }
        _ => Some((to.clone(), from.clone())),
    }
}

/// Renders its children only when the current session satisfies `access`.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().expect("Guard rendered outside a router");
    let location = use_location();
    let path = location.as_ref().map(|l| l.path().to_string()).unwrap_or_default();
    let return_to = location
        .as_ref()
        .and_then(|l| l.query::<ReturnTo>().ok())
        .and_then(|q| q.from);

    let verifying = props.access.requires_session() && auth.state.awaiting_verification();
    let decision = authorize(auth.session(), &props.access, &path);
    let redirect = redirect_target(&decision, &props.access, auth.session(), return_to.as_deref());

    use_effect_with((redirect, verifying), move |(redirect, verifying)| {
        if let (Some((to, from)), false) = (redirect, *verifying) {
            debug!("Guard redirecting to {} (from {:?})", to, from);
            let route = AnyRoute::new(to.clone());
            match from {
                Some(from) => {
                    let query = ReturnTo { from: Some(from.clone()) };
                    if navigator.replace_with_query(&route, &query).is_err() {
                        navigator.replace(&route);
                    }
                }
                None => navigator.replace(&route),
            }
        }
        || ()
    });

    if verifying {
        return html! { <Loading message="Verifying authentication..." /> };
    }

    match decision {
        AccessDecision::Allow => html! { <>{ props.children.clone() }</> },
        AccessDecision::Redirect { .. } => html! { <Loading message="Redirecting..." /> },
        AccessDecision::Deny { required } => html! { <AccessDenied {required} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub message: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-slate-950 text-white">
            <div class="w-14 h-14 border-4 border-orange-500 border-t-transparent rounded-full animate-spin"></div>
            <p class="mt-4 text-gray-400 text-sm">{ &props.message }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccessDeniedProps {
    pub required: Role,
}

#[function_component(AccessDenied)]
pub fn access_denied(props: &AccessDeniedProps) -> Html {
    let navigator = use_navigator().expect("AccessDenied rendered outside a router");

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.back())
    };
    let on_home = Callback::from(move |_: MouseEvent| navigator.push(&Route::Home));

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-950 px-4">
            <div class="max-w-md w-full text-center bg-slate-900/80 border border-red-500/30 rounded-2xl p-8 shadow-2xl">
                <div class="text-6xl mb-4">{"🔒"}</div>
                <h1 class="text-3xl font-bold text-white mb-2">{"Access Denied"}</h1>
                <p class="text-gray-400 mb-8">
                    { format!("You need {} privileges to view this page.", props.required.label()) }
                </p>
                <div class="flex gap-4 justify-center">
                    <button onclick={on_back}
                        class="px-6 py-3 rounded-xl border border-white/20 text-white hover:bg-white/10 transition-colors">
                        {"Go Back"}
                    </button>
                    <button onclick={on_home}
                        class="px-6 py-3 rounded-xl bg-gradient-to-r from-orange-500 to-red-600 text-white font-semibold hover:opacity-90 transition-opacity">
                        {"Go Home"}
                    </button>
                </div>
            </div>
        </div>
    }
}
