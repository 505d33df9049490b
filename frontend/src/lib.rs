use log::{debug, info};
use shared::{Role, RouteAccess};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthProvider;
use crate::components::common_toast::ToastProvider;
use crate::components::cookie_consent::CookieConsent;
use crate::components::layout::SiteLayout;
use crate::guard::Guard;

pub mod analytics;
pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod guard;
pub mod storage;
pub mod pages {
    pub mod about;
    pub mod admin_auth;
    pub mod apply;
    pub mod contact;
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod policy;
    pub mod signup;
    pub mod tournaments;
    pub mod admin {
        pub mod dashboard;
        pub mod organizer_form;
        pub mod organizers;
        pub mod panel;
    }
}

use pages::{
    about::About, admin::panel::AdminPanel, admin_auth::AdminAuth, apply::Apply, contact::Contact,
    home::Home, login::Login, not_found::NotFound, policy::Policy, signup::SignUp,
    tournaments::Tournaments,
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/apply")]
    Apply,
    #[at("/tournaments")]
    Tournaments,
    #[at("/tournaments/:category")]
    TournamentCategory { category: String },
    #[at("/policy")]
    Policy,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/auth")]
    AdminAuth,
    #[at("/login")]
    Login,
    #[at("/signUp")]
    SignUp,
    #[at("/panel")]
    Panel,
    #[at("/panel/*")]
    PanelNested,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Who may render this route.
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::AdminAuth | Route::Login | Route::SignUp => RouteAccess::PublicOnly,
            Route::Panel | Route::PanelNested => RouteAccess::Role(Role::Admin),
            _ => RouteAccess::Public,
        }
    }
}

/// Access rule of whichever route `path` resolves to.
pub fn access_for_path(path: &str) -> RouteAccess {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    Route::recognize(path)
        .map(|route| route.access())
        .unwrap_or(RouteAccess::Public)
}

/// Admin back-office routes, rendered inside the panel layout.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum PanelRoute {
    #[at("/panel")]
    Dashboard,
    #[at("/panel/organizors")]
    Organizers,
    #[at("/panel/organizors/add-organizor")]
    AddOrganizer,
    #[not_found]
    #[at("/panel/404")]
    NotFound,
}

#[function_component(PageViewTracker)]
fn page_view_tracker() -> Html {
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();
    use_effect_with(path, |path| {
        analytics::track_page_view(path);
        || ()
    });
    html! {}
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <PageViewTracker />
                    <div class="app-container min-h-screen bg-slate-950">
                        <Switch<Route> render={switch} />
                    </div>
                    <CookieConsent />
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

fn guarded(route: &Route, page: Html) -> Html {
    html! {
        <Guard access={route.access()}>
            { page }
        </Guard>
    }
}

fn site(page: Html) -> Html {
    html! { <SiteLayout>{ page }</SiteLayout> }
}

fn switch(route: Route) -> Html {
    debug!("Route switch: {:?}", route);
    match &route {
        Route::Home => site(html! { <Home /> }),
        Route::Apply => site(html! { <Apply /> }),
        Route::Tournaments => site(html! { <Tournaments /> }),
        Route::TournamentCategory { category } => {
            site(html! { <Tournaments category={category.clone()} /> })
        }
        Route::Policy => site(html! { <Policy /> }),
        Route::About => site(html! { <About /> }),
        Route::Contact => site(html! { <Contact /> }),
        Route::AdminAuth => guarded(&route, html! { <AdminAuth /> }),
        Route::Login => guarded(&route, html! { <Login /> }),
        Route::SignUp => guarded(&route, html! { <SignUp /> }),
        Route::Panel | Route::PanelNested => guarded(&route, html! { <AdminPanel /> }),
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    // Resume analytics for visitors who already consented
    let outcome = analytics::init();
    debug!("Analytics startup: {:?}", outcome);

    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
