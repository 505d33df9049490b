use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::auth::AuthContext;
use crate::Route;

/// Links shown in both the desktop bar and the mobile drawer.
pub const NAV_LINKS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("Tournaments", Route::Tournaments),
    ("Apply", Route::Apply),
    ("About", Route::About),
    ("Contact", Route::Contact),
];

fn link_classes(active: bool) -> Classes {
    classes!(
        "px-3", "py-2", "rounded-md", "text-sm", "font-semibold",
        "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
        if active {
            classes!("text-orange-400")
        } else {
            classes!("text-white/90", "hover:text-white")
        }
    )
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().expect("Nav rendered outside a router");
    let current_route = use_route::<Route>().unwrap_or(Route::Home);
    let is_mobile_menu_open = use_state(|| false);

    let on_logout_click = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    let toggle_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_mobile_menu_open.set(!*is_mobile_menu_open))
    };

    // Close mobile menu when navigating
    let close_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| is_mobile_menu_open.set(false))
    };

    let on_apply_click = Callback::from(|_: MouseEvent| analytics::track_button_click("Apply Now", "Navbar"));

    let links = |mobile: bool| -> Html {
        NAV_LINKS
            .iter()
            .map(|(label, route)| {
                let active = &current_route == route;
                html! {
                    <span onclick={mobile.then(|| close_mobile_menu.clone())}>
                        <Link<Route> to={route.clone()} classes={link_classes(active)}>
                            {*label}
                        </Link<Route>>
                    </span>
                }
            })
            .collect()
    };

    let account = match auth.session() {
        Some(session) => html! {
            <div class="flex items-center gap-3">
                if session.is_admin() {
                    <Link<Route> to={Route::Panel} classes={classes!("text-sm", "font-semibold", "text-yellow-400", "hover:text-yellow-300")}>
                        {"Admin Panel"}
                    </Link<Route>>
                }
                <span title={session.user.email.clone()}
                    class="w-9 h-9 rounded-full bg-gradient-to-r from-red-500 to-orange-500 flex items-center justify-center font-bold text-white">
                    { session.user.initial().to_string() }
                </span>
                <button onclick={on_logout_click}
                    class="px-3 py-2 rounded-md text-sm font-medium text-white/90 hover:bg-white/10 transition-colors">
                    {"Logout"}
                </button>
            </div>
        },
        None => html! {
            <div class="flex items-center gap-2">
                <Link<Route> to={Route::Login} classes={classes!("px-3", "py-2", "text-sm", "font-medium", "text-white/90", "hover:text-white")}>
                    {"Login"}
                </Link<Route>>
                <Link<Route> to={Route::SignUp} classes={classes!("px-3", "py-2", "rounded-md", "text-sm", "font-medium", "border", "border-orange-500/50", "text-white", "hover:bg-orange-500/10")}>
                    {"Sign Up"}
                </Link<Route>>
            </div>
        },
    };

    html! {
        <>
            <nav class={classes!(
                "fixed", "top-0", "left-0", "w-full", "z-50", "bg-gradient-to-r", "from-gray-900",
                "via-gray-800", "to-gray-900", "text-white", "shadow-2xl", "backdrop-blur-xl",
                "border-b", "border-orange-500/20"
            )}>
                <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                    <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                        <Link<Route> to={Route::Home} classes={classes!("text-xl", "md:text-2xl", "font-extrabold", "bg-gradient-to-r", "from-red-500", "via-orange-500", "to-yellow-500", "bg-clip-text", "text-transparent")}>
                            {"Sports Arena"}
                        </Link<Route>>

                        // Desktop navigation - hidden on mobile
                        <div class={classes!("hidden", "lg:flex", "items-center", "space-x-4")}>
                            { links(false) }
                        </div>

                        <div class={classes!("hidden", "lg:flex", "items-center", "space-x-4")}>
                            { account.clone() }
                            <span onclick={on_apply_click.clone()}>
                                <Link<Route> to={Route::Apply} classes={classes!("bg-gradient-to-r", "from-red-500", "via-orange-500", "to-red-500", "text-white", "px-5", "py-2", "rounded-lg", "font-bold", "text-sm", "shadow-lg", "shadow-red-500/30")}>
                                    {"Apply Now"}
                                </Link<Route>>
                            </span>
                        </div>

                        <button
                            onclick={toggle_mobile_menu}
                            class={classes!("lg:hidden", "p-2", "rounded-lg", "border", "border-orange-500/30", "hover:border-orange-500")}
                            aria-label="Toggle menu"
                        >
                            { if *is_mobile_menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
            </nav>

            if *is_mobile_menu_open {
                <>
                <div class={classes!("fixed", "top-16", "left-0", "w-full", "z-40", "lg:hidden")}>
                    <div class="mx-2 sm:mx-4 bg-gray-900/95 border-2 border-orange-500/30 rounded-2xl shadow-2xl p-4 space-y-3">
                        { links(true) }
                        <div class="pt-4 border-t border-orange-500/20 space-y-3" onclick={close_mobile_menu.clone()}>
                            { account }
                            <Link<Route> to={Route::Apply} classes={classes!("block", "w-full", "bg-gradient-to-r", "from-red-500", "via-orange-500", "to-red-500", "text-white", "text-center", "px-4", "py-3", "rounded-xl", "font-bold")}>
                                {"Apply Now"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm z-30 lg:hidden" onclick={close_mobile_menu}></div>
                </>
            }
        </>
    }
}
