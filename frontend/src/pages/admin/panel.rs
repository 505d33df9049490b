use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::pages::admin::dashboard::Dashboard;
use crate::pages::admin::organizer_form::AddOrganizer;
use crate::pages::admin::organizers::Organizers;
use crate::{PanelRoute, Route};

fn switch_panel(route: PanelRoute) -> Html {
    match route {
        PanelRoute::Dashboard => html! { <Dashboard /> },
        PanelRoute::Organizers => html! { <Organizers /> },
        PanelRoute::AddOrganizer => html! { <AddOrganizer /> },
        PanelRoute::NotFound => html! {
            <div class="text-center text-gray-400 py-24">
                <h2 class="text-3xl font-bold text-white mb-2">{"Page Not Found"}</h2>
                <p>{"This section of the admin panel does not exist."}</p>
            </div>
        },
    }
}

/// Which sidebar entry a panel route belongs to.
pub fn active_section(route: &PanelRoute) -> Option<PanelRoute> {
    match route {
        PanelRoute::Dashboard => Some(PanelRoute::Dashboard),
        PanelRoute::Organizers | PanelRoute::AddOrganizer => Some(PanelRoute::Organizers),
        PanelRoute::NotFound => None,
    }
}

const NAV_ITEMS: &[(&str, &str, PanelRoute)] = &[
    ("▦", "Dashboard", PanelRoute::Dashboard),
    ("👥", "Organizors", PanelRoute::Organizers),
];

#[function_component(AdminPanel)]
pub fn admin_panel() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().expect("AdminPanel rendered outside a router");
    let current = use_route::<PanelRoute>().unwrap_or(PanelRoute::NotFound);
    let collapsed = use_state(|| false);

    let toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| collapsed.set(!*collapsed))
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    let active = active_section(&current);

    html! {
        <div class="min-h-screen flex bg-[#0f1420] text-white">
            <aside class={classes!(
                "flex", "flex-col", "bg-[#141b2d]", "border-r", "border-orange-500/20", "transition-all", "duration-300",
                if *collapsed { "w-20" } else { "w-64" }
            )}>
                <div class="flex items-center justify-between p-5 border-b border-orange-500/20">
                    if !*collapsed {
                        <span class="text-xl font-extrabold bg-gradient-to-r from-orange-500 to-red-500 bg-clip-text text-transparent">
                            {"Admin Panel"}
                        </span>
                    }
                    <button onclick={toggle} aria-label="Toggle sidebar" class="p-2 rounded-lg hover:bg-white/10">{"☰"}</button>
                </div>
                <nav class="flex-1 p-4 space-y-2">
                    { for NAV_ITEMS.iter().map(|(icon, label, route)| {
                        let selected = active.as_ref() == Some(route);
                        html! {
                            <Link<PanelRoute> to={route.clone()} classes={classes!(
                                "flex", "items-center", "gap-3", "px-4", "py-3", "rounded-xl", "transition-all",
                                if selected {
                                    "bg-gradient-to-r from-orange-500/20 to-red-500/20 text-orange-400 border border-orange-500/30"
                                } else {
                                    "text-gray-400 hover:bg-[#1a2235]/50 hover:text-orange-300"
                                }
                            )}>
                                <span>{ *icon }</span>
                                if !*collapsed {
                                    <span class="font-medium">{ *label }</span>
                                }
                            </Link<PanelRoute>>
                        }
                    }) }
                </nav>
                <div class="p-4 border-t border-orange-500/20">
                    <button onclick={on_logout}
                        class="w-full flex items-center gap-3 px-4 py-3 rounded-xl text-red-400 hover:bg-red-500/10">
                        <span>{"⏻"}</span>
                        if !*collapsed {
                            <span class="font-medium">{"Logout"}</span>
                        }
                    </button>
                </div>
            </aside>
            <main class="flex-1 p-6 md:p-10 overflow-x-hidden">
                <Switch<PanelRoute> render={switch_panel} />
            </main>
        </div>
    }
}
