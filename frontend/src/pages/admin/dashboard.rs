use log::error;
use shared::models::organizer::top_organizers;
use shared::{DashboardStats, LoadState, Organizer};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::organizers;
use crate::auth::AuthContext;
use crate::guard::Loading;

const TOP_COUNT: usize = 3;

fn stat_card(label: &str, value: String, accent: &str) -> Html {
    html! {
        <div class="bg-[#1a2235]/60 border border-orange-500/10 rounded-2xl p-6">
            <p class="text-sm text-gray-400">{ label }</p>
            <h2 class={classes!("text-3xl", "font-bold", "mt-2", accent.to_string())}>{ value }</h2>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let roster = use_state(LoadState::<Vec<Organizer>>::default);

    {
        let roster = roster.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = organizers::list().await;
                if let Err(e) = &result {
                    error!("Failed to load organizers for the dashboard: {}", e);
                }
                roster.set(LoadState::from_result(result.map_err(|e| e.user_message())));
            });
            || ()
        });
    }

    let name = auth
        .session()
        .map(|s| s.user.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Admin".to_string());

    let body = match &*roster {
        LoadState::Loading => html! { <Loading message="Loading dashboard..." /> },
        LoadState::Failed(message) => html! {
            <div class="p-6 rounded-2xl bg-red-500/10 border border-red-500/30 text-red-300">{ message }</div>
        },
        LoadState::Loaded(list) => {
            let stats = DashboardStats::from_organizers(list);
            html! {
                <>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-10">
                        { stat_card("Total Organizors", stats.total_organizers.to_string(), "text-orange-400") }
                        { stat_card("Active", stats.active_organizers.to_string(), "text-green-400") }
                        { stat_card("Inactive", stats.inactive_organizers.to_string(), "text-red-400") }
                        { stat_card("Total Events", stats.total_events.to_string(), "text-blue-400") }
                    </div>
                    <div class="grid lg:grid-cols-2 gap-6">
                        <div class="bg-[#1a2235]/60 border border-orange-500/10 rounded-2xl p-6">
                            <h3 class="text-lg font-bold mb-4">{"Active Ratio"}</h3>
                            <div class="w-full h-3 bg-slate-700 rounded-full overflow-hidden">
                                <div class="h-full bg-gradient-to-r from-orange-500 to-red-500"
                                    style={format!("width: {}%", stats.active_ratio_percent())}></div>
                            </div>
                            <p class="text-sm text-gray-400 mt-2">{ format!("{}% of organizors are active", stats.active_ratio_percent()) }</p>
                        </div>
                        <div class="bg-[#1a2235]/60 border border-orange-500/10 rounded-2xl p-6">
                            <h3 class="text-lg font-bold mb-4">{"Top Organizors"}</h3>
                            if list.is_empty() {
                                <p class="text-gray-400 text-sm">{"No organizors yet."}</p>
                            } else {
                                <ul class="space-y-3">
                                    { for top_organizers(list, TOP_COUNT).into_iter().map(|o| html! {
                                        <li key={o.id.clone()} class="flex items-center gap-3">
                                            <span class="w-9 h-9 rounded-full bg-gradient-to-r from-orange-500 to-red-500 flex items-center justify-center font-bold">
                                                { o.initial().to_string() }
                                            </span>
                                            <span class="flex-1">{ &o.name }</span>
                                            <span class="text-sm text-gray-400">{ format!("{} events", o.events) }</span>
                                        </li>
                                    }) }
                                </ul>
                            }
                        </div>
                    </div>
                </>
            }
        }
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold mb-8">{ format!("Welcome Back, {}", name) }</h1>
            { body }
        </div>
    }
}
