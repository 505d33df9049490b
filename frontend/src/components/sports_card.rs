use shared::Sport;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SportsCardProps {
    pub sport: Sport,
}

#[function_component(SportsCard)]
pub fn sports_card(props: &SportsCardProps) -> Html {
    let navigator = use_navigator().expect("SportsCard rendered outside a router");
    let sport = props.sport;

    let onclick = Callback::from(move |_: MouseEvent| {
        analytics::track_button_click(sport.name, "Sports Section");
        navigator.push(&Route::TournamentCategory {
            category: sport.slug.to_string(),
        });
    });

    html! {
        <div class="relative rounded-2xl overflow-hidden shadow-2xl border border-slate-700/50 bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 p-6 h-full flex flex-col">
            <h3 class="text-3xl font-black bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 bg-clip-text text-transparent mb-4">
                { sport.name }
            </h3>
            <p class="text-slate-400 text-sm mb-5 leading-relaxed flex-1">{ sport.description }</p>
            <button {onclick}
                class="w-full py-3 rounded-xl bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 text-white font-bold shadow-lg">
                { format!("View {} Tournaments", sport.name) }
            </button>
        </div>
    }
}
