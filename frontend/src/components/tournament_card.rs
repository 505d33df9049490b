use shared::models::tournament::format_date;
use shared::Tournament;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct TournamentCardProps {
    pub tournament: Tournament,
}

fn stat(label: &str, value: Option<String>) -> Html {
    html! {
        <div class="bg-slate-800/50 rounded-xl p-3 flex flex-col items-center justify-center">
            <span class="text-xs text-slate-400">{ label }</span>
            <span class="text-sm font-semibold text-white">{ value.unwrap_or_else(|| "TBA".to_string()) }</span>
        </div>
    }
}

#[function_component(TournamentCard)]
pub fn tournament_card(props: &TournamentCardProps) -> Html {
    let navigator = use_navigator().expect("TournamentCard rendered outside a router");
    let t = &props.tournament;
    let on_register = Callback::from(move |_: MouseEvent| navigator.push(&Route::Apply));

    html! {
        <div class="relative bg-slate-900/60 backdrop-blur-xl border border-slate-800/70 hover:border-orange-500/40 rounded-2xl p-6 transition-all duration-300">
            <div class="space-y-4">
                <h2 class="text-2xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500">
                    { &t.title }
                </h2>
                <div class="flex flex-col gap-1 text-slate-300 text-sm">
                    <span>{ format!("📍 {}", t.location.as_deref().unwrap_or("Location TBA")) }</span>
                    <span>{ format!("📅 {}", t.schedule_display()) }</span>
                </div>
                <div class="grid grid-cols-2 gap-3 text-sm">
                    { stat("Starts", t.start_date.as_deref().map(format_date)) }
                    { stat("Ends", t.end_date.as_deref().map(format_date)) }
                    { stat("Matches", t.matches.clone()) }
                    { stat("Players", t.max_players.clone()) }
                </div>
                <div class="flex items-center justify-between border-t border-slate-700/50 pt-4">
                    <span class="text-lg font-semibold text-yellow-400">{ format!("🏆 {}", t.prize_display()) }</span>
                    <button onclick={on_register}
                        class="text-sm font-semibold bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 text-white px-4 py-2 rounded-full">
                        {"Register"}
                    </button>
                </div>
            </div>
        </div>
    }
}
