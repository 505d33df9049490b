use shared::models::tournament::{category_title, empty_listing_message};
use shared::{LoadState, Tournament};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::tournaments;
use crate::components::page_header::PageHeader;
use crate::components::tournament_card::TournamentCard;
use crate::guard::Loading;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct TournamentsProps {
    #[prop_or_default]
    pub category: Option<String>,
}

#[function_component(Tournaments)]
pub fn tournaments(props: &TournamentsProps) -> Html {
    let listing = use_state(LoadState::<Vec<Tournament>>::default);

    // Re-fetch when the category changes
    {
        let listing = listing.clone();
        use_effect_with(props.category.clone(), move |category| {
            let category = category.clone();
            listing.set(LoadState::Loading);
            spawn_local(async move {
                listing.set(tournaments::list(category.as_deref()).await);
            });
            || ()
        });
    }

    let category = props.category.as_deref();
    let title = category_title(category);
    let header_title = if category.is_some() { title.clone() } else { "Tournaments".to_string() };

    let body = match &*listing {
        LoadState::Loading => html! { <Loading message="Loading tournaments..." /> },
        LoadState::Failed(message) => html! {
            <div class="max-w-lg mx-auto text-center bg-slate-900/70 border border-red-500/30 rounded-2xl p-8">
                <p class="text-5xl mb-4">{"😕"}</p>
                <h3 class="text-xl font-bold text-white mb-2">{ empty_listing_message(category) }</h3>
                <p class="text-slate-400 mb-6">{ message }</p>
                if category.is_some() {
                    <Link<Route> to={Route::Tournaments} classes={classes!("inline-block", "px-6", "py-2", "rounded-full", "bg-gradient-to-r", "from-orange-500", "to-red-600", "text-white", "font-semibold")}>
                        {"View All Tournaments"}
                    </Link<Route>>
                }
            </div>
        },
        LoadState::Loaded(list) if list.is_empty() => html! {
            <p class="text-center text-slate-400">{ empty_listing_message(category) }</p>
        },
        LoadState::Loaded(list) => html! {
            <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                { for list.iter().enumerate().map(|(i, t)| {
                    let key = if t.id.is_empty() { i.to_string() } else { t.id.clone() };
                    html! { <TournamentCard {key} tournament={t.clone()} /> }
                }) }
            </div>
        },
    };

    html! {
        <div class="bg-slate-950 text-white min-h-screen">
            <PageHeader
                title={header_title}
                description="Step into the arena of champions, where legends are forged, glory is earned, and every match burns with energy."
            />
            <section class="max-w-7xl mx-auto px-4 py-16">
                <h2 class="text-3xl md:text-4xl font-extrabold text-center mb-12 bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 bg-clip-text text-transparent">
                    { title }
                </h2>
                { body }
            </section>
        </div>
    }
}
