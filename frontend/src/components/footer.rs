use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const COMPANY_LINKS: &[(&str, Route)] = &[
    ("About Us", Route::About),
    ("Contact", Route::Contact),
    ("Privacy Policy", Route::Policy),
];

const EXPLORE_LINKS: &[(&str, Route)] = &[
    ("Tournaments", Route::Tournaments),
    ("Apply", Route::Apply),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://facebook.com"),
    ("Twitter", "https://twitter.com"),
    ("Instagram", "https://instagram.com"),
    ("YouTube", "https://youtube.com"),
];

fn link_column(title: &str, links: &[(&str, Route)]) -> Html {
    html! {
        <div class="space-y-4">
            <h4 class="text-white font-bold text-lg">{title}</h4>
            <ul class="space-y-2">
                { for links.iter().map(|(label, route)| html! {
                    <li>
                        <Link<Route> to={route.clone()} classes={classes!("text-gray-400", "hover:text-orange-400", "text-sm", "transition-colors")}>
                            {*label}
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class={classes!("w-full", "px-4", "py-8", "bg-gradient-to-b", "from-gray-950", "to-black")}>
            <div class={classes!("max-w-7xl", "mx-auto", "bg-gradient-to-r", "from-gray-900", "via-gray-800", "to-gray-900", "border-2", "border-orange-500/20", "px-6", "md:px-10", "py-10")}>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-8 mb-8">
                    <div class="space-y-4">
                        <h3 class="text-2xl font-extrabold bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 bg-clip-text text-transparent">
                            {"Sports Arena"}
                        </h3>
                        <p class="text-gray-400 text-sm leading-relaxed">
                            {"Your ultimate destination for sports leagues and events. Join the arena today!"}
                        </p>
                    </div>
                    { link_column("Company", COMPANY_LINKS) }
                    { link_column("Explore", EXPLORE_LINKS) }
                </div>
                <div class="flex flex-col sm:flex-row items-center justify-between gap-4 border-t border-orange-500/20 pt-6">
                    <p class="text-gray-500 text-sm">{ format!("© {} Sports Arena. All rights reserved.", year) }</p>
                    <div class="flex gap-4">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*name}
                                class="text-gray-400 hover:text-orange-400 text-sm transition-colors">
                                {*name}
                            </a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
