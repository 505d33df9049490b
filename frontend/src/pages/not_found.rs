use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::SiteLayout;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <SiteLayout>
            <div class="min-h-[70vh] flex flex-col items-center justify-center bg-slate-950 text-white text-center px-4">
                <h1 class="text-8xl font-black bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 bg-clip-text text-transparent">
                    {"404"}
                </h1>
                <h2 class="text-3xl font-bold mt-4">{"Page Not Found"}</h2>
                <p class="text-slate-400 mt-4 max-w-md">
                    {"Looks like this play didn't make it to the scoreboard. Let's get you back to the action!"}
                </p>
                <Link<Route> to={Route::Home} classes={classes!("mt-8", "px-6", "py-3", "rounded-full", "bg-gradient-to-r", "from-orange-500", "to-red-600", "font-semibold")}>
                    {"← Back to Home"}
                </Link<Route>>
            </div>
        </SiteLayout>
    }
}
