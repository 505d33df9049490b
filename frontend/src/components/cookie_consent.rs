use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use shared::ConsentChoice;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::storage::session_store;
use crate::Route;

/// Delay before the banner slides in for visitors who have not answered yet.
const BANNER_DELAY_MS: u32 = 1_500;

/// Banner asking for cookie consent; hidden once an answer is stored.
#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_effect_with((), move |_| {
            let timeout = session_store().consent().is_none().then(|| {
                Timeout::new(BANNER_DELAY_MS, move || show.set(true))
            });
            move || drop(timeout)
        });
    }

    let answer = {
        let show = show.clone();
        move |choice: ConsentChoice| {
            let show = show.clone();
            Callback::from(move |_: MouseEvent| {
                if let Err(e) = session_store().record_consent(choice, Utc::now()) {
                    warn!("Failed to store cookie consent: {}", e);
                }
                match choice {
                    ConsentChoice::Accepted => {
                        let outcome = analytics::init();
                        debug!("Analytics after consent: {:?}", outcome);
                    }
                    ConsentChoice::Rejected => analytics::reset(),
                }
                show.set(false);
            })
        }
    };
    let on_accept = answer(ConsentChoice::Accepted);
    let on_decline = answer(ConsentChoice::Rejected);

    if !*show {
        return html! {};
    }

    html! {
        <>
            <div class="fixed inset-0 bg-black/60 backdrop-blur-sm z-50" onclick={on_decline.clone()}></div>
            <div class="fixed bottom-6 left-4 right-4 md:left-auto md:right-6 md:max-w-md z-50" role="dialog" aria-live="polite">
                <div class="bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 rounded-2xl shadow-2xl border border-orange-500/30 overflow-hidden">
                    <div class="h-1 bg-gradient-to-r from-orange-500 via-red-500 to-orange-600"></div>
                    <div class="p-5">
                        <h3 class="text-lg font-bold text-white">{"Cookie Notice"}</h3>
                        <p class="text-xs text-orange-400 mb-3">{"We value your privacy"}</p>
                        <p class="text-sm text-gray-300 mb-4 leading-relaxed">
                            {"We use cookies to enhance your experience and analyze site traffic. By continuing, you accept our use of cookies."}
                            {" "}
                            <Link<Route> to={Route::Policy} classes={classes!("text-orange-400", "underline")}>
                                {"Privacy Policy"}
                            </Link<Route>>
                        </p>
                        <div class="flex gap-3">
                            <button onclick={on_accept}
                                class="flex-1 bg-gradient-to-r from-orange-500 to-red-600 text-white font-semibold py-2.5 rounded-xl">
                                {"Accept Cookies"}
                            </button>
                            <button onclick={on_decline}
                                class="px-5 py-2.5 border border-gray-600 text-gray-300 rounded-xl hover:bg-white/5">
                                {"Decline"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
