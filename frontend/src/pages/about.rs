use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_header::PageHeader;
use crate::Route;

const PILLARS: &[(&str, &str)] = &[
    (
        "Our Vision",
        "To become the leading platform for sports tournaments worldwide, fostering a community where every athlete has the opportunity to compete, grow, and succeed.",
    ),
    (
        "Our Values",
        "Excellence, integrity, and sportsmanship guide everything we do. We believe in fair play, community support, and celebrating every victory, big or small.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let navigator = use_navigator().expect("About rendered outside a router");
    let on_get_started = Callback::from(move |_: MouseEvent| navigator.push(&Route::Apply));

    html! {
        <div class="bg-slate-950 text-white">
            <PageHeader
                title="Building Champions, Creating Legends"
                description="Sports Arena is your ultimate destination for competitive sports tournaments. We bring together athletes, teams, and communities to celebrate the spirit of competition and excellence."
            />
            <section class="max-w-7xl mx-auto px-4 py-16 grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <h2 class="text-4xl font-black mb-6">{"Empowering Athletes Across The Globe"}</h2>
                    <p class="text-slate-300 leading-relaxed">
                        {"We're dedicated to providing world-class tournament experiences that inspire athletes to push their limits and achieve greatness. Our platform connects passionate competitors with opportunities to showcase their skills, build lasting friendships, and create unforgettable memories."}
                    </p>
                </div>
                <div class="space-y-6">
                    { for PILLARS.iter().map(|(title, text)| html! {
                        <div class="bg-slate-900/70 border border-orange-500/20 rounded-2xl p-6">
                            <h3 class="text-xl font-bold text-orange-400 mb-2">{ *title }</h3>
                            <p class="text-slate-400">{ *text }</p>
                        </div>
                    }) }
                </div>
            </section>
            <section class="max-w-3xl mx-auto px-4 pb-20 text-center">
                <h3 class="text-3xl font-bold mb-4">{"Join Our Growing Community"}</h3>
                <p class="text-slate-400 mb-8">
                    {"Be part of something bigger. Register your team today and compete in tournaments that matter."}
                </p>
                <button onclick={on_get_started}
                    class="px-8 py-3 rounded-full bg-gradient-to-r from-orange-500 to-red-600 font-bold">
                    {"Get Started"}
                </button>
            </section>
        </div>
    }
}
