use gloo_timers::callback::Interval;
use shared::SPORTS;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::components::sports_card::SportsCard;
use crate::config::Config;
use crate::Route;

pub const HERO_SLIDES: &[&str] = &[
    "/assets/hero-arena.jpg",
    "/assets/hero-basketball.jpg",
    "/assets/hero-soccer.jpg",
];

/// Index after `current` in a carousel of `len`, wrapping to the start.
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Index before `current`, wrapping to the end.
pub fn prev_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

pub struct Review {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub tournament: &'static str,
    pub achievement: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        name: "Marcus Johnson",
        role: "Soccer Team Captain",
        text: "This platform transformed how we compete! The tournament organization is flawless, and the community is incredibly supportive.",
        tournament: "Spring Soccer League 2024",
        achievement: "Champions",
    },
    Review {
        name: "Sarah Chen",
        role: "Basketball Player",
        text: "Best sports platform I've ever used! Love how easy it is to register and track our team's progress.",
        tournament: "Winter Basketball Invitational",
        achievement: "Runner-up",
    },
    Review {
        name: "David Martinez",
        role: "Rugby Forward",
        text: "Incredible experience from start to finish! Referees are professional and the competition is fierce.",
        tournament: "State Rugby Cup 2024",
        achievement: "Semi-Finalist",
    },
    Review {
        name: "Emily Rodriguez",
        role: "Tennis Pro",
        text: "The organization, court quality, and overall atmosphere are unmatched. Can't wait for the next season!",
        tournament: "Summer Tennis Open 2024",
        achievement: "Champion",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="bg-slate-950 text-white">
            <HeroSection />
            <SportsSection />
            <ReviewsSection />
        </div>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let navigator = use_navigator().expect("Home rendered outside a router");
    let current = use_state(|| 0usize);

    // Auto-advance; restarted whenever the slide changes so manual moves reset the clock
    {
        let current = current.clone();
        use_effect_with(*current, move |index| {
            let index = *index;
            let interval = Interval::new(Config::hero_slide_interval_ms(), move || {
                current.set(next_slide(index, HERO_SLIDES.len()));
            });
            move || drop(interval)
        });
    }

    let on_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_slide(*current, HERO_SLIDES.len())))
    };
    let on_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_slide(*current, HERO_SLIDES.len())))
    };
    let on_explore = Callback::from(move |_: MouseEvent| {
        analytics::track_button_click("Explore More", "Hero");
        navigator.push(&Route::Tournaments);
    });

    html! {
        <section class="relative h-[90vh] w-full overflow-hidden">
            <img src={HERO_SLIDES[*current % HERO_SLIDES.len()]} alt={format!("Slide {}", *current)}
                class="absolute inset-0 w-full h-full object-cover opacity-70" />
            <div class="absolute inset-0 flex flex-col items-center justify-center text-center px-4">
                <h1 class="text-4xl md:text-6xl font-extrabold mb-4">{"Sports, Reimagined for Champions"}</h1>
                <p class="text-lg md:text-2xl text-gray-200 mb-8">{"The Battle for Glory Begins Here"}</p>
                <button onclick={on_explore}
                    class="px-8 py-3 rounded-full bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 font-bold">
                    {"Explore More"}
                </button>
            </div>
            <button onclick={on_prev} aria-label="Previous slide"
                class="absolute left-4 top-1/2 -translate-y-1/2 text-3xl">{"❮"}</button>
            <button onclick={on_next} aria-label="Next slide"
                class="absolute right-4 top-1/2 -translate-y-1/2 text-3xl">{"❯"}</button>
            <div class="absolute bottom-6 w-full flex justify-center gap-2">
                { for (0..HERO_SLIDES.len()).map(|index| {
                    let setter = current.clone();
                    let onclick = Callback::from(move |_: MouseEvent| setter.set(index));
                    html! {
                        <button {onclick} aria-label={format!("Go to slide {}", index + 1)}
                            class={classes!("w-3", "h-3", "rounded-full",
                                if index == *current { "bg-orange-500" } else { "bg-white" })}>
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(SportsSection)]
fn sports_section() -> Html {
    html! {
        <section class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-black mb-4">{"Choose Your Sport"}</h2>
                    <p class="text-slate-400 max-w-2xl mx-auto">
                        {"Select from our range of exciting sports. Whether you're a seasoned athlete or just starting out, we have tournaments for every skill level and passion."}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    { for SPORTS.iter().map(|sport| html! { <SportsCard key={sport.slug} sport={*sport} /> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ReviewsSection)]
fn reviews_section() -> Html {
    let active = use_state(|| 0usize);
    let review = &REVIEWS[*active % REVIEWS.len()];

    let on_prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(prev_slide(*active, REVIEWS.len())))
    };
    let on_next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(next_slide(*active, REVIEWS.len())))
    };

    html! {
        <section class="py-20 px-4 bg-gradient-to-b from-slate-950 to-slate-900">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-4xl font-black mb-4">{"What Athletes Say"}</h2>
                <p class="text-slate-400 mb-10">
                    {"Real stories from real athletes who've experienced the thrill of competition on our platform"}
                </p>
                <div class="bg-slate-800/60 border border-orange-500/20 rounded-2xl p-8">
                    <p class="text-yellow-400 mb-4">{"★★★★★"}</p>
                    <p class="text-lg text-slate-200 italic mb-6">{ format!("\"{}\"", review.text) }</p>
                    <p class="font-bold">{ review.name }</p>
                    <p class="text-sm text-slate-400">{ review.role }</p>
                    <p class="text-sm text-orange-400 mt-2">{ format!("{} · {}", review.tournament, review.achievement) }</p>
                </div>
                <div class="flex justify-center gap-4 mt-6">
                    <button onclick={on_prev} aria-label="Previous review" class="px-4 py-2 rounded-full border border-white/20">{"❮"}</button>
                    <button onclick={on_next} aria-label="Next review" class="px-4 py-2 rounded-full border border-white/20">{"❯"}</button>
                </div>
            </div>
        </section>
    }
}
