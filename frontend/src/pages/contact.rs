use gloo_timers::callback::Timeout;
use log::debug;
use shared::forms::contact::ContactForm;
use shared::FieldErrors;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::components::form_field::FormField;
use crate::components::page_header::PageHeader;
use crate::Route;

const SEND_DELAY_MS: u32 = 1_500;
const SUCCESS_VISIBLE_MS: u32 = 5_000;

const CHANNELS: &[(&str, &str)] = &[
    ("Email Us", "support@sportsarena.example"),
    ("Call Us", "+1 (555) 123-4567"),
    ("Visit Us", "123 Sports Ave, Arena City"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let navigator = use_navigator().expect("Contact rendered outside a router");
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::new);
    let loading = use_state(|| false);
    let submitted = use_state(|| false);

    let on_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |(name, value): (String, String)| {
            let mut next = (*form).clone();
            next.set_field(&name, value);
            form.set(next);
            if errors.contains(&name) {
                let mut remaining = (*errors).clone();
                remaining.remove(&name);
                errors.set(remaining);
            }
        })
    };

    let on_message = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(("message".to_string(), input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = form.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            debug!("Sending contact message");
            loading.set(true);
            let form = form.clone();
            let loading = loading.clone();
            let submitted = submitted.clone();
            Timeout::new(SEND_DELAY_MS, move || {
                loading.set(false);
                submitted.set(true);
                form.set(ContactForm::default());
                analytics::track_event("Contact", "Submit", "Contact Form");
                Timeout::new(SUCCESS_VISIBLE_MS, move || submitted.set(false)).forget();
            })
            .forget();
        })
    };

    let on_register = Callback::from(move |_: MouseEvent| navigator.push(&Route::SignUp));
    let error = |field: &str| errors.get(field).map(|m| AttrValue::from(m.to_string()));

    html! {
        <div class="bg-slate-950 text-white">
            <PageHeader
                title="Let's Connect"
                description="Have questions about tournaments or need assistance? We're here to help you succeed"
            />
            <section class="max-w-7xl mx-auto px-4 py-16 grid lg:grid-cols-2 gap-12">
                <div class="space-y-8">
                    <h2 class="text-4xl font-black">{"We're Here To Help You"}</h2>
                    <p class="text-slate-300">
                        {"Whether you're organizing a tournament, registering a team, or just have questions about our platform, our dedicated team is ready to assist you every step of the way."}
                    </p>
                    <div class="space-y-4">
                        { for CHANNELS.iter().map(|(title, info)| html! {
                            <div class="bg-slate-900/70 border border-orange-500/20 rounded-xl p-4">
                                <p class="font-bold">{ *title }</p>
                                <p class="text-slate-400">{ *info }</p>
                            </div>
                        }) }
                    </div>
                    <div class="bg-gradient-to-r from-orange-500/20 to-red-600/20 rounded-2xl p-6">
                        <h3 class="text-2xl font-bold mb-2">{"Join Our Community"}</h3>
                        <p class="text-slate-300 mb-4">{"Connect with thousands of athletes and participate in exciting tournaments."}</p>
                        <button onclick={on_register} class="px-6 py-2 rounded-full bg-gradient-to-r from-orange-500 to-red-600 font-semibold">
                            {"Register Now"}
                        </button>
                    </div>
                </div>
                <div class="bg-slate-900/70 border border-orange-500/20 rounded-2xl p-8">
                    <h3 class="text-2xl font-bold mb-6">{"Send Us a Message"}</h3>
                    if *submitted {
                        <div class="text-center py-12">
                            <p class="text-5xl mb-4">{"✓"}</p>
                            <p class="text-xl font-bold text-green-400">{"Message Sent!"}</p>
                            <p class="text-slate-400 mt-2">{"Thanks for reaching out. We'll get back to you soon."}</p>
                        </div>
                    } else {
                        <form {onsubmit} class="space-y-5" novalidate=true>
                            <FormField name="name" label="Your Name" value={form.name.clone()} placeholder="John Doe"
                                error={error("name")} on_change={on_change.clone()} />
                            <FormField name="email" label="Email Address" input_type="email" value={form.email.clone()}
                                placeholder="your@email.com" error={error("email")} on_change={on_change.clone()} />
                            <div class="space-y-1">
                                <label for="message" class="block text-sm font-medium text-gray-300">{"Your Message"}</label>
                                <textarea id="message" name="message" rows="5" value={form.message.clone()}
                                    placeholder="Tell us how we can help..." oninput={on_message}
                                    class="w-full px-4 py-3 bg-slate-800/60 border border-slate-700 rounded-xl text-white focus:outline-none focus:border-orange-500"></textarea>
                                if let Some(message) = errors.get("message") {
                                    <p class="text-red-400 text-xs">{ message.to_string() }</p>
                                }
                            </div>
                            <button type="submit" disabled={*loading}
                                class="w-full py-3 rounded-xl bg-gradient-to-r from-orange-500 to-red-600 font-bold disabled:opacity-60">
                                { if *loading { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    }
                    <p class="text-xs text-slate-500 mt-4 text-center">{"We typically respond within 24 hours"}</p>
                </div>
            </section>
        </div>
    }
}
