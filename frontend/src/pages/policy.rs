use yew::prelude::*;

use crate::components::page_header::PageHeader;

const SECTIONS: &[(&str, &str)] = &[
    (
        "Information We Collect",
        "When you register a team or create an account we collect the details you provide: names, email addresses, phone numbers and postal addresses.",
    ),
    (
        "How We Use It",
        "Your details are used to run tournaments, contact team captains and manage accounts. We do not sell personal information.",
    ),
    (
        "Cookies",
        "We use a session cookie to keep you signed in. Analytics cookies are only set after you accept them on the cookie notice, and you can decline at any time.",
    ),
    (
        "Your Choices",
        "You may request access to or deletion of your data by contacting us. Clearing your browser storage removes your saved consent and session.",
    ),
];

#[function_component(Policy)]
pub fn policy() -> Html {
    html! {
        <div class="bg-slate-950 text-white">
            <PageHeader title="Privacy Policy" description="How Sports Arena handles your information." />
            <section class="max-w-4xl mx-auto px-4 py-16 space-y-10">
                { for SECTIONS.iter().map(|(title, body)| html! {
                    <div>
                        <h2 class="text-2xl font-bold text-orange-400 mb-3">{ *title }</h2>
                        <p class="text-slate-300 leading-relaxed">{ *body }</p>
                    </div>
                }) }
            </section>
        </div>
    }
}
