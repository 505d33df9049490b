use gloo_timers::callback::Timeout;
use log::{debug, error};
use shared::forms::apply::ApplicationForm;
use shared::{FieldErrors, LoadState, Tournament};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::analytics;
use crate::api::tournaments;
use crate::components::form_field::FormField;

const SUCCESS_VISIBLE_MS: u32 = 5_000;
pub const SUBMIT_FAILED: &str = "Failed to submit application. Please try again.";

#[function_component(Apply)]
pub fn apply() -> Html {
    let options = use_state(LoadState::<Vec<Tournament>>::default);
    let form = use_state(ApplicationForm::default);
    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let success = use_state(|| false);
    let submit_error = use_state(|| None::<String>);

    {
        let options = options.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = tournaments::all().await;
                if let Err(e) = &result {
                    error!("Failed to load tournaments for the application form: {}", e);
                }
                options.set(LoadState::from_result(result.map_err(|e| e.user_message())));
            });
            || ()
        });
    }

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

    let on_select = {
        let on_change = on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(("tournamentId".to_string(), select.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let success = success.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (tournament_id, request) = match form.to_request() {
                Ok(parts) => parts,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            submitting.set(true);
            submit_error.set(None);
            let form = form.clone();
            let submitting = submitting.clone();
            let success = success.clone();
            let submit_error = submit_error.clone();
            spawn_local(async move {
                match tournaments::apply(&tournament_id, &request).await {
                    Ok(_) => {
                        debug!("Application accepted for {}", tournament_id);
                        analytics::track_event("Tournament", "Apply", &tournament_id);
                        form.set(ApplicationForm::default());
                        success.set(true);
                        Timeout::new(SUCCESS_VISIBLE_MS, move || success.set(false)).forget();
                    }
                    Err(e) => {
                        error!("Application failed: {}", e);
                        submit_error.set(Some(SUBMIT_FAILED.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let error = |field: &str| errors.get(field).map(|m| AttrValue::from(m.to_string()));
    let picker_disabled = options.is_loading();

    html! {
        <div class="min-h-screen bg-slate-950 text-white px-4 py-24">
            <div class="max-w-2xl mx-auto bg-slate-900/70 border border-orange-500/20 rounded-3xl p-8 shadow-2xl">
                <h1 class="text-4xl font-black text-center mb-8 bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 bg-clip-text text-transparent">
                    {"Join the Battle"}
                </h1>
                if *success {
                    <div class="mb-6 p-4 rounded-xl bg-green-500/20 border border-green-500 text-green-300 text-center font-semibold">
                        {"🎉 Application submitted successfully!"}
                    </div>
                }
                if let Some(message) = &*submit_error {
                    <div class="mb-6 p-4 rounded-xl bg-red-500/20 border border-red-500 text-red-300 text-center">
                        { message }
                    </div>
                }
                <form {onsubmit} class="space-y-5" novalidate=true>
                    <div class="space-y-1">
                        <label for="tournamentId" class="block text-sm font-medium text-gray-300">{"Select Tournament *"}</label>
                        <select id="tournamentId" name="tournamentId" onchange={on_select} disabled={picker_disabled}
                            class="w-full px-4 py-3 bg-slate-800/60 border border-slate-700 rounded-xl text-white">
                            <option value="" selected={form.tournament_id.is_empty()}>
                                { if picker_disabled { "Loading tournaments..." } else { "Choose a tournament" } }
                            </option>
                            { for options.data().into_iter().flatten().map(|t| html! {
                                <option value={t.id.clone()} selected={t.id == form.tournament_id}>{ &t.title }</option>
                            }) }
                        </select>
                        if let Some(message) = options.error() {
                            <p class="text-yellow-400 text-xs">{ message.to_string() }</p>
                        }
                        if let Some(message) = errors.get("tournamentId") {
                            <p class="text-red-400 text-xs">{ message.to_string() }</p>
                        }
                    </div>
                    <FormField name="teamName" label="Team Name *" value={form.team_name.clone()}
                        placeholder="Enter your team name" error={error("teamName")} on_change={on_change.clone()} />
                    <FormField name="captainName" label="Captain Name *" value={form.captain_name.clone()}
                        placeholder="Full name" error={error("captainName")} on_change={on_change.clone()} />
                    <FormField name="captainEmail" label="Captain Email *" input_type="email" value={form.captain_email.clone()}
                        placeholder="captain@example.com" error={error("captainEmail")} on_change={on_change.clone()} />
                    <FormField name="captainPhone" label="Captain Phone *" input_type="tel" value={form.captain_phone.clone()}
                        placeholder="+1234567890" error={error("captainPhone")} on_change={on_change} />
                    <button type="submit" disabled={*submitting}
                        class="w-full py-4 rounded-xl bg-gradient-to-r from-red-500 via-orange-500 to-yellow-500 font-bold text-lg disabled:opacity-60">
                        { if *submitting { "Submitting..." } else { "Submit Application" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
