use log::{debug, warn};
use shared::forms::rules::strength_label;
use shared::forms::signup::{SignupForm, SignupStep, SIGNUP_ROLES};
use shared::{FieldErrors, SharedError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics;
use crate::api::auth;
use crate::components::form_field::FormField;
use crate::Route;

const GENERAL: &str = "general";

/// Banner text for a failed registration.
pub fn registration_failure(error: &SharedError) -> String {
    match error {
        SharedError::Validation(message) if !message.trim().is_empty() => message.clone(),
        _ => "Registration failed. Please try again.".to_string(),
    }
}

fn strength_color(score: u8) -> &'static str {
    match score {
        0 | 1 => "bg-red-500",
        2 => "bg-yellow-500",
        3 => "bg-blue-500",
        _ => "bg-green-500",
    }
}

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    let navigator = use_navigator().expect("SignUp rendered outside a router");
    let form = use_state(SignupForm::default);
    let errors = use_state(FieldErrors::new);
    let step = use_state(SignupStep::default);
    let submitting = use_state(|| false);
    let success = use_state(|| false);

    // Per-field validation as the user types
    let on_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |(name, value): (String, String)| {
            let mut next = (*form).clone();
            next.set_field(&name, value);
            let mut found = (*errors).clone();
            found.remove(&name);
            found.remove(GENERAL);
            if let Some(message) = next.validate_field(&name) {
                found.insert(name, message);
            }
            errors.set(found);
            form.set(next);
        })
    };

    let on_role = {
        let on_change = on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(("role".to_string(), select.value()));
        })
    };

    let on_terms = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let next = SignupForm { accepted_terms: input.checked(), ..(*form).clone() };
            let mut found = (*errors).clone();
            found.remove("acceptedTerms");
            if let Some(message) = next.validate_field("acceptedTerms") {
                found.insert("acceptedTerms", message);
            }
            errors.set(found);
            form.set(next);
        })
    };

    let on_next = {
        let form = form.clone();
        let errors = errors.clone();
        let step = step.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let found = form.validate_step(SignupStep::Account);
            if found.is_empty() {
                step.set(SignupStep::Address);
            } else {
                let mut merged = (*errors).clone();
                merged.extend(found);
                errors.set(merged);
            }
        })
    };

    let on_back = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.set(SignupStep::Account))
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let step = step.clone();
        let submitting = submitting.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.to_request() {
                Ok(request) => request,
                Err(found) => {
                    if !form.validate_step(SignupStep::Account).is_empty() {
                        step.set(SignupStep::Account);
                    }
                    errors.set(found);
                    return;
                }
            };
            submitting.set(true);
            errors.set(FieldErrors::new());
            let errors = errors.clone();
            let submitting = submitting.clone();
            let success = success.clone();
            spawn_local(async move {
                match auth::create_user(&request).await {
                    Ok(_) => {
                        debug!("Account created for {}", request.email);
                        analytics::track_event("Auth", "Sign Up", request.role.as_str());
                        success.set(true);
                    }
                    Err(e) => {
                        warn!("Registration failed: {}", e);
                        let mut found = FieldErrors::new();
                        found.insert(GENERAL, registration_failure(&e));
                        errors.set(found);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let to_login = Callback::from(move |_: MouseEvent| navigator.push(&Route::Login));

    if *success {
        return html! {
            <div class="min-h-screen bg-slate-950 flex items-center justify-center px-4">
                <div class="max-w-md w-full text-center bg-slate-900/80 border border-green-500/30 rounded-3xl p-8 text-white">
                    <p class="text-6xl mb-4">{"🏆"}</p>
                    <h2 class="text-3xl font-black mb-2">{"Account Created!"}</h2>
                    <p class="text-slate-400 mb-8">{"Welcome to Sports Arena. Sign in to start competing."}</p>
                    <button onclick={to_login} class="w-full py-3 rounded-xl bg-gradient-to-r from-orange-500 to-red-600 font-bold">
                        {"Go to Login"}
                    </button>
                </div>
            </div>
        };
    }

    let error = |field: &str| errors.get(field).map(|m| AttrValue::from(m.to_string()));
    let score = form.password_strength();
    let can_continue = form.can_continue();

    let account_step = html! {
        <>
            <FormField name="name" label="Full Name" value={form.name.clone()} placeholder="John Doe"
                error={error("name")} on_change={on_change.clone()} />
            <FormField name="email" label="Email" input_type="email" value={form.email.clone()} placeholder="you@example.com"
                error={error("email")} on_change={on_change.clone()} />
            <div class="space-y-1">
                <label for="role" class="block text-sm font-medium text-gray-300">{"Account Type"}</label>
                <select id="role" onchange={on_role}
                    class="w-full px-4 py-3 bg-slate-800/60 border border-slate-700 rounded-xl text-white">
                    { for SIGNUP_ROLES.iter().map(|role| html! {
                        <option value={role.as_str()} selected={*role == form.role}>{ role.label() }</option>
                    }) }
                </select>
            </div>
            <FormField name="password" label="Password" input_type="password" value={form.password.clone()}
                error={error("password")} on_change={on_change.clone()} />
            if !form.password.is_empty() {
                <div class="space-y-1">
                    <div class="flex gap-1">
                        { for (0..4u8).map(|i| html! {
                            <div class={classes!("h-1.5", "flex-1", "rounded-full",
                                if i < score { strength_color(score) } else { "bg-slate-700" })}></div>
                        }) }
                    </div>
                    <p class="text-xs text-slate-400">{ format!("Strength: {}", strength_label(score)) }</p>
                </div>
            }
            <FormField name="confirmPassword" label="Confirm Password" input_type="password" value={form.confirm_password.clone()}
                error={error("confirmPassword")} on_change={on_change.clone()} />
            <button type="button" onclick={on_next} disabled={!can_continue}
                class="w-full py-3 rounded-xl bg-gradient-to-r from-orange-500 to-red-600 text-white font-bold disabled:opacity-50">
                {"Continue"}
            </button>
        </>
    };

    let address_step = html! {
        <>
            <FormField name="streetAddress" label="Street Address" value={form.street_address.clone()} placeholder="123 Main St"
                error={error("streetAddress")} on_change={on_change.clone()} />
            <FormField name="state" label="State" value={form.state.clone()}
                error={error("state")} on_change={on_change.clone()} />
            <FormField name="zipcode" label="Zipcode" value={form.zipcode.clone()} placeholder="54000"
                error={error("zipcode")} on_change={on_change.clone()} />
            <div class="space-y-1">
                <label class="flex items-center gap-2 text-sm text-gray-300">
                    <input type="checkbox" name="acceptedTerms" checked={form.accepted_terms} onchange={on_terms} />
                    {"I agree to the Terms of Service"}
                </label>
                if let Some(message) = errors.get("acceptedTerms") {
                    <p class="text-red-400 text-xs">{ message.to_string() }</p>
                }
            </div>
            <div class="flex gap-3">
                <button type="button" onclick={on_back}
                    class="flex-1 py-3 rounded-xl border border-white/20 text-white">{"Back"}</button>
                <button type="submit" disabled={*submitting}
                    class="flex-1 py-3 rounded-xl bg-gradient-to-r from-orange-500 to-red-600 text-white font-bold disabled:opacity-60">
                    { if *submitting { "Creating..." } else { "Create Account" } }
                </button>
            </div>
        </>
    };

    let (title, subtitle) = match *step {
        SignupStep::Account => ("Create Account", "Fill in your details"),
        SignupStep::Address => ("Your Address", "Location information"),
    };

    html! {
        <div class="min-h-screen bg-slate-950 flex items-center justify-center px-4 py-12">
            <div class="w-full max-w-md bg-slate-900/80 border border-orange-500/20 rounded-3xl p-8 shadow-2xl">
                <p class="text-xs text-orange-400 font-semibold mb-2">{ format!("Step {} of 2", step.number()) }</p>
                <h2 class="text-3xl font-black text-white">{ title }</h2>
                <p class="text-slate-400 mb-6">{ subtitle }</p>
                if let Some(message) = errors.get(GENERAL) {
                    <div class="mb-4 p-3 rounded-xl bg-red-500/20 border border-red-500 text-red-300 text-sm" role="alert">
                        { message.to_string() }
                    </div>
                }
                <form {onsubmit} class="space-y-5" novalidate=true>
                    { match *step {
                        SignupStep::Account => account_step,
                        SignupStep::Address => address_step,
                    } }
                </form>
                <p class="text-slate-400 text-sm text-center mt-6">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes={classes!("text-orange-400", "font-semibold", "hover:underline")}>
                        {"Login"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
