use gloo_timers::callback::Timeout;
use log::{error, info};
use shared::forms::organizer::OrganizerForm;
use shared::{FieldErrors, SharedError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::organizers::{self, AddOrganizerError};
use crate::components::common_toast::{use_toast, Toast};
use crate::components::form_field::FormField;
use crate::PanelRoute;

pub const FIX_ERRORS_MESSAGE: &str = "Please fix all errors before submitting";
pub const ADDED_MESSAGE: &str = "Organizor added successfully!";
const RETURN_DELAY_MS: u32 = 1_500;

/// Toast text for a rejected add-organizer request.
pub fn add_failure_message(error: &SharedError) -> String {
    match error {
        SharedError::Network(_) => "Unable to connect to server. Please check your connection.".to_string(),
        e if e.status().is_some() => e
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| "Failed to add organizor".to_string()),
        _ => "An unexpected error occurred. Please try again.".to_string(),
    }
}

const FIELDS: &[(&str, &str, &str, &str)] = &[
    ("name", "Organizor Name", "text", "Enter organizor name"),
    ("email", "Email Address", "email", "organizor@example.com"),
    ("contact", "Contact Number", "tel", "+92 300 1234567"),
    ("streetAddress", "Street Address", "text", "Enter complete street address"),
    ("state", "State", "text", "Enter state"),
    ("zipCode", "Zip Code", "text", "Enter zip code"),
    ("password", "Password", "password", "Create a strong password"),
];

fn field_value<'a>(form: &'a OrganizerForm, name: &str) -> &'a str {
    match name {
        "name" => &form.name,
        "email" => &form.email,
        "contact" => &form.contact,
        "streetAddress" => &form.street_address,
        "state" => &form.state,
        "zipCode" => &form.zip_code,
        "password" => &form.password,
        _ => "",
    }
}

#[function_component(AddOrganizer)]
pub fn add_organizer() -> Html {
    let navigator = use_navigator().expect("AddOrganizer rendered outside a router");
    let toast = use_toast();
    let form = use_state(OrganizerForm::default);
    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);

    let on_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |(name, value): (String, String)| {
            let mut next = (*form).clone();
            let mut remaining = (*errors).clone();
            next.set_field(&name, value, &mut remaining);
            form.set(next);
            errors.set(remaining);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.to_request() {
                Ok(request) => request,
                Err(found) => {
                    errors.set(found);
                    toast.emit(Toast::error(FIX_ERRORS_MESSAGE));
                    return;
                }
            };
            submitting.set(true);
            let form = form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match organizers::add(&request).await {
                    Ok(response) => {
                        info!("Organizer {} added", request.email);
                        let message = response
                            .message
                            .filter(|m| !m.trim().is_empty())
                            .unwrap_or_else(|| ADDED_MESSAGE.to_string());
                        toast.emit(Toast::success(message));
                        form.set(OrganizerForm::default());
                        errors.set(FieldErrors::new());
                        Timeout::new(RETURN_DELAY_MS, move || navigator.push(&PanelRoute::Organizers))
                            .forget();
                    }
                    Err(AddOrganizerError { error: e, fields }) => {
                        error!("Failed to add organizer: {}", e);
                        if !fields.is_empty() {
                            errors.set(fields);
                        }
                        toast.emit(Toast::error(add_failure_message(&e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| navigator.push(&PanelRoute::Organizers));

    html! {
        <div class="max-w-3xl">
            <button onclick={on_back} class="text-orange-400 hover:text-orange-300 mb-6">{"← Back to Organizors"}</button>
            <h1 class="text-3xl font-bold mb-2">{"Add New Organizor"}</h1>
            <p class="text-gray-400 mb-8">{"Fill in the details to register a new event organizor"}</p>
            <form {onsubmit} class="bg-[#1a2235]/60 border border-orange-500/10 rounded-2xl p-8 grid md:grid-cols-2 gap-6">
                { for FIELDS.iter().map(|(name, label, input_type, placeholder)| html! {
                    <FormField
                        name={*name}
                        label={*label}
                        input_type={*input_type}
                        placeholder={*placeholder}
                        value={field_value(&form, name).to_string()}
                        error={errors.get(name).map(|m| AttrValue::from(m.to_string()))}
                        disabled={*submitting}
                        on_change={on_change.clone()}
                    />
                }) }
                <div class="md:col-span-2">
                    <button type="submit" disabled={*submitting}
                        class="w-full py-3 rounded-xl font-semibold bg-gradient-to-r from-orange-500 to-red-500 disabled:opacity-50">
                        { if *submitting { "Adding Organizor..." } else { "Add Organizor" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
