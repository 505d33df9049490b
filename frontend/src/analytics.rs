//! Consent-gated Google Analytics.
//!
//! Nothing is loaded or sent unless the visitor accepted cookies and the build
//! carries a measurement id. Calls go through `window.gtag`, installed here on
//! first initialisation.

use js_sys::{Array, Function, Object, Reflect};
use log::{debug, warn};
use shared::models::consent::analytics_allowed;
use std::cell::Cell;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::Config;
use crate::storage::session_store;

thread_local! {
    static INITIALIZED: Cell<bool> = Cell::new(false);
}

/// Why analytics did or did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Started,
    AlreadyStarted,
    NoConsent,
    NotConfigured,
    Failed,
}

/// Decides whether initialisation may proceed, without touching the page.
pub fn init_precheck(already: bool, user_consent: Option<&str>, measurement_id: Option<&str>) -> Option<InitOutcome> {
    if already {
        Some(InitOutcome::AlreadyStarted)
    } else if !analytics_allowed(user_consent) {
        Some(InitOutcome::NoConsent)
    } else if measurement_id.is_none() {
        Some(InitOutcome::NotConfigured)
    } else {
        None
    }
}

/// Hits are sent only after initialisation and while consent still stands.
pub fn should_track(initialized: bool, user_consent: Option<&str>) -> bool {
    initialized && analytics_allowed(user_consent)
}

fn stored_consent() -> Option<String> {
    session_store().user_consent()
}

pub fn is_initialized() -> bool {
    INITIALIZED.with(Cell::get)
}

pub fn init() -> InitOutcome {
    let consent = stored_consent();
    let measurement_id = Config::ga_measurement_id();
    if let Some(outcome) = init_precheck(is_initialized(), consent.as_deref(), measurement_id) {
        debug!("Analytics not started: {:?}", outcome);
        return outcome;
    }
    let Some(id) = measurement_id else {
        return InitOutcome::NotConfigured;
    };
    match install(id) {
        Ok(()) => {
            INITIALIZED.with(|flag| flag.set(true));
            debug!("Google Analytics initialized");
            InitOutcome::Started
        }
        Err(e) => {
            warn!("Google Analytics initialization failed: {:?}", e);
            InitOutcome::Failed
        }
    }
}

/// Forgets initialisation, for when consent is withdrawn.
pub fn reset() {
    INITIALIZED.with(|flag| flag.set(false));
    debug!("Analytics reset");
}

pub fn track_page_view(path: &str) {
    if !should_track(is_initialized(), stored_consent().as_deref()) {
        return;
    }
    let params = Object::new();
    let _ = Reflect::set(&params, &"page_path".into(), &path.into());
    call_gtag(&["event".into(), "page_view".into(), params.into()]);
}

pub fn track_event(category: &str, action: &str, label: &str) {
    if !should_track(is_initialized(), stored_consent().as_deref()) {
        return;
    }
    let params = Object::new();
    let _ = Reflect::set(&params, &"event_category".into(), &category.into());
    let _ = Reflect::set(&params, &"event_label".into(), &label.into());
    call_gtag(&["event".into(), action.into(), params.into()]);
}

pub fn track_button_click(button: &str, location: &str) {
    track_event("Button", "Click", &format!("{} - {}", button, location));
}

fn install(id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let script = document.create_element("script")?;
    script.set_attribute("async", "")?;
    script.set_attribute(
        "src",
        &format!("https://www.googletagmanager.com/gtag/js?id={}", urlencoding::encode(id)),
    )?;
    if let Some(head) = document.query_selector("head")? {
        head.append_child(&script)?;
    }

    let gtag = Function::new_no_args(
        "window.dataLayer = window.dataLayer || []; window.dataLayer.push(arguments);",
    );
    Reflect::set(&window, &"gtag".into(), &gtag)?;

    call_gtag(&["js".into(), js_sys::Date::new_0().into()]);
    let options = Object::new();
    Reflect::set(&options, &"send_page_view".into(), &JsValue::FALSE)?;
    Reflect::set(&options, &"anonymize_ip".into(), &JsValue::TRUE)?;
    Reflect::set(&options, &"cookie_flags".into(), &"SameSite=None;Secure".into())?;
    call_gtag(&["config".into(), id.into(), options.into()]);
    Ok(())
}

fn call_gtag(args: &[JsValue]) {
    let Some(window) = web_sys::window() else { return };
    let Ok(gtag) = Reflect::get(&window, &"gtag".into()) else { return };
    let Some(gtag) = gtag.dyn_ref::<Function>() else { return };
    let array: Array = args.iter().collect();
    if let Err(e) = gtag.apply(&JsValue::NULL, &array) {
        warn!("gtag call failed: {:?}", e);
    }
}
