//! Browser-backed [`SessionStorage`]: `document.cookie` plus `localStorage`.

use gloo_storage::{LocalStorage, Storage};
use log::warn;
use shared::storage::{cookie_assignment, expired_cookie, parse_cookie, SessionStorage, SessionStore};
use shared::{Result, SharedError};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

impl SessionStorage for BrowserStorage {
    fn read_cookie(&self, name: &str) -> Option<String> {
        let header = html_document()?.cookie().ok()?;
        parse_cookie(&header, name)
    }

    fn write_cookie(&self, name: &str, value: &str, max_age_secs: i64) {
        if let Some(document) = html_document() {
            if let Err(e) = document.set_cookie(&cookie_assignment(name, value, max_age_secs)) {
                warn!("Failed to write cookie {}: {:?}", name, e);
            }
        }
    }

    fn remove_cookie(&self, name: &str) {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&expired_cookie(name));
        }
    }

    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| SharedError::Storage(format!("{}: {:?}", key, e)))
    }

    fn remove_item(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

/// The session store every component reads and writes through.
pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
