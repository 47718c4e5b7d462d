//! Dark mode preference.
//!
//! The flag lives in `localStorage` under [`THEME_STORAGE_KEY`]. It is read
//! once before the app mounts so the dark class is on the theme root before
//! any user interaction, and written back on every toggle.

use web_sys::{Element, Storage};

use crate::{
    config::{Selectors, THEME_STORAGE_KEY},
    dom,
    error::js_error_message,
};

/// Minimal string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.set_item(key, value).map_err(|err| js_error_message(&err))
    }
}

pub struct PreferenceStore<S> {
    store: Option<S>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Some(store),
        }
    }

    /// A store with no backing storage: always light, writes are dropped.
    pub fn unavailable() -> Self {
        Self {
            store: None,
        }
    }

    /// `true` only if the stored value is exactly `"true"`.
    pub fn load(&self) -> bool {
        self.store
            .as_ref()
            .and_then(|store| store.get(THEME_STORAGE_KEY))
            .is_some_and(|value| value == "true")
    }

    pub fn save(&self, dark: bool) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        if let Err(err) = store.set(THEME_STORAGE_KEY, if dark { "true" } else { "false" }) {
            log::warn!("failed to persist theme preference: {err}");
        }
    }
}

/// Preference store backed by the window's `localStorage`.
pub fn browser_store() -> PreferenceStore<Storage> {
    match web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
        Some(storage) => PreferenceStore::new(storage),
        None => {
            log::warn!("localStorage unavailable, theme preference will not persist");
            PreferenceStore::unavailable()
        }
    }
}

/// Apply the saved preference to the theme root. Runs before the app mounts.
pub fn apply_saved_theme(selectors: &Selectors) {
    if !browser_store().load() {
        return;
    }
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| dom::query_optional(&doc, &selectors.theme_root).ok().flatten());
    match root {
        Some(root) => set_dark(&root, &selectors.dark_class, true),
        None => log::warn!("theme root `{}` not found", selectors.theme_root),
    }
}

pub fn is_dark(root: &Element, dark_class: &str) -> bool {
    root.class_list().contains(dark_class)
}

fn set_dark(root: &Element, dark_class: &str, dark: bool) {
    let classes = root.class_list();
    let result = if dark {
        classes.add_1(dark_class)
    } else {
        classes.remove_1(dark_class)
    };
    if let Err(err) = result {
        log::warn!("failed to update theme class: {}", js_error_message(&err));
    }
}

/// Flip the dark class on `root` and persist the resulting state.
pub fn toggle<S: KeyValueStore>(root: &Element, dark_class: &str, store: &PreferenceStore<S>) -> bool {
    let next = !is_dark(root, dark_class);
    set_dark(root, dark_class, next);
    let now_dark = is_dark(root, dark_class);
    store.save(now_dark);
    now_dark
}
