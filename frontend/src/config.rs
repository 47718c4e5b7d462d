//! Page configuration: the selectors the enhancer binds to, the colors it
//! paints with and the timings of its animations.
//!
//! Every field has a default matching the stock portfolio markup. A page may
//! override any subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "style": { "nav_active": "#ff6600" } }
//! </script>
//! ```

use serde::Deserialize;
use web_sys::Document;

use crate::error::PageError;

/// Id of the optional `<script>` element carrying a JSON override.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Id of the element the notification banner renders into.
pub const NOTIFICATION_HOST_ID: &str = "portfolio-notifications";

/// Key under which the theme preference is persisted in `localStorage`.
pub const THEME_STORAGE_KEY: &str = "darkMode";

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub style: StyleTokens,
    pub timings: Timings,
}

/// CSS selectors for every element the enhancer touches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub theme_root: String,
    pub dark_class: String,
    pub contact_form: String,
    pub name_field: String,
    pub email_field: String,
    pub message_field: String,
    pub nav_links: String,
    pub sections: String,
    pub timeline_items: String,
    pub skill_items: String,
    pub project_cards: String,
    pub logo: String,
    pub header: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#darkModeToggle".to_string(),
            theme_root: "body".to_string(),
            dark_class: "dark-mode".to_string(),
            contact_form: "#contactForm".to_string(),
            name_field: "#name".to_string(),
            email_field: "#email".to_string(),
            message_field: "#message".to_string(),
            nav_links: ".nav-link".to_string(),
            sections: ".section".to_string(),
            timeline_items: ".timeline-item".to_string(),
            skill_items: ".skill-list li".to_string(),
            project_cards: ".project-card".to_string(),
            logo: ".logo".to_string(),
            header: ".header".to_string(),
        }
    }
}

/// Named colors. The stock markup ships two near-identical palettes; both
/// are expressible by overriding these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleTokens {
    pub success: String,
    pub error: String,
    pub nav_active: String,
    pub card_hover: String,
    pub card_rest: String,
    pub welcome_title: String,
    pub welcome_subtitle: String,
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self {
            success: "#063108".to_string(),
            error: "#093b07".to_string(),
            nav_active: "#07360b".to_string(),
            card_hover: "#f0f0f0".to_string(),
            card_rest: "var(--light-bg)".to_string(),
            welcome_title: "#0c4b19".to_string(),
            welcome_subtitle: "#0c4919".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// How long a notification stays before its exit transition starts.
    pub notification_visible_ms: u32,
    pub notification_exit_ms: u32,
    /// Look-ahead applied to section offsets when picking the active link.
    pub nav_lookahead_px: f64,
    pub reveal_threshold: f64,
    pub section_root_margin: String,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_visible_ms: 4000,
            notification_exit_ms: 300,
            nav_lookahead_px: 200.0,
            reveal_threshold: 0.1,
            section_root_margin: "0px 0px -100px 0px".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the embedded override, falling back to defaults when the page
    /// carries none.
    pub fn from_document(document: &Document) -> Result<Self, PageError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    /// Like [`PageConfig::from_document`], but a malformed override is logged
    /// and replaced by the defaults.
    pub fn load_or_default() -> Self {
        let Some(document) = web_sys::window().and_then(|win| win.document()) else {
            return Self::default();
        };
        match Self::from_document(&document) {
            Ok(config) => config,
            Err(err) => {
                log::error!("ignoring page config override: {err}");
                Self::default()
            }
        }
    }
}
