//! The page controller: resolves the DOM contract once at startup and owns
//! every listener and observer it installs. Dropping it unbinds the page.

use web_sys::{Document, Element};

use crate::{
    config::{PageConfig, Selectors},
    contact::ContactForm,
    dom::{self, Listener},
    effects,
    error::PageError,
    navigation,
    notification::Notifier,
    reveal::{RevealGroup, RevealOptions},
    theme,
};

/// Elements without which the page cannot work.
struct RequiredElements {
    theme_toggle: Element,
    theme_root: Element,
    contact: ContactForm,
}

impl RequiredElements {
    fn resolve(document: &Document, selectors: &Selectors) -> Result<Self, PageError> {
        Ok(Self {
            theme_toggle: dom::query_required(document, "theme toggle", &selectors.theme_toggle)?,
            theme_root: dom::query_required(document, "theme root", &selectors.theme_root)?,
            contact: ContactForm::resolve(document, selectors)?,
        })
    }
}

pub struct PageController {
    listeners: Vec<Listener>,
    reveals: Vec<RevealGroup>,
}

impl PageController {
    /// Validate the required elements, then bind every behavior. Nothing is
    /// bound if a required element is missing.
    pub fn mount(config: &PageConfig, notifier: Notifier) -> Result<Self, PageError> {
        let window =
            web_sys::window().ok_or_else(|| PageError::Dom("no global `window`".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Dom("window has no document".to_string()))?;

        let required = RequiredElements::resolve(&document, &config.selectors)?;
        effects::inject_keyframes(&document)?;

        let mut listeners = vec![
            bind_theme_toggle(&required, &config.selectors)?,
            required.contact.bind(notifier.clone())?,
        ];
        listeners.extend(navigation::bind(&window, &document, config)?);
        listeners.extend(effects::bind(&window, &document, config, &notifier)?);

        let reveals = bind_reveals(&document, config)?;
        effects::log_welcome(config);

        let controller = Self {
            listeners,
            reveals,
        };
        log::info!(
            "page bound: {} listeners, {} elements awaiting reveal",
            controller.listeners.len(),
            controller.reveals.iter().map(RevealGroup::pending).sum::<usize>()
        );
        Ok(controller)
    }
}

fn bind_theme_toggle(required: &RequiredElements, selectors: &Selectors) -> Result<Listener, PageError> {
    let root = required.theme_root.clone();
    let dark_class = selectors.dark_class.clone();
    let store = theme::browser_store();
    Listener::new(&required.theme_toggle, "click", move |_| {
        let dark = theme::toggle(&root, &dark_class, &store);
        log::debug!("theme toggled, dark = {dark}");
    })
}

fn bind_reveals(document: &Document, config: &PageConfig) -> Result<Vec<RevealGroup>, PageError> {
    let timings = &config.timings;
    let sections = RevealGroup::observe(
        dom::query_all(document, &config.selectors.sections)?,
        &RevealOptions {
            threshold: timings.reveal_threshold,
            root_margin: Some(timings.section_root_margin.as_str()),
            hide_initially: true,
        },
    )?;
    let timeline = RevealGroup::observe(
        dom::query_all(document, &config.selectors.timeline_items)?,
        &RevealOptions {
            threshold: timings.reveal_threshold,
            root_margin: None,
            hide_initially: false,
        },
    )?;
    Ok(vec![sections, timeline])
}
