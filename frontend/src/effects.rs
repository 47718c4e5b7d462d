//! Cosmetic touches: hover effects, skill clicks, keyframes and the console
//! greeting.

use web_sys::{Document, Element, Window};

use crate::{
    config::PageConfig,
    dom::{self, Listener},
    error::PageError,
    i18n::{
        current::{skills as skill_text, welcome},
        fill_one,
    },
    notification::Notifier,
};

pub const KEYFRAMES: &str = r#"
    @keyframes slideIn {
        from { transform: translateX(400px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }

    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(400px); opacity: 0; }
    }

    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

/// Append the shared keyframes to `<head>`.
pub fn inject_keyframes(document: &Document) -> Result<(), PageError> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(KEYFRAMES));
    let head = document
        .head()
        .ok_or_else(|| PageError::Dom("document has no <head>".to_string()))?;
    head.append_child(&style)?;
    Ok(())
}

fn bind_hover(
    elements: &[Element],
    property: &'static str,
    enter: &str,
    leave: &str,
) -> Result<Vec<Listener>, PageError> {
    let mut listeners = Vec::with_capacity(elements.len() * 2);
    for element in elements {
        let (target, value) = (element.clone(), enter.to_string());
        listeners.push(Listener::new(element, "mouseenter", move |_| {
            dom::set_style(&target, property, &value);
        })?);
        let (target, value) = (element.clone(), leave.to_string());
        listeners.push(Listener::new(element, "mouseleave", move |_| {
            dom::set_style(&target, property, &value);
        })?);
    }
    Ok(listeners)
}

fn bind_skill_clicks(skills: &[Element], notifier: &Notifier) -> Result<Vec<Listener>, PageError> {
    skills
        .iter()
        .map(|skill| {
            let (target, notifier) = (skill.clone(), notifier.clone());
            Listener::new(skill, "click", move |_| {
                let name = target.text_content().unwrap_or_default();
                notifier.success(fill_one(skill_text::SELECTED_TEMPLATE, name));
            })
        })
        .collect()
}

const HEADER_ANIMATION: &str = "fadeIn 0.6s ease-in-out";

/// `document.readyState` once the `load` event has already fired.
fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Fade the header in on `load`, or right away if the page finished loading
/// before the module started.
fn bind_header_fade(
    window: &Window,
    document: &Document,
    header: Element,
) -> Result<Option<Listener>, PageError> {
    if load_already_fired(&document.ready_state()) {
        dom::set_style(&header, "animation", HEADER_ANIMATION);
        return Ok(None);
    }
    let listener = Listener::new(window, "load", move |_| {
        dom::set_style(&header, "animation", HEADER_ANIMATION);
    })?;
    Ok(Some(listener))
}

pub fn bind(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    notifier: &Notifier,
) -> Result<Vec<Listener>, PageError> {
    let selectors = &config.selectors;
    let timeline = dom::query_all(document, &selectors.timeline_items)?;
    let cards = dom::query_all(document, &selectors.project_cards)?;
    let skills = dom::query_all(document, &selectors.skill_items)?;

    let mut listeners = bind_hover(&timeline, "transform", "scale(1.02)", "scale(1)")?;
    listeners.extend(bind_hover(
        &cards,
        "background-color",
        &config.style.card_hover,
        &config.style.card_rest,
    )?);
    listeners.extend(bind_skill_clicks(&skills, notifier)?);
    if let Some(header) = dom::query_optional(document, &selectors.header)? {
        listeners.extend(bind_header_fade(window, document, header)?);
    }
    Ok(listeners)
}

/// Styled greeting in the devtools console.
pub fn log_welcome(config: &PageConfig) {
    let title_css = format!(
        "color: {}; font-size: 20px; font-weight: bold;",
        config.style.welcome_title
    );
    let subtitle_css = format!("color: {}; font-size: 14px;", config.style.welcome_subtitle);
    web_sys::console::log_2(
        &format!("%c{}", welcome::TITLE).into(),
        &title_css.into(),
    );
    web_sys::console::log_2(
        &format!("%c{}", welcome::SUBTITLE).into(),
        &subtitle_css.into(),
    );
}
