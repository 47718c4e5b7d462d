//! Thin helpers over `web-sys` shared by the page controller.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::error::{js_error_message, PageError};

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, PageError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn query_optional(document: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    document
        .query_selector(selector)
        .map_err(|err| invalid_selector(selector, &err))
}

pub fn query_required(
    document: &Document,
    role: &'static str,
    selector: &str,
) -> Result<Element, PageError> {
    query_optional(document, selector)?.ok_or_else(|| PageError::missing(role, selector))
}

/// All matches in document order. An empty result is not an error.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| invalid_selector(selector, &err))?;
    Ok((0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn invalid_selector(selector: &str, err: &wasm_bindgen::JsValue) -> PageError {
    PageError::InvalidSelector {
        selector: selector.to_string(),
        reason: js_error_message(err),
    }
}

/// Set an inline style property. Elements that are not `HtmlElement`s are
/// left alone.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(err) = html.style().set_property(property, value) {
            log::warn!("failed to set {property} on element: {}", js_error_message(&err));
        }
    }
}

/// Fragment named by an anchor's `href`, i.e. everything after its first
/// character (`"#about"` -> `"about"`).
pub fn href_fragment(href: &str) -> &str {
    href.char_indices().nth(1).map_or("", |(idx, _)| &href[idx..])
}

pub fn link_fragment(link: &Element) -> String {
    link.get_attribute("href")
        .map(|href| href_fragment(&href).to_string())
        .unwrap_or_default()
}
