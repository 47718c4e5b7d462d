//! In-page navigation: smooth scrolling to anchors, scroll-to-top on the
//! logo, and the active nav link highlight.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
    Window,
};

use crate::{
    config::PageConfig,
    dom::{self, Listener},
    error::PageError,
};

/// A section's id and its offset from the top of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: Option<String>,
    pub top: f64,
}

/// The section whose link should be marked active at `scroll_y`.
///
/// Sections are scanned in document order and every one whose top, minus
/// `lookahead`, is at or above the scroll position overwrites the previous
/// pick, so the furthest qualifying section down the page wins.
pub fn active_section(scroll_y: f64, sections: &[SectionOffset], lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - lookahead)
        .last()
        .and_then(|section| section.id.as_deref())
}

/// Whether a link pointing at `fragment` is the active one. With no active
/// section nothing is highlighted, not even a bare `href="#"`.
fn is_active_link(fragment: &str, current: Option<&str>) -> bool {
    current == Some(fragment)
}

fn smooth_scroll_into_view(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_window_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn bind_smooth_scroll(document: &Document, links: &[Element]) -> Result<Vec<Listener>, PageError> {
    links
        .iter()
        .map(|link| {
            let (document, anchor) = (document.clone(), link.clone());
            Listener::new(link, "click", move |event| {
                event.prevent_default();
                // Read on every click: the href may be rewritten after binding.
                let fragment = dom::link_fragment(&anchor);
                if let Some(target) = document.get_element_by_id(&fragment) {
                    smooth_scroll_into_view(&target);
                }
            })
        })
        .collect()
}

fn bind_logo(window: &Window, logo: &Element) -> Result<Listener, PageError> {
    let window = window.clone();
    Listener::new(logo, "click", move |event| {
        event.prevent_default();
        scroll_window_to_top(&window);
    })
}

struct ActiveLinkHighlighter {
    sections: Vec<HtmlElement>,
    links: Vec<Element>,
    lookahead: f64,
    active_border: String,
}

impl ActiveLinkHighlighter {
    fn offsets(&self) -> Vec<SectionOffset> {
        self.sections
            .iter()
            .map(|section| SectionOffset {
                id: section.get_attribute("id"),
                top: f64::from(section.offset_top()),
            })
            .collect()
    }

    fn refresh(&self, scroll_y: f64) {
        let offsets = self.offsets();
        let current = active_section(scroll_y, &offsets, self.lookahead);

        for link in &self.links {
            dom::set_style(link, "border-bottom", "none");
            dom::set_style(link, "padding-bottom", "0px");
            if is_active_link(&dom::link_fragment(link), current) {
                dom::set_style(link, "border-bottom", &self.active_border);
                dom::set_style(link, "padding-bottom", "3px");
            }
        }
    }
}

fn bind_active_highlight(
    window: &Window,
    sections: Vec<Element>,
    links: &[Element],
    config: &PageConfig,
) -> Result<Listener, PageError> {
    let highlighter = Rc::new(ActiveLinkHighlighter {
        sections: sections
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect(),
        links: links.to_vec(),
        lookahead: config.timings.nav_lookahead_px,
        active_border: format!("2px solid {}", config.style.nav_active),
    });

    let scroll_source = window.clone();
    Listener::new(window, "scroll", move |_| {
        let scroll_y = scroll_source.scroll_y().unwrap_or(0.0);
        highlighter.refresh(scroll_y);
    })
}

/// Wire every navigation behavior. Missing optional elements disable the
/// matching behavior only.
pub fn bind(
    window: &Window,
    document: &Document,
    config: &PageConfig,
) -> Result<Vec<Listener>, PageError> {
    let selectors = &config.selectors;
    let links = dom::query_all(document, &selectors.nav_links)?;
    let sections = dom::query_all(document, &selectors.sections)?;

    let mut listeners = bind_smooth_scroll(document, &links)?;
    match dom::query_optional(document, &selectors.logo)? {
        Some(logo) => listeners.push(bind_logo(window, &logo)?),
        None => log::debug!("no logo matched `{}`", selectors.logo),
    }
    listeners.push(bind_active_highlight(window, sections, &links, config)?);

    log::debug!("navigation bound: {} links", links.len());
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::{active_section, is_active_link, SectionOffset};

    fn sections(spec: &[(&str, f64)]) -> Vec<SectionOffset> {
        spec.iter()
            .map(|(id, top)| SectionOffset {
                id: Some(id.to_string()),
                top: *top,
            })
            .collect()
    }

    #[test]
    fn nothing_active_above_first_section() {
        let offsets = sections(&[("about", 600.0), ("projects", 1400.0)]);
        assert_eq!(active_section(0.0, &offsets, 200.0), None);
    }

    #[test]
    fn lookahead_activates_section_early() {
        let offsets = sections(&[("about", 600.0), ("projects", 1400.0)]);
        assert_eq!(active_section(399.0, &offsets, 200.0), None);
        assert_eq!(active_section(400.0, &offsets, 200.0), Some("about"));
        assert_eq!(active_section(1199.0, &offsets, 200.0), Some("about"));
        assert_eq!(active_section(1200.0, &offsets, 200.0), Some("projects"));
    }

    #[test]
    fn last_qualifying_section_wins() {
        // Document order is kept even when offsets are not monotonic.
        let offsets = sections(&[("hero", 0.0), ("contact", 100.0), ("about", 50.0)]);
        assert_eq!(active_section(500.0, &offsets, 200.0), Some("about"));
    }

    #[test]
    fn qualifying_section_without_id_clears_selection() {
        let mut offsets = sections(&[("about", 0.0)]);
        offsets.push(SectionOffset {
            id: None,
            top: 100.0,
        });
        assert_eq!(active_section(500.0, &offsets, 200.0), None);
    }

    #[test]
    fn bare_hash_link_stays_inactive_without_section() {
        assert!(!is_active_link("", None));
        assert!(!is_active_link("about", None));
        assert!(is_active_link("about", Some("about")));
        assert!(!is_active_link("", Some("about")));
    }
}
