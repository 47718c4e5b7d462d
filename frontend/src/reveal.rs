//! Scroll-triggered fade-in.
//!
//! Every observed element goes through `Unrevealed -> Revealed` exactly
//! once. After the first reveal it is unobserved, and the tracker refuses to
//! animate it again even if a late intersection entry still arrives.

use std::{cell::RefCell, rc::Rc};

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{dom, error::PageError};

pub const REVEAL_ANIMATION: &str = "fadeIn 0.6s ease-in-out forwards";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Unrevealed; count],
        }
    }

    /// Feed one visibility observation. Returns `true` when this observation
    /// reveals the element, which happens at most once per element.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Unrevealed) if intersecting => {
                *state = RevealState::Revealed;
                true
            },
            _ => false,
        }
    }

    #[cfg(test)]
    fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Unrevealed)
            .count()
    }
}

/// Options for one observer group.
pub struct RevealOptions<'a> {
    pub threshold: f64,
    pub root_margin: Option<&'a str>,
    /// Start elements at `opacity: 0` so the reveal has something to fade.
    pub hide_initially: bool,
}

/// One `IntersectionObserver` over a fixed set of elements.
pub struct RevealGroup {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealGroup {
    pub fn observe(elements: Vec<Element>, options: &RevealOptions<'_>) -> Result<Self, PageError> {
        let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
        let elements = Rc::new(elements);

        let callback = {
            let tracker = tracker.clone();
            let elements = elements.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = elements.iter().position(|el| *el == target) else {
                        continue;
                    };
                    if tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                        dom::set_style(&target, "animation", REVEAL_ANIMATION);
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for element in elements.iter() {
            if options.hide_initially {
                dom::set_style(element, "opacity", "0");
            }
            observer.observe(element);
        }

        Ok(Self {
            observer,
            tracker,
            _callback: callback,
        })
    }

    pub fn pending(&self) -> usize {
        self.tracker.borrow().pending()
    }
}

impl Drop for RevealGroup {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealState, RevealTracker};

    #[test]
    fn first_visibility_reveals() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert_eq!(tracker.state(0), Some(RevealState::Unrevealed));

        assert!(tracker.observe(0, true));
        assert_eq!(tracker.state(0), Some(RevealState::Revealed));
        assert_eq!(tracker.state(1), Some(RevealState::Unrevealed));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn revealed_element_never_retriggers() {
        let mut tracker = RevealTracker::new(1);
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, false));
        assert!(!tracker.observe(0, true));
        assert_eq!(tracker.state(0), Some(RevealState::Revealed));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(5, true));
        assert_eq!(tracker.state(5), None);
        assert_eq!(tracker.pending(), 1);
    }
}
