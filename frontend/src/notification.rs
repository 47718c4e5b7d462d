//! Transient alert banner state.
//!
//! At most one notification exists. `Show` replaces the current one and
//! assigns a fresh id; the dismissal timers carry that id, so a timer that
//! outlives its notification finds a different id and does nothing.

use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
    next_id: u64,
}

pub enum NotificationAction {
    Show {
        message: String,
        kind: NotificationKind,
    },
    /// Start the exit transition of notification `id`.
    BeginExit(u64),
    Remove(u64),
}

impl NotificationState {
    fn is_current(&self, id: u64) -> bool {
        self.current.as_ref().is_some_and(|current| current.id == id)
    }
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Show {
                message,
                kind,
            } => {
                let id = self.next_id;
                Rc::new(Self {
                    current: Some(Notification {
                        id,
                        message,
                        kind,
                        phase: NotificationPhase::Entering,
                    }),
                    next_id: id.wrapping_add(1),
                })
            },
            NotificationAction::BeginExit(id) if self.is_current(id) => {
                let mut next = (*self).clone();
                if let Some(current) = next.current.as_mut() {
                    current.phase = NotificationPhase::Leaving;
                }
                Rc::new(next)
            },
            NotificationAction::Remove(id) if self.is_current(id) => Rc::new(Self {
                current: None,
                next_id: self.next_id,
            }),
            NotificationAction::BeginExit(_) | NotificationAction::Remove(_) => self,
        }
    }
}

/// Handle the page controller uses to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatch: Callback<NotificationAction>,
}

impl Notifier {
    pub fn new(dispatch: Callback<NotificationAction>) -> Self {
        Self {
            dispatch,
        }
    }

    pub fn from_reducer(state: &UseReducerHandle<NotificationState>) -> Self {
        let dispatcher = state.dispatcher();
        Self::new(Callback::from(move |action| dispatcher.dispatch(action)))
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        self.dispatch.emit(NotificationAction::Show {
            message: message.into(),
            kind,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(state: Rc<NotificationState>, message: &str) -> Rc<NotificationState> {
        state.reduce(NotificationAction::Show {
            message: message.to_string(),
            kind: NotificationKind::Success,
        })
    }

    #[test]
    fn second_show_replaces_first() {
        let state = show(Rc::new(NotificationState::default()), "first");
        let first_id = state.current.as_ref().map(|n| n.id).expect("first shown");

        let state = show(state, "second");
        let current = state.current.as_ref().expect("second shown");
        assert_eq!(current.message, "second");
        assert_ne!(current.id, first_id);
        assert_eq!(current.phase, NotificationPhase::Entering);
    }

    #[test]
    fn timers_for_current_notification_exit_then_remove() {
        let state = show(Rc::new(NotificationState::default()), "hello");
        let id = state.current.as_ref().map(|n| n.id).expect("shown");

        let state = state.reduce(NotificationAction::BeginExit(id));
        assert_eq!(
            state.current.as_ref().map(|n| n.phase),
            Some(NotificationPhase::Leaving)
        );

        let state = state.reduce(NotificationAction::Remove(id));
        assert!(state.current.is_none());
    }

    #[test]
    fn stale_timers_are_ignored() {
        let state = show(Rc::new(NotificationState::default()), "first");
        let stale = state.current.as_ref().map(|n| n.id).expect("first shown");
        let state = show(state, "second");

        let after_exit = state.clone().reduce(NotificationAction::BeginExit(stale));
        assert!(Rc::ptr_eq(&state, &after_exit));

        let after_remove = after_exit.reduce(NotificationAction::Remove(stale));
        let current = after_remove.current.as_ref().expect("second still shown");
        assert_eq!(current.message, "second");
        assert_eq!(current.phase, NotificationPhase::Entering);
    }

    #[test]
    fn remove_on_empty_state_is_a_noop() {
        let state = Rc::new(NotificationState::default());
        let after = state.clone().reduce(NotificationAction::Remove(0));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn notifier_emits_show_actions() {
        let received = Rc::new(std::cell::RefCell::new(Vec::new()));
        let notifier = {
            let received = received.clone();
            Notifier::new(Callback::from(move |action| {
                if let NotificationAction::Show {
                    message,
                    kind,
                } = action
                {
                    received.borrow_mut().push((message, kind));
                }
            }))
        };

        notifier.error("bad");
        notifier.success("good");
        assert_eq!(
            *received.borrow(),
            vec![
                ("bad".to_string(), NotificationKind::Error),
                ("good".to_string(), NotificationKind::Success),
            ]
        );
    }
}
