//! Contact form validation. Nothing is sent anywhere: a valid submission is
//! acknowledged with a success notification and the form is cleared.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::{
    config::Selectors,
    dom::{self, Listener},
    error::PageError,
    i18n::{current::contact as t, fill_one},
    notification::Notifier,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// ECMAScript `WhiteSpace` and `LineTerminator`: the set both `\s` and
/// `String.prototype.trim` use. Differs from Unicode `White_Space` on
/// U+FEFF (included here) and U+0085 (excluded here).
pub fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim_field(value: &str) -> String {
    value.trim_matches(is_js_whitespace).to_string()
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: trim_field(name),
            email: trim_field(email),
            message: trim_field(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", t::MISSING_NAME)]
    MissingName,
    #[error("{}", t::INVALID_EMAIL)]
    InvalidEmail,
    #[error("{}", t::MISSING_MESSAGE)]
    MissingMessage,
}

/// `local@domain.tld` with no whitespace and no extra `@` in any part,
/// equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have at least one char on each side.
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

/// Checks run in order and the first failure wins.
pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationError> {
    if submission.name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if submission.message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

/// Validate and report through `notifier`. Returns whether the form should be
/// cleared.
pub fn submit(submission: &ContactSubmission, notifier: &Notifier) -> bool {
    match validate(submission) {
        Ok(()) => {
            notifier.success(fill_one(t::SENT_TEMPLATE, &submission.name));
            true
        },
        Err(err) => {
            log::debug!("contact form rejected: {err:?}");
            notifier.error(err.to_string());
            false
        },
    }
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        field.text_content().unwrap_or_default()
    }
}

fn clear_field(field: &Element) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value("");
    }
}

/// The bound form. All elements are resolved at startup.
pub struct ContactForm {
    form: Element,
    name: Element,
    email: Element,
    message: Element,
}

impl ContactForm {
    pub fn resolve(document: &Document, selectors: &Selectors) -> Result<Self, PageError> {
        Ok(Self {
            form: dom::query_required(document, "contact form", &selectors.contact_form)?,
            name: dom::query_required(document, "name field", &selectors.name_field)?,
            email: dom::query_required(document, "email field", &selectors.email_field)?,
            message: dom::query_required(document, "message field", &selectors.message_field)?,
        })
    }

    fn read(&self) -> ContactSubmission {
        ContactSubmission::new(
            &field_value(&self.name),
            &field_value(&self.email),
            &field_value(&self.message),
        )
    }

    fn reset(&self) {
        match self.form.dyn_ref::<HtmlFormElement>() {
            Some(form) => form.reset(),
            None => {
                for field in [&self.name, &self.email, &self.message] {
                    clear_field(field);
                }
            },
        }
    }

    pub fn bind(self, notifier: Notifier) -> Result<Listener, PageError> {
        let target = self.form.clone();
        Listener::new(&target, "submit", move |event| {
            event.prevent_default();
            if submit(&self.read(), &notifier) {
                self.reset();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use yew::Callback;

    use super::*;
    use crate::notification::{NotificationAction, NotificationKind};

    fn recording_notifier() -> (Notifier, Rc<RefCell<Vec<(String, NotificationKind)>>>) {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let notifier = {
            let shown = shown.clone();
            Notifier::new(Callback::from(move |action| {
                if let NotificationAction::Show {
                    message,
                    kind,
                } = action
                {
                    shown.borrow_mut().push((message, kind));
                }
            }))
        };
        (notifier, shown)
    }

    #[test]
    fn email_rule_matches_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a@b..c"));
        // U+0085 is not whitespace to `\s`.
        assert!(is_valid_email("a\u{85}b@c.d"));

        for bad in [
            "a@b", "", "@b.c", "a@.c", "a@b.", "a b@c.d", "a@@b.c", "a@b@c.d", "a@b.c\t", "abc",
            "a\u{FEFF}b@c.d", "a\u{2028}b@c.d",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} must be rejected");
        }
    }

    #[test]
    fn fields_are_trimmed() {
        let submission = ContactSubmission::new("  Ada ", " ada@example.com\n", "\thi ");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "hi");

        let js_blank = ContactSubmission::new("\u{FEFF}", "\u{3000}a@b.c\u{A0}", "\u{85}hi");
        assert_eq!(js_blank.name, "");
        assert_eq!(js_blank.email, "a@b.c");
        assert_eq!(js_blank.message, "\u{85}hi");
        assert_eq!(validate(&js_blank), Err(ValidationError::MissingName));
    }

    #[test]
    fn first_failure_wins() {
        let all_bad = ContactSubmission::new("", "nope", "");
        assert_eq!(validate(&all_bad), Err(ValidationError::MissingName));

        let bad_email = ContactSubmission::new("Ada", "nope", "");
        assert_eq!(validate(&bad_email), Err(ValidationError::InvalidEmail));

        let no_message = ContactSubmission::new("Ada", "ada@example.com", "   ");
        assert_eq!(validate(&no_message), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn empty_name_reports_only_the_name_error() {
        let (notifier, shown) = recording_notifier();
        let cleared = submit(&ContactSubmission::new("  ", "ada@example.com", "hi"), &notifier);

        assert!(!cleared);
        assert_eq!(
            *shown.borrow(),
            vec![("Please enter your name.".to_string(), NotificationKind::Error)]
        );
    }

    #[test]
    fn invalid_email_reports_email_error() {
        let (notifier, shown) = recording_notifier();
        let cleared = submit(&ContactSubmission::new("Ada", "a@b", "hi"), &notifier);

        assert!(!cleared);
        assert_eq!(
            *shown.borrow(),
            vec![("Please enter a valid email address.".to_string(), NotificationKind::Error)]
        );
    }

    #[test]
    fn valid_submission_thanks_sender_and_clears() {
        let (notifier, shown) = recording_notifier();
        let cleared = submit(&ContactSubmission::new(" Ada ", "ada@example.com", "Hello"), &notifier);

        assert!(cleared);
        let shown = shown.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(
            shown[0],
            (
                "Thank you, Ada! Your message has been sent successfully.".to_string(),
                NotificationKind::Success
            )
        );
    }
}
