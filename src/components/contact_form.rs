//! Contact form validation and the submit handler.
//!
//! The form is a simulated submission surface: nothing leaves the page.
//! A valid submission gets a personalized success toast and a field reset,
//! an invalid one gets an error toast and keeps the fields for correction.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

#[cfg(feature = "hydrate")]
use crate::components::notification::{self, Severity};

#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Id of the contact form element.
pub const FORM_ID: &str = "contactForm";

#[cfg(feature = "hydrate")]
const NAME_FIELD: &str = "name";
#[cfg(feature = "hydrate")]
const EMAIL_FIELD: &str = "email";
#[cfg(feature = "hydrate")]
const MESSAGE_FIELD: &str = "message";

/// One submission attempt, captured from the form fields as-is. Values are
/// not trimmed; whitespace-only input counts as present.
#[derive(Clone, Debug)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validation failures, worded as the toast the visitor sees.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please complete all fields!")]
    MissingFields,
    #[error("Invalid email format!")]
    InvalidEmail,
}

impl Submission {
    /// Presence first, then email shape. A submission failing both checks
    /// reports the missing fields.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(SubmissionError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(SubmissionError::InvalidEmail);
        }
        Ok(())
    }
}

/// Light shape check, not an RFC parse: no whitespace, exactly one `@`
/// with a non-empty local part, and a dot inside the domain with at least
/// one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Toast body acknowledging a valid submission.
#[must_use]
pub fn success_message(name: &str) -> String {
    format!("Thank you {name}! Your message has been received. I will get back to you soon.")
}

/// Attach the submit handler. A page without the form gets no wiring.
pub fn wire_up() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(form) = dom::element_by_id(FORM_ID) else { return };
        let Ok(form) = form.dyn_into::<web_sys::HtmlFormElement>() else { return };

        let target = form.clone();
        dom::listen(&target, "submit", move |ev: web_sys::Event| {
            ev.prevent_default();
            handle_submit(&form);
        });
    }
}

#[cfg(feature = "hydrate")]
fn handle_submit(form: &web_sys::HtmlFormElement) {
    let submission = Submission {
        name: dom::field_value(NAME_FIELD),
        email: dom::field_value(EMAIL_FIELD),
        message: dom::field_value(MESSAGE_FIELD),
    };

    if let Err(err) = submission.validate() {
        notification::show(&err.to_string(), Severity::Error);
        return;
    }

    notification::show(&success_message(&submission.name), Severity::Success);
    form.reset();
    log::info!(
        "form submission: name={} email={} message={:?}",
        submission.name,
        submission.email,
        submission.message
    );
}
