//! Newsletter signup acknowledgement.
//!
//! The form is cosmetic: nothing is validated or sent anywhere.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

/// Selector for the address field inside a newsletter form.
pub const EMAIL_INPUT_SELECTOR: &str = "input[type=\"email\"]";

/// Message shown after a (simulated) successful signup.
#[must_use]
pub fn acknowledgement(email: &str) -> String {
    format!("Thank you for subscribing! Email: {email}")
}
