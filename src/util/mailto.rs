//! Contact-form `mailto:` link construction.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

/// Where the contact form lands.
pub const CONTACT_ADDRESS: &str = "contact@ddpo-studio.dev";

/// Subject used when the form leaves the subject field blank.
pub const DEFAULT_SUBJECT: &str = "Contact from DDPO Demo";

/// Build a percent-encoded `mailto:` URL from the contact-form fields.
pub fn contact_mailto(name: &str, email: &str, subject: &str, message: &str) -> String {
    let subject = if subject.trim().is_empty() {
        DEFAULT_SUBJECT
    } else {
        subject
    };
    let body = format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}");
    format!(
        "mailto:{CONTACT_ADDRESS}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    )
}
