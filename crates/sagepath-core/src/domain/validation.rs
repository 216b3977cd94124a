//! Local form validation. A failing form never reaches a remote service.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::post::{ImageUpload, PostDraft};

pub const TITLE_MIN_CHARS: usize = 3;
pub const CONTENT_MIN_CHARS: usize = 50;
pub const PASSWORD_MIN_CHARS: usize = 6;
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("static email pattern")
});

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All field errors found in one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for a field, if it was rejected.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.0.iter().map(|e| e.message).collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

fn check_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min_chars: usize,
    required: &'static str,
    too_short: &'static str,
) {
    if value.trim().is_empty() {
        errors.push(field, required);
    } else if value.chars().count() < min_chars {
        errors.push(field, too_short);
    }
}

pub fn validate_post(draft: &PostDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_text(
        &mut errors,
        "title",
        &draft.title,
        TITLE_MIN_CHARS,
        "Title is required",
        "Title must be at least 3 characters",
    );
    check_text(
        &mut errors,
        "content",
        &draft.content,
        CONTENT_MIN_CHARS,
        "Content is required",
        "Content must be at least 50 characters",
    );
    errors.into_result()
}

pub fn validate_image(image: &ImageUpload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if image.bytes.len() > MAX_IMAGE_BYTES {
        errors.push("image", "Image must be 10 MB or smaller");
    }
    errors.into_result()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.push("email", "Invalid email address");
    }
    if password.is_empty() {
        errors.push("password", "Password is required");
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.push("password", "Password must be at least 6 characters");
    }
    errors.into_result()
}
