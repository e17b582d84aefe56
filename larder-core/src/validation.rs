//! Form rules for registration, login and user-authored recipes.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::error::ValidationErrors;

pub const USERNAME_MIN: usize = 2;
pub const USERNAME_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 20;

const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("Invalid email regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Absolute http(s) URL with a host.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// First unmet password-strength rule, if any.
pub fn password_strength_error(password: &str) -> Option<&'static str> {
    if password.chars().count() < PASSWORD_MIN {
        return Some("Password must be at least 8 characters long.");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number.");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Some("Password must contain at least one special character.");
    }
    None
}

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let username_len = username.trim().chars().count();
    if username_len == 0 {
        errors.push("username", "Username is required.");
    } else if !(USERNAME_MIN..=USERNAME_MAX).contains(&username_len) {
        errors.push(
            "username",
            format!(
                "Username must be between {} and {} characters long.",
                USERNAME_MIN, USERNAME_MAX
            ),
        );
    }

    if email.trim().is_empty() {
        errors.push("email", "Email is required.");
    } else if !is_valid_email(email) {
        errors.push("email", "Invalid email address.");
    }

    if password.is_empty() {
        errors.push("password", "Password is required.");
    } else if password.chars().count() > PASSWORD_MAX {
        errors.push(
            "password",
            format!(
                "Password must be between {} and {} characters long.",
                PASSWORD_MIN, PASSWORD_MAX
            ),
        );
    } else if let Some(message) = password_strength_error(password) {
        errors.push("password", message);
    }

    if confirm_password.is_empty() {
        errors.push("confirm_password", "Please confirm your password.");
    } else if confirm_password != password {
        errors.push("confirm_password", "Passwords must match.");
    }

    errors.into_result()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if email.trim().is_empty() {
        errors.push("email", "Email is required.");
    } else if !is_valid_email(email) {
        errors.push("email", "Invalid email address.");
    }

    if password.is_empty() {
        errors.push("password", "Password is required.");
    }

    errors.into_result()
}

pub fn validate_recipe(
    title: &str,
    ingredients: &str,
    instructions: &str,
    image_url: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if title.trim().is_empty() {
        errors.push("title", "Title is required.");
    }
    if ingredients.trim().is_empty() {
        errors.push("ingredients", "Ingredients are required.");
    }
    if instructions.trim().is_empty() {
        errors.push("instructions", "Instructions are required.");
    }
    if !is_valid_url(image_url) {
        errors.push("image_url", "Please enter a valid image URL.");
    }

    errors.into_result()
}
