//! Email syntax checks matching browser `type="email"` inputs.

/// Trim and lowercase an address, returning `None` if it is not a plausible
/// `local@domain` address.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    let domain = parts[1];
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return None;
    }
    Some(normalized)
}

/// Whether `email` would pass the browser's email-syntax check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    normalize_email(email).is_some()
}

#[cfg(test)]
#[path = "email_test.rs"]
mod tests;
