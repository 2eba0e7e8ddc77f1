//! Pure field validators.
//!
//! Each validator returns `None` when the value is acceptable and the error
//! string to display otherwise. All of them are total over any input.

/// Require a non-blank value.
pub fn validate_required(label: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

/// Require a plausible email address: one `@` with a dotted domain.
pub fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some("Email is required".to_string());
    }

    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None)
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            None
        }
        _ => Some("Enter a valid email address".to_string()),
    }
}

/// Require a password of at least 6 characters.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < 6 {
        Some("Password must be at least 6 characters".to_string())
    } else {
        None
    }
}

/// Require the confirmation to match the password.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        Some("Confirm your password".to_string())
    } else if confirm != password {
        Some("Passwords do not match".to_string())
    } else {
        None
    }
}

/// Require a phone number of at least 10 digits.
pub fn validate_phone(phone: &str) -> Option<String> {
    if phone.trim().is_empty() {
        return Some("Phone number is required".to_string());
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 10 || phone.chars().any(|c| !c.is_ascii_digit() && c != ' ' && c != '+' && c != '-') {
        Some("Enter a valid phone number".to_string())
    } else {
        None
    }
}

/// Require a 6-digit PIN code.
pub fn validate_pin_code(pin: &str) -> Option<String> {
    if pin.trim().is_empty() {
        return Some("PIN code is required".to_string());
    }
    if pin.len() == 6 && pin.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        Some("Enter a valid 6-digit PIN code".to_string())
    }
}
