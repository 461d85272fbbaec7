//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Korean mobile numbers after normalization
static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^010\d{8}$").expect("static mobile regex"));

/// Normalize a phone number by keeping digits only
///
/// `"010-1234-5678"` and `"010 1234 5678"` both become `"01012345678"`.
pub fn normalize_phone_number(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check a phone number against the default mobile format
pub fn is_valid_mobile(phone: &str) -> bool {
    MOBILE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for logs (e.g., 010****5678)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
