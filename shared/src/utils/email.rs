//! E-mail address utilities

/// Trim and lowercase an e-mail address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Split an address into `(local, domain)`
///
/// Returns `None` unless there is exactly one `@` with a non-empty part on each side.
pub fn split_address(email: &str) -> Option<(&str, &str)> {
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some((local, domain))
}

/// Domain part of an address, if it has one
pub fn email_domain(email: &str) -> Option<&str> {
    split_address(email).map(|(_, domain)| domain)
}

/// Mask an e-mail address for logs (e.g., jo***@snu.ac.kr)
pub fn mask_email(email: &str) -> String {
    match split_address(email) {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane.Doe@SNU.ac.KR "), "jane.doe@snu.ac.kr");
    }

    #[test]
    fn test_split_address() {
        assert_eq!(split_address("a@b.c"), Some(("a", "b.c")));
        assert_eq!(split_address("@b.c"), None);
        assert_eq!(split_address("a@"), None);
        assert_eq!(split_address("a@b@c"), None);
        assert_eq!(split_address("plain"), None);
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@snu.ac.kr"), "ja***@snu.ac.kr");
        assert_eq!(mask_email("j@snu.ac.kr"), "j***@snu.ac.kr");
        assert_eq!(mask_email("broken"), "***");
    }
}
