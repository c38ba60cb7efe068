pub use fast_chemail::is_valid_email;

/// Usernames are limited to word characters so they stay
/// usable in URLs and cookies.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 150
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '@' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_test() {
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@bar"));
        assert!(is_valid_email("foo@bar.tld"));
    }

    #[test]
    fn username_test() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("alice.smith-99"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("alice smith"));
        assert!(!is_valid_username(&"x".repeat(151)));
    }
}
