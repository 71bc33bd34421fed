//! Cache key builders.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Key holding the `token -> user id` mapping for a session.
pub fn session_token(token: &str) -> String {
    format!("auth:{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_key_layout() {
        assert_eq!(session_token("abc"), "auth:abc");
    }
}
