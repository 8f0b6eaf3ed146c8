use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// Gravatar URL for `email`: 200px, PG rated, "mystery person" fallback.
///
/// The address is trimmed and lower-cased before hashing, so the same mailbox
/// always maps to the same avatar.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    format!("{GRAVATAR_BASE}/{hex}?s=200&r=pg&d=mm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_case_insensitive() {
        let a = gravatar_url("Jane@Example.com ");
        let b = gravatar_url("jane@example.com");
        assert_eq!(a, b);
    }

    #[test]
    fn uses_sha256_hex_and_fixed_options() {
        // sha256("test@example.com")
        let expected = "https://www.gravatar.com/avatar/973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b?s=200&r=pg&d=mm";
        assert_eq!(gravatar_url("test@example.com"), expected);
    }

    #[test]
    fn different_emails_differ() {
        assert_ne!(gravatar_url("a@example.com"), gravatar_url("b@example.com"));
    }
}
