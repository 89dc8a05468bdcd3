//! Profile Identifier Normalization
//!
//! Turns heterogeneous operator-supplied profile references (bare username,
//! `u/name`, `/u/name`, full URL with or without scheme) into one canonical
//! `https://www.reddit.com/user/<name>/` URL, and extracts the username
//! back out of a canonical URL.
//!
//! No username character-set validation happens here: an invalid name
//! surfaces later as an empty collection, not as a normalizer error.

use url::Url;

use crate::types::{PersonaError, Result};

const CANONICAL_PREFIX: &str = "https://www.reddit.com/user/";

/// Convert operator input into a canonical profile URL.
///
/// Recognized forms are checked in priority order; the first match wins.
/// Fails with `InvalidIdentifier` only when the trimmed input is empty.
pub fn normalize_profile_input(input: &str) -> Result<String> {
    let input = input.trim();

    if input.is_empty() {
        return Err(PersonaError::InvalidIdentifier);
    }

    if input.starts_with(CANONICAL_PREFIX) {
        return Ok(input.to_string());
    }
    if let Some(rest) = input.strip_prefix("http://www.reddit.com/user/") {
        return Ok(format!("{CANONICAL_PREFIX}{rest}"));
    }
    if let Some(rest) = input.strip_prefix("www.reddit.com/user/") {
        return Ok(format!("{CANONICAL_PREFIX}{rest}"));
    }
    if let Some(rest) = input.strip_prefix("reddit.com/user/") {
        return Ok(format!("{CANONICAL_PREFIX}{rest}"));
    }
    if let Some(name) = input.strip_prefix("u/") {
        return Ok(format!("{CANONICAL_PREFIX}{name}/"));
    }
    if let Some(name) = input.strip_prefix("/u/") {
        return Ok(format!("{CANONICAL_PREFIX}{name}/"));
    }

    // Anything else is treated as a bare username
    Ok(format!("{CANONICAL_PREFIX}{input}/"))
}

/// Extract the username from a canonical profile URL.
///
/// The first non-empty path segment must be the literal `user`; the
/// following segment is the username.
pub fn extract_username(profile_url: &str) -> Result<String> {
    let malformed = || PersonaError::MalformedProfileUrl(profile_url.to_string());

    let parsed = Url::parse(profile_url.trim()).map_err(|_| malformed())?;
    let mut segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.collect())
        .unwrap_or_default();
    segments.retain(|s| !s.is_empty());

    match segments.as_slice() {
        ["user", name, ..] => Ok((*name).to_string()),
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CANONICAL: &str = "https://www.reddit.com/user/spez/";

    #[test]
    fn test_normalize_canonical_url_passthrough() {
        assert_eq!(normalize_profile_input(CANONICAL).unwrap(), CANONICAL);
    }

    #[test]
    fn test_normalize_upgrades_insecure_scheme() {
        assert_eq!(
            normalize_profile_input("http://www.reddit.com/user/spez/").unwrap(),
            CANONICAL
        );
    }

    #[test]
    fn test_normalize_prefixes_missing_scheme() {
        assert_eq!(
            normalize_profile_input("www.reddit.com/user/spez/").unwrap(),
            CANONICAL
        );
        assert_eq!(
            normalize_profile_input("reddit.com/user/spez/").unwrap(),
            CANONICAL
        );
    }

    #[test]
    fn test_normalize_expands_shorthands() {
        assert_eq!(normalize_profile_input("u/spez").unwrap(), CANONICAL);
        assert_eq!(normalize_profile_input("/u/spez").unwrap(), CANONICAL);
    }

    #[test]
    fn test_normalize_bare_username() {
        assert_eq!(normalize_profile_input("spez").unwrap(), CANONICAL);
        assert_eq!(normalize_profile_input("  spez  ").unwrap(), CANONICAL);
    }

    #[test]
    fn test_normalize_rejects_empty_input() {
        assert!(matches!(
            normalize_profile_input(""),
            Err(PersonaError::InvalidIdentifier)
        ));
        assert!(matches!(
            normalize_profile_input("   \t  "),
            Err(PersonaError::InvalidIdentifier)
        ));
    }

    #[test]
    fn test_extract_username_from_canonical() {
        assert_eq!(extract_username(CANONICAL).unwrap(), "spez");
        assert_eq!(
            extract_username("https://www.reddit.com/user/spez").unwrap(),
            "spez"
        );
    }

    #[test]
    fn test_extract_username_rejects_non_profile_paths() {
        assert!(matches!(
            extract_username("https://www.reddit.com/r/rust/"),
            Err(PersonaError::MalformedProfileUrl(_))
        ));
        assert!(matches!(
            extract_username("not a url"),
            Err(PersonaError::MalformedProfileUrl(_))
        ));
    }

    #[test]
    fn test_all_forms_agree_on_same_name() {
        let forms = [
            "spez",
            "u/spez",
            "/u/spez",
            "reddit.com/user/spez/",
            "www.reddit.com/user/spez/",
            "http://www.reddit.com/user/spez/",
            "https://www.reddit.com/user/spez/",
        ];
        for form in forms {
            assert_eq!(normalize_profile_input(form).unwrap(), CANONICAL, "{form}");
        }
    }

    proptest! {
        /// normalize -> extract -> normalize is idempotent for plausible names
        #[test]
        fn prop_normalize_extract_roundtrip(name in "[A-Za-z0-9_-]{1,20}") {
            let url = normalize_profile_input(&name).unwrap();
            let extracted = extract_username(&url).unwrap();
            prop_assert_eq!(normalize_profile_input(&extracted).unwrap(), url);
        }
    }
}
