//! Property-based tests for the value-object factories.
//!
//! These tests check the trimming and length rules for arbitrary input, and
//! that a stored value always passes its own factory again.

use bkm::types::bookmark::{BookmarkId, BookmarkTag, BookmarkTitle, BookmarkUrl};
use bkm::types::config::{ConfigKey, FuzzyFinderCommand};
use bkm::types::errors::ValidationError;
use proptest::prelude::*;

/// Strategy for surrounding whitespace.
fn arb_padding() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

/// Strategy for generating http(s) URLs with an optional path.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".dev")],
        proptest::option::of("/[a-z0-9_-]{1,12}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A title is accepted exactly when its trimmed form has 1 to 500 chars,
    /// and the stored value is that trimmed form.
    #[test]
    fn title_accepts_iff_trimmed_length_in_bounds(
        core in "[a-zA-Z0-9 ]{0,520}",
        left in arb_padding(),
        right in arb_padding(),
    ) {
        let raw = format!("{}{}{}", left, core, right);
        let trimmed = raw.trim();
        match BookmarkTitle::create(&raw) {
            Ok(title) => {
                prop_assert_eq!(title.value(), trimmed);
                prop_assert!(!trimmed.is_empty() && trimmed.chars().count() <= 500);
            }
            Err(ValidationError::Empty { .. }) => prop_assert!(trimmed.is_empty()),
            Err(ValidationError::TooLong { max, .. }) => {
                prop_assert_eq!(max, 500);
                prop_assert!(trimmed.chars().count() > 500);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Revalidating a stored tag yields the same tag.
    #[test]
    fn tag_value_is_a_fixed_point(raw in "[ ]{0,2}[a-zA-Z0-9_-]{1,50}[ ]{0,2}") {
        let tag = BookmarkTag::create(&raw).unwrap();
        let again = BookmarkTag::create(tag.value()).unwrap();
        prop_assert_eq!(again, tag);
    }

    /// Generated IDs always satisfy the ID format.
    #[test]
    fn generated_id_is_accepted(_seed in 0u8..8) {
        let id = BookmarkId::generate();
        prop_assert!(BookmarkId::create(id.value()).is_ok());
    }

    /// http(s) URLs are accepted and stored as the trimmed input.
    #[test]
    fn http_urls_are_accepted(url in arb_url(), left in arb_padding(), right in arb_padding()) {
        let raw = format!("{}{}{}", left, url, right);
        let parsed = BookmarkUrl::create(&raw).unwrap();
        prop_assert_eq!(parsed.value(), url.as_str());
    }

    /// Any other scheme is rejected and named in the error.
    #[test]
    fn other_schemes_are_rejected(scheme in "(ftp|file|mailto|ssh|data)", rest in "[a-z]{1,10}") {
        let raw = format!("{}://{}.example", scheme, rest);
        prop_assert_eq!(
            BookmarkUrl::create(&raw),
            Err(ValidationError::UnsupportedScheme { scheme: scheme.clone() })
        );
    }

    /// Keys built from non-empty alphanumeric segments are accepted.
    #[test]
    fn dotted_alphanumeric_keys_are_accepted(segments in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..4)) {
        let raw = segments.join(".");
        let key = ConfigKey::create(&raw).unwrap();
        prop_assert_eq!(key.value(), raw.as_str());
    }

    /// A single shell metacharacter anywhere in the command is rejected.
    #[test]
    fn command_with_metacharacter_is_rejected(
        prefix in "[a-z]{0,6}",
        meta in prop::sample::select(vec!['&', '|', ';', '$', '`', '(', ')', '<', '>', '"']),
        suffix in "[a-z]{0,6}",
    ) {
        let raw = format!("{}{}{}", prefix, meta, suffix);
        let is_forbidden = matches!(
            FuzzyFinderCommand::create(&raw),
            Err(ValidationError::ForbiddenCharacters { .. })
        );
        prop_assert!(is_forbidden);
    }
}
