//! Address extraction and comparison.
//!
//! Exchange returns sender and recipient headers in several shapes:
//! RFC-style `Name <user@domain>`, a bare address, or an X.500
//! distinguished name with no SMTP form at all. Every header is
//! collapsed to one comparable representation before any identity
//! decision is made.

/// Extracts a canonical address from a free-form header value.
///
/// An angle-bracketed address wins; otherwise the whole value is
/// lower-cased and trimmed. A distinguished name therefore passes
/// through unchanged, so callers must treat a result without `@` as
/// "no address found".
#[must_use]
pub fn extract_address(raw: &str) -> String {
    if let Some(start) = raw.find('<')
        && let Some(len) = raw[start + 1..].find('>')
    {
        return raw[start + 1..start + 1 + len].trim().to_lowercase();
    }
    raw.trim().to_lowercase()
}

/// Compares two header values for identity equality.
///
/// Case-insensitive; both sides are normalized with [`extract_address`]
/// first, never compared raw.
#[must_use]
pub fn addresses_match(a: &str, b: &str) -> bool {
    extract_address(a) == extract_address(b)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bracketed_address() {
        assert_eq!(
            extract_address("Jane Doe <Jane.Doe@Corp.com>"),
            "jane.doe@corp.com"
        );
    }

    #[test]
    fn extracts_bracketed_address_with_padding() {
        assert_eq!(extract_address("Jane <  jane@corp.com  >"), "jane@corp.com");
    }

    #[test]
    fn bare_address_is_lowercased_and_trimmed() {
        assert_eq!(extract_address("  USER@EXAMPLE.COM  "), "user@example.com");
    }

    #[test]
    fn distinguished_name_passes_through() {
        let dn = "/o=Corp/ou=First Administrative Group/cn=Recipients/cn=jdoe";
        let extracted = extract_address(dn);
        assert_eq!(extracted, dn.to_lowercase());
        assert!(!extracted.contains('@'));
    }

    #[test]
    fn unclosed_bracket_falls_back_to_whole_value() {
        assert_eq!(extract_address("Jane <jane@corp.com"), "jane <jane@corp.com");
    }

    #[test]
    fn empty_brackets_yield_empty() {
        assert_eq!(extract_address("Jane <>"), "");
    }

    #[test]
    fn first_bracket_pair_wins() {
        assert_eq!(
            extract_address("A <a@corp.com> B <b@corp.com>"),
            "a@corp.com"
        );
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(addresses_match("JANE@CORP.COM", "Jane <jane@corp.com>"));
    }

    #[test]
    fn mismatch_is_detected() {
        assert!(!addresses_match("alice@corp.com", "bob@corp.com"));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn extract_is_idempotent(raw in "[ -~]{0,64}") {
                let once = extract_address(&raw);
                let twice = extract_address(&once);
                prop_assert_eq!(twice, once);
            }

            #[test]
            fn match_is_symmetric(a in "[ -~]{0,64}", b in "[ -~]{0,64}") {
                prop_assert_eq!(addresses_match(&a, &b), addresses_match(&b, &a));
            }

            #[test]
            fn every_string_matches_itself(raw in "[ -~]{0,64}") {
                prop_assert!(addresses_match(&raw, &raw));
            }
        }
    }
}
