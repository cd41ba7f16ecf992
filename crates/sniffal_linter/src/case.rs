//! Camel-caps validation shared by every naming rule.
//!
//! This is a faithful port of the PHP_CodeSniffer `isCamelCaps` primitive the
//! original sniffs delegate to, kept byte-compatible so evaluations agree with
//! the upstream tool:
//!
//! - the first character must be lowercase (uppercase when `class_format`);
//!   non-public names must instead start with an underscore followed by such
//!   a character;
//! - every character from byte index 1 on must be ASCII alphanumeric;
//! - when `strict`, no two adjacent capitals are allowed, digits never count
//!   as capitals, and a `class_format` name is treated as starting on a
//!   capital.
//!
//! The naming rules in this crate always pass `class_format = false` and
//! `strict = false`, varying only `public` and the submitted string.

/// Check whether `name` is in valid camel caps format.
pub fn is_camel_caps(name: &str, class_format: bool, public: bool, strict: bool) -> bool {
    let bytes = name.as_bytes();

    let first = if public {
        bytes.first()
    } else {
        if bytes.first() != Some(&b'_') {
            return false;
        }
        bytes.get(1)
    };
    let Some(&first) = first else {
        return false;
    };
    let first_ok = if class_format {
        first.is_ascii_uppercase()
    } else {
        first.is_ascii_lowercase()
    };
    if !first_ok {
        return false;
    }

    // Everything past the first byte must be a plain letter or digit. For
    // non-public names this skips only the underscore, re-checking the
    // already validated letter, which is harmless.
    if bytes[1..].iter().any(|b| !b.is_ascii_alphanumeric()) {
        return false;
    }

    if strict {
        let mut last_was_caps = class_format;
        for &b in &bytes[1..] {
            let is_caps = !b.is_ascii_digit() && b.is_ascii_uppercase();
            if is_caps && last_was_caps {
                return false;
            }
            last_was_caps = is_caps;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_names_start_lowercase() {
        assert!(is_camel_caps("thisIsCamelCaps", false, true, false));
        assert!(!is_camel_caps("ThisIsNot", false, true, false));
        assert!(!is_camel_caps("_thisIsNot", false, true, false));
    }

    #[test]
    fn private_names_need_underscore_then_lowercase() {
        assert!(is_camel_caps("_thisIsCamelCaps", false, false, false));
        assert!(!is_camel_caps("thisIsNot", false, false, false));
        assert!(!is_camel_caps("_ThisIsNot", false, false, false));
        assert!(!is_camel_caps("_", false, false, false));
    }

    #[test]
    fn rejects_non_alphanumeric_tail() {
        assert!(!is_camel_caps("with_underscore", false, true, false));
        assert!(!is_camel_caps("with-dash", false, true, false));
        assert!(!is_camel_caps("with.dot", false, true, false));
    }

    #[test]
    fn digits_are_allowed_after_the_first_character() {
        assert!(is_camel_caps("var123", false, true, false));
        assert!(!is_camel_caps("1var", false, true, false));
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(!is_camel_caps("", false, true, false));
        assert!(!is_camel_caps("", false, false, false));
    }

    #[test]
    fn class_format_starts_uppercase() {
        assert!(is_camel_caps("ClassName", true, true, false));
        assert!(!is_camel_caps("className", true, true, false));
    }

    #[test]
    fn strict_rejects_adjacent_capitals() {
        assert!(is_camel_caps("camelCapsHere", false, true, true));
        assert!(!is_camel_caps("camelCAps", false, true, true));
        // Digits never count as capitals.
        assert!(is_camel_caps("camel1Cap", false, true, true));
        // Non-strict mode tolerates acronym runs; that is how every rule in
        // this crate calls the primitive.
        assert!(is_camel_caps("camelCAps", false, true, false));
    }
}
