//! Advisory check for object-property accesses (`->property`).
//!
//! The original sniff computed this casing check but never reported it, and
//! the standard evaluator surface here keeps that contract: nothing calls
//! [`check_property_access`]. The hook stays available, with its own reserved
//! code, for hosts that decide to turn it on.

use sniffal_diagnostics::{Diagnostic, RuleCode, Violation};

use crate::case::is_camel_caps;

/// Violation: accessed property not in camel caps format.
#[derive(Debug, Clone)]
pub struct PropertyNotCamelCaps {
    pub name: String,
}

impl Violation for PropertyNotCamelCaps {
    const CODE: RuleCode = RuleCode::PropertyNotCamelCaps;

    fn message(&self) -> String {
        format!("Variable \"{}\" is not in valid camel caps format", self.name)
    }

    fn args(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

/// Check the name of an accessed property (not a method call).
///
/// Visibility of the property cannot be known at the access site, so an
/// optional leading underscore is ignored and the remainder is validated
/// under the public casing rules. Returns the diagnostic that *would* be
/// emitted; no evaluator entry point emits it.
pub fn check_property_access(name: &str) -> Option<Diagnostic> {
    let checked = name.strip_prefix('_').unwrap_or(name);

    if is_camel_caps(checked, false, true, false) {
        None
    } else {
        Some(Diagnostic::new(PropertyNotCamelCaps {
            name: name.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_properties_yield_nothing() {
        assert!(check_property_access("goodName").is_none());
        assert!(check_property_access("_goodName").is_none());
    }

    #[test]
    fn invalid_properties_yield_the_advisory_diagnostic() {
        let diagnostic = check_property_access("BadName").unwrap();
        assert_eq!(diagnostic.code, RuleCode::PropertyNotCamelCaps);
        assert_eq!(diagnostic.args, vec!["BadName".to_string()]);

        // The message argument is the original name, underscore included.
        let diagnostic = check_property_access("_Bad_name").unwrap();
        assert_eq!(diagnostic.args, vec!["_Bad_name".to_string()]);
    }
}
