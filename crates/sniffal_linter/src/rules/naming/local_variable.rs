//! Local-variable naming checks.
//!
//! Local variables must begin with `l` followed by a type annotation
//! (`this` is the sole exemption), and must be in camel caps format. The two
//! families never short-circuit each other: a single name can report both a
//! prefix violation and a casing violation.
//!
//! Original equivalent: `processVariable()` in the
//! `BeAgile.NamingConventions.ValidVariableName` sniff.

use sniffal_diagnostics::{Diagnostic, RuleCode, Violation};

use crate::case::is_camel_caps;
use crate::rules::naming::PHP_RESERVED_VARS;

/// Violation: `l`-prefixed local variable without a valid type annotation.
#[derive(Debug, Clone)]
pub struct HasNotType {
    pub name: String,
}

impl Violation for HasNotType {
    const CODE: RuleCode = RuleCode::HasNotType;

    fn message(&self) -> String {
        format!(
            "Local variable \"{}\" must have a type annotation: \"str\",\"dbl\",\"int\",\"obj\",\"bool\"",
            self.name
        )
    }

    fn args(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

/// Violation: local variable not beginning with the letter `l`.
#[derive(Debug, Clone)]
pub struct HasNoL {
    pub name: String,
}

impl Violation for HasNoL {
    const CODE: RuleCode = RuleCode::HasNoL;

    fn message(&self) -> String {
        format!(
            "Local variable \"{}\" must begin with the letter \"l\"",
            self.name
        )
    }

    fn args(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

/// Violation: local variable not in camel caps format.
#[derive(Debug, Clone)]
pub struct NotCamelCaps {
    pub name: String,
}

impl Violation for NotCamelCaps {
    const CODE: RuleCode = RuleCode::NotCamelCaps;

    fn message(&self) -> String {
        format!("Variable \"{}\" is not in valid camel caps format", self.name)
    }

    fn args(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

/// Evaluate a local-variable name.
///
/// `in_class_context` is true when the occurrence sits inside a class or
/// interface body, including a `Class::$_name` static-qualified access the
/// caller resolved upstream; a leading underscore is then stripped before
/// evaluation. Messages always carry the original, unstripped name.
pub(crate) fn check(name: &str, in_class_context: bool) -> Vec<Diagnostic> {
    // Reserved super-globals bypass every check, before any stripping.
    if PHP_RESERVED_VARS.contains(&name) {
        return vec![];
    }

    let original = name;
    let name = match name.strip_prefix('_') {
        Some(stripped) if in_class_context => stripped,
        _ => name,
    };

    let mut diagnostics = vec![];
    let bytes = name.as_bytes();

    if bytes.first() == Some(&b'l') {
        match &bytes[..bytes.len().min(4)] {
            b"lstr" | b"ldbl" | b"lint" | b"lobj" => {}
            b"lboo" => {
                if bytes.get(..5) != Some(b"lbool".as_slice()) {
                    diagnostics.push(Diagnostic::new(HasNotType {
                        name: original.to_string(),
                    }));
                }
            }
            _ => {
                diagnostics.push(Diagnostic::new(HasNotType {
                    name: original.to_string(),
                }));
            }
        }
    } else if !bytes.starts_with(b"this") {
        diagnostics.push(Diagnostic::new(HasNoL {
            name: original.to_string(),
        }));
    }

    if !is_camel_caps(name, false, true, false) {
        diagnostics.push(Diagnostic::new(NotCamelCaps {
            name: original.to_string(),
        }));
    }

    diagnostics
}
