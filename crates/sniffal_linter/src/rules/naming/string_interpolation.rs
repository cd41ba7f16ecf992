//! Naming checks for variables embedded in double-quoted string literals.
//!
//! The literal text is scanned for `$name` / `${name}` references. Scope and
//! visibility of such a reference cannot be known, so every extracted name is
//! validated under the public casing rules; a leading `m` marker is stripped
//! first when the interpolation site sits inside a class or interface body.
//!
//! Original equivalent: `processVariableInString()` in the
//! `BeAgile.NamingConventions.ValidVariableName` sniff.

use lazy_static::lazy_static;
use regex::bytes::Regex;
use sniffal_diagnostics::{Diagnostic, RuleCode, Violation};

use crate::case::is_camel_caps;
use crate::rules::naming::PHP_RESERVED_VARS;

lazy_static! {
    /// A `$` (optionally followed by `{`) not preceded by a backslash, then
    /// an identifier: a letter, underscore or extended-ASCII byte, followed
    /// by any run of those plus digits. Byte-oriented so the `\x7f`-`\xff`
    /// classes behave exactly like the original byte-wise pattern.
    static ref EMBEDDED_VAR: Regex =
        Regex::new(r"(?-u)[^\\]\$\{?([a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*)").unwrap();
}

/// Violation: string-embedded variable not in camel caps format.
#[derive(Debug, Clone)]
pub struct StringNotCamelCaps {
    pub name: String,
}

impl Violation for StringNotCamelCaps {
    const CODE: RuleCode = RuleCode::StringNotCamelCaps;

    fn message(&self) -> String {
        format!("Variable \"{}\" is not in valid camel caps format", self.name)
    }

    fn args(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

/// Evaluate every variable reference embedded in `literal`.
///
/// `literal` is the full text of the double-quoted string, including its
/// quote delimiters; the pattern requires a preceding non-backslash
/// character, which the opening quote supplies for a literal-initial
/// variable. One diagnostic is emitted per invalid reference, carrying the
/// original (unstripped) name.
pub(crate) fn check(literal: &str, in_class_context: bool) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];

    for captures in EMBEDDED_VAR.captures_iter(literal.as_bytes()) {
        let Some(matched) = captures.get(1) else {
            continue;
        };
        let original = String::from_utf8_lossy(matched.as_bytes()).into_owned();

        if PHP_RESERVED_VARS.contains(&original.as_str()) {
            continue;
        }

        let checked = match original.strip_prefix('m') {
            Some(stripped) if in_class_context => stripped,
            _ => original.as_str(),
        };

        if !is_camel_caps(checked, false, true, false) {
            diagnostics.push(Diagnostic::new(StringNotCamelCaps { name: original }));
        }
    }

    diagnostics
}
