//! Diagnostic model for naming-rule evaluation.
//!
//! Rules describe each finding as a small struct implementing [`Violation`];
//! the evaluator turns those into [`Diagnostic`] values that carry the stable
//! [`RuleCode`], the formatted message body and the ordered message arguments.
//! Source positions are deliberately absent: the host pipeline tracks token
//! positions itself and renders diagnostics against them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Stable identifiers for every naming-rule finding.
///
/// These strings are an external contract: downstream suppression and
/// reporting configuration refers to findings by code, so codes are unique
/// per condition and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RuleCode {
    /// Public member variable carries the leading `m` reserved for private fields.
    PublicHasM,
    /// Public member variable carries a type-annotation prefix.
    PublicHasType,
    /// Member variable is not in valid camel caps format.
    MemberNotCamelCaps,
    /// Private member variable is missing the leading `m` marker.
    PrivateNoM,
    /// Private member variable is missing a type-annotation prefix.
    PrivateNoType,
    /// The first letter after a member's type annotation is not capitalized.
    MemberNotCapsAfterType,
    /// Local variable starts with `l` but has no valid type annotation.
    HasNotType,
    /// Local variable does not begin with the letter `l`.
    HasNoL,
    /// Local variable is not in valid camel caps format.
    NotCamelCaps,
    /// Variable embedded in a double-quoted string is not in valid camel caps format.
    StringNotCamelCaps,
    /// Accessed object property is not in valid camel caps format.
    ///
    /// Reserved for the advisory property-access check, which is computed but
    /// never emitted by the standard evaluator surface.
    PropertyNotCamelCaps,
}

impl RuleCode {
    /// All codes, in declaration order.
    pub const ALL: &'static [RuleCode] = &[
        RuleCode::PublicHasM,
        RuleCode::PublicHasType,
        RuleCode::MemberNotCamelCaps,
        RuleCode::PrivateNoM,
        RuleCode::PrivateNoType,
        RuleCode::MemberNotCapsAfterType,
        RuleCode::HasNotType,
        RuleCode::HasNoL,
        RuleCode::NotCamelCaps,
        RuleCode::StringNotCamelCaps,
        RuleCode::PropertyNotCamelCaps,
    ];

    /// The stable code string.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleCode::PublicHasM => "PublicHasM",
            RuleCode::PublicHasType => "PublicHasType",
            RuleCode::MemberNotCamelCaps => "MemberNotCamelCaps",
            RuleCode::PrivateNoM => "PrivateNoM",
            RuleCode::PrivateNoType => "PrivateNoType",
            RuleCode::MemberNotCapsAfterType => "MemberNotCapsAfterType",
            RuleCode::HasNotType => "HasNotType",
            RuleCode::HasNoL => "HasNoL",
            RuleCode::NotCamelCaps => "NotCamelCaps",
            RuleCode::StringNotCamelCaps => "StringNotCamelCaps",
            RuleCode::PropertyNotCamelCaps => "PropertyNotCamelCaps",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a known rule code.
///
/// Callers should treat this as a configuration bug in their suppression or
/// reporting setup, not as a runtime fault of the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rule code `{0}`")]
pub struct UnknownRuleCodeError(pub String);

impl FromStr for RuleCode {
    type Err = UnknownRuleCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownRuleCodeError(s.to_string()))
    }
}

/// A single naming-rule finding.
///
/// Each violation kind is its own struct, carrying the data its message
/// interpolates. The associated [`RuleCode`] is fixed per kind.
pub trait Violation {
    /// The stable code identifying this violation kind.
    const CODE: RuleCode;

    /// The formatted, human-readable message.
    fn message(&self) -> String;

    /// The ordered message arguments, for hosts that re-render or aggregate
    /// findings by name rather than by formatted text.
    fn args(&self) -> Vec<String> {
        Vec::new()
    }
}

/// A reported finding: stable code, formatted body, ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Stable rule code (see [`RuleCode`]).
    pub code: RuleCode,
    /// Formatted message body.
    pub body: String,
    /// Ordered message arguments.
    pub args: Vec<String>,
}

impl Diagnostic {
    /// Build a diagnostic from a violation value.
    pub fn new<V: Violation>(violation: V) -> Self {
        Self {
            code: V::CODE,
            body: violation.message(),
            args: violation.args(),
        }
    }
}
