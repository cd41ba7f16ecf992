//! Naming convention rules.
//!
//! Ported from the BeAgile PHP_CodeSniffer standard: variable names encode
//! scope (a leading `m` on private members) and declared type (a `str`,
//! `int`, `dbl`, `bool` or `obj` tag) on top of camel caps formatting.

mod local_variable;
mod member_variable;
mod property_access;
mod string_interpolation;
mod type_annotation;
mod valid_variable_name;

pub use local_variable::{HasNoL, HasNotType, NotCamelCaps};
pub use member_variable::{
    MemberNotCamelCaps, MemberNotCapsAfterType, PrivateNoM, PrivateNoType, PublicHasM,
    PublicHasType,
};
pub use property_access::{PropertyNotCamelCaps, check_property_access};
pub use string_interpolation::StringNotCamelCaps;
pub use type_annotation::TypeAnnotation;
pub use valid_variable_name::ValidVariableName;

/// Reserved super-global variable names, exempt from every naming check.
///
/// One shared constant for both the local-variable and string-interpolation
/// rules; the original duplicated this list at each use site.
pub const PHP_RESERVED_VARS: &[&str] = &[
    "_SERVER", "_GET", "_POST", "_REQUEST", "_SESSION", "_ENV", "_COOKIE", "_FILES", "GLOBALS",
];

pub(crate) use local_variable::check as check_local_variable;
pub(crate) use member_variable::check as check_member_variable;
pub(crate) use string_interpolation::check as check_interpolated_variables;
