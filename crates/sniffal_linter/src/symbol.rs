//! Symbol descriptors handed to the evaluator by the host pipeline.

use is_macro::Is;

/// What kind of occurrence a symbol descriptor was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A class member variable declaration.
    MemberVariable,
    /// A local variable reference or declaration.
    LocalVariable,
    /// A double-quoted string literal containing interpolated variables.
    StringInterpolatedVariable,
}

/// Declared visibility of a symbol, as far as the host could determine it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Is)]
pub enum Visibility {
    Public,
    Private,
    /// Scope could not be determined locally, e.g. a `Class::$_name`
    /// static-qualified access or a name found inside an interpolated string.
    /// Evaluated under the public-style checks, never guessed.
    Unknown,
}

impl Visibility {
    /// Capitalized scope label used in member-variable messages.
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
            Visibility::Unknown => "Unknown",
        }
    }
}

/// One symbol occurrence to evaluate.
///
/// Immutable once constructed; the evaluator is a pure function of this value.
/// The host builds one descriptor per occurrence it examines and discards it
/// after evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDescriptor {
    /// Raw identifier text without the `$` sigil. For
    /// [`SymbolKind::StringInterpolatedVariable`] this is the full literal
    /// text including its quote delimiters.
    pub name: String,
    pub kind: SymbolKind,
    pub visibility: Visibility,
    /// True when the occurrence sits textually inside a class or interface
    /// body. Only consulted to decide whether a leading marker character is
    /// stripped before evaluation.
    pub in_class_context: bool,
}

impl SymbolDescriptor {
    /// Descriptor for a class member variable declaration.
    pub fn member(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::MemberVariable,
            visibility,
            in_class_context: true,
        }
    }

    /// Descriptor for a local variable occurrence.
    pub fn local(name: impl Into<String>, in_class_context: bool) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::LocalVariable,
            visibility: Visibility::Unknown,
            in_class_context,
        }
    }

    /// Descriptor for a double-quoted string literal with interpolation.
    pub fn interpolated(literal: impl Into<String>, in_class_context: bool) -> Self {
        Self {
            name: literal.into(),
            kind: SymbolKind::StringInterpolatedVariable,
            visibility: Visibility::Unknown,
            in_class_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_visibility() {
        let member = SymbolDescriptor::member("mstrName", Visibility::Private);
        assert_eq!(member.kind, SymbolKind::MemberVariable);
        assert!(member.visibility.is_private());

        let local = SymbolDescriptor::local("lstrName", false);
        assert_eq!(local.kind, SymbolKind::LocalVariable);
        assert!(local.visibility.is_unknown());

        let string = SymbolDescriptor::interpolated("\"$lstrName\"", true);
        assert_eq!(string.kind, SymbolKind::StringInterpolatedVariable);
        assert!(string.in_class_context);
    }
}
