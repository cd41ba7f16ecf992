//! Type-annotation tags embedded in variable names.

/// A fixed type tag required as a name prefix by this ruleset, encoding the
/// variable's declared type: `str`, `int`, `dbl`, `bool` or `obj`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeAnnotation {
    Str,
    Int,
    Dbl,
    Bool,
    Obj,
}

impl TypeAnnotation {
    /// Recognize a tag at the start of `s`: a 3-byte `str`/`int`/`dbl`/`obj`
    /// prefix, or the 4-byte `bool` prefix.
    pub fn detect(s: &str) -> Option<TypeAnnotation> {
        let bytes = s.as_bytes();
        if bytes.len() >= 4 && &bytes[..4] == b"bool" {
            return Some(TypeAnnotation::Bool);
        }
        match bytes.get(..3)? {
            b"str" => Some(TypeAnnotation::Str),
            b"int" => Some(TypeAnnotation::Int),
            b"dbl" => Some(TypeAnnotation::Dbl),
            b"obj" => Some(TypeAnnotation::Obj),
            _ => None,
        }
    }

    /// The tag text.
    pub fn tag(self) -> &'static str {
        match self {
            TypeAnnotation::Str => "str",
            TypeAnnotation::Int => "int",
            TypeAnnotation::Dbl => "dbl",
            TypeAnnotation::Bool => "bool",
            TypeAnnotation::Obj => "obj",
        }
    }
}
