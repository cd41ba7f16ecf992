//! Pure naming-rule evaluation over symbol descriptors.
//!
//! The host analysis pipeline tokenizes source, resolves scope and tracks
//! positions; this crate only decides, per symbol occurrence, which naming
//! violations to report. Evaluation is synchronous, side-effect free and safe
//! to run concurrently: descriptors are immutable values and the rules hold
//! no state.
//!
//! ```text
//! host tokenizer/scope resolution
//!         |  SymbolDescriptor
//!         v
//! VariableNameEvaluator (ValidVariableName)
//!         |  Vec<Diagnostic>
//!         v
//! host reporting sink (positions, suppression by RuleCode)
//! ```

pub mod rules;

mod case;
mod symbol;

pub use case::is_camel_caps;
pub use rules::ValidVariableName;
pub use symbol::{SymbolDescriptor, SymbolKind, Visibility};

use sniffal_diagnostics::Diagnostic;

/// The evaluation interface the host pipeline depends on.
///
/// Three call sites, each supplying a descriptor derived from the host's own
/// tokenizer and scope resolution. Implementations never fail: indeterminate
/// scope arrives as [`Visibility::Unknown`] or a flag, not as an error, and
/// symbols the host could not analyze are simply never submitted.
pub trait VariableNameEvaluator {
    /// Evaluate a class member variable declaration.
    fn evaluate_member_variable(&self, name: &str, visibility: Visibility) -> Vec<Diagnostic>;

    /// Evaluate a local variable occurrence.
    fn evaluate_local_variable(&self, name: &str, in_class_context: bool) -> Vec<Diagnostic>;

    /// Evaluate every variable embedded in a double-quoted string literal.
    fn evaluate_interpolated_variables(
        &self,
        literal: &str,
        in_class_context: bool,
    ) -> Vec<Diagnostic>;

    /// Evaluate a descriptor by dispatching on its kind.
    fn evaluate(&self, symbol: &SymbolDescriptor) -> Vec<Diagnostic> {
        match symbol.kind {
            SymbolKind::MemberVariable => {
                self.evaluate_member_variable(&symbol.name, symbol.visibility)
            }
            SymbolKind::LocalVariable => {
                self.evaluate_local_variable(&symbol.name, symbol.in_class_context)
            }
            SymbolKind::StringInterpolatedVariable => {
                self.evaluate_interpolated_variables(&symbol.name, symbol.in_class_context)
            }
        }
    }
}
