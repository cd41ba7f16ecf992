//! The ValidVariableName rule.

use sniffal_diagnostics::Diagnostic;

use crate::VariableNameEvaluator;
use crate::rules::naming;
use crate::symbol::Visibility;

/// Variable-naming rule over member, local and string-interpolated variables.
///
/// One fixed rule set, evaluated as a pure function per symbol occurrence;
/// stateless, so a single value can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidVariableName;

impl ValidVariableName {
    pub fn name(&self) -> &'static str {
        "ValidVariableName"
    }
}

impl VariableNameEvaluator for ValidVariableName {
    fn evaluate_member_variable(&self, name: &str, visibility: Visibility) -> Vec<Diagnostic> {
        naming::check_member_variable(name, visibility)
    }

    fn evaluate_local_variable(&self, name: &str, in_class_context: bool) -> Vec<Diagnostic> {
        naming::check_local_variable(name, in_class_context)
    }

    fn evaluate_interpolated_variables(
        &self,
        literal: &str,
        in_class_context: bool,
    ) -> Vec<Diagnostic> {
        naming::check_interpolated_variables(literal, in_class_context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{SymbolDescriptor, SymbolKind};
    use sniffal_diagnostics::RuleCode;

    #[test]
    fn evaluate_dispatches_on_kind() {
        let rule = ValidVariableName;

        let member = SymbolDescriptor::member("strValue", Visibility::Public);
        assert_eq!(member.kind, SymbolKind::MemberVariable);
        let diagnostics = rule.evaluate(&member);
        assert_eq!(diagnostics[0].code, RuleCode::PublicHasType);

        let local = SymbolDescriptor::local("count", false);
        let diagnostics = rule.evaluate(&local);
        assert_eq!(diagnostics[0].code, RuleCode::HasNoL);

        let string = SymbolDescriptor::interpolated("\"$BadName\"", false);
        let diagnostics = rule.evaluate(&string);
        assert_eq!(diagnostics[0].code, RuleCode::StringNotCamelCaps);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let rule = ValidVariableName;
        let symbol = SymbolDescriptor::local("_lboox", false);

        let first = rule.evaluate(&symbol);
        let second = rule.evaluate(&symbol);
        assert_eq!(first, second);
    }
}
