//! Single-pass AST visitor that records module references.

use census_core::{BindingForm, ModuleReference, ReferenceKind, SourceSpan, Specifier};
use oxc_ast::ast::{
    Argument, CallExpression, Expression, ImportDeclaration, ImportDeclarationSpecifier,
};
use oxc_ast::AstKind;
use oxc_ast_visit::Visit;
use oxc_span::{GetSpan, Span};
use std::path::Path;

use crate::folding::fold_specifier;

/// Collects [`ModuleReference`] records during one pre-order AST walk.
///
/// Pre-order traversal matches source-text order, which downstream
/// consumers rely on for deterministic diagnostics.
pub(crate) struct ReferencePass<'p> {
    file: &'p Path,
    fold_concatenations: bool,
    references: Vec<ModuleReference>,
}

impl<'p> ReferencePass<'p> {
    pub(crate) fn new(file: &'p Path, fold_concatenations: bool) -> Self {
        Self {
            file,
            fold_concatenations,
            references: Vec::new(),
        }
    }

    pub(crate) fn into_references(self) -> Vec<ModuleReference> {
        self.references
    }

    fn push(&mut self, kind: ReferenceKind, specifier: Specifier, span: Span) {
        let sequence = self.references.len();
        self.references.push(ModuleReference {
            kind,
            specifier,
            span: SourceSpan {
                start: span.start,
                end: span.end,
            },
            sequence,
        });
    }

    /// Records an `import()`/`require()` whose argument is evaluated
    /// symbolically. A specifier that cannot be determined degrades to an
    /// `Unresolved` record; it is never fatal.
    fn push_call(&mut self, kind: ReferenceKind, argument: &Expression<'_>, call_span: Span) {
        match fold_specifier(argument, self.fold_concatenations) {
            Some(text) => self.push(kind, Specifier::Literal(text), call_span),
            None => {
                let arg_span = argument.span();
                tracing::warn!(
                    file = %self.file.display(),
                    start = arg_span.start,
                    end = arg_span.end,
                    "{} specifier is dynamically computed, recording as unresolved",
                    kind.display_name(),
                );
                self.push(kind, Specifier::Unresolved, call_span);
            }
        }
    }
}

/// Classifies an import declaration by its bindings.
///
/// A mixed clause (`import d, { n } from 'x'`) classifies by its first
/// specifier; the declaration still yields exactly one record.
fn binding_form(decl: &ImportDeclaration<'_>) -> BindingForm {
    let specifiers = match &decl.specifiers {
        Some(specifiers) if !specifiers.is_empty() => specifiers,
        _ => return BindingForm::SideEffectOnly,
    };

    match &specifiers[0] {
        ImportDeclarationSpecifier::ImportDefaultSpecifier(_) => BindingForm::Default,
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => BindingForm::Namespace,
        ImportDeclarationSpecifier::ImportSpecifier(_) => BindingForm::Named,
    }
}

/// Returns the single argument of a bare `require(...)` call.
///
/// Detection is deliberately manual rather than literal-only: a call like
/// `require(dynamicName)` must still surface, as an unresolved record.
fn bare_require_argument<'a, 'b>(call: &'b CallExpression<'a>) -> Option<&'b Argument<'a>> {
    match &call.callee {
        Expression::Identifier(ident) if ident.name == "require" && call.arguments.len() == 1 => {
            call.arguments.first()
        }
        _ => None,
    }
}

impl<'a> Visit<'a> for ReferencePass<'_> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        match kind {
            AstKind::ImportDeclaration(decl) => {
                // One record per declaration, whether or not any binding is used
                self.push(
                    ReferenceKind::Static(binding_form(decl)),
                    Specifier::Literal(decl.source.value.to_string()),
                    decl.span,
                );
            }
            AstKind::ImportExpression(expr) => {
                self.push_call(ReferenceKind::Dynamic, &expr.source, expr.span);
            }
            AstKind::CallExpression(call) => {
                if let Some(argument) = bare_require_argument(call) {
                    match argument.as_expression() {
                        Some(expr) => self.push_call(ReferenceKind::Require, expr, call.span),
                        // Spread argument: nothing to evaluate symbolically
                        None => self.push(ReferenceKind::Require, Specifier::Unresolved, call.span),
                    }
                }
            }
            _ => {}
        }
    }
}
