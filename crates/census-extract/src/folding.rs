//! Constant folding for specifier expressions.
//!
//! The evaluator is a small pure function over the expression tree, kept
//! separate from the scan pass so the folding policy can be tested on its
//! own. It returns `Some(literal)` when the expression is a compile-time
//! string, `None` otherwise; it never raises.

use oxc_ast::ast::Expression;
use oxc_syntax::operator::BinaryOperator;

/// Attempts to evaluate a specifier expression to a literal string.
///
/// - A string literal is always static.
/// - A template literal with no substitutions is static: it is spelled as a
///   template but carries a single compile-time string.
/// - Parentheses are transparent.
/// - A `+` concatenation of static operands folds only when
///   `fold_concatenations` is set. By default any binary expression is
///   refused, so `import('a' + 'b')` stays unresolved.
/// - Everything else (identifiers, calls, substituted templates, other
///   operators) is refused.
pub fn fold_specifier(expr: &Expression<'_>, fold_concatenations: bool) -> Option<String> {
    match expr {
        Expression::StringLiteral(lit) => Some(lit.value.to_string()),
        Expression::TemplateLiteral(template) if template.expressions.is_empty() => template
            .quasis
            .first()
            .and_then(|quasi| quasi.value.cooked.as_ref())
            .map(|cooked| cooked.to_string()),
        Expression::ParenthesizedExpression(paren) => {
            fold_specifier(&paren.expression, fold_concatenations)
        }
        Expression::BinaryExpression(binary)
            if fold_concatenations && binary.operator == BinaryOperator::Addition =>
        {
            let left = fold_specifier(&binary.left, fold_concatenations)?;
            let right = fold_specifier(&binary.right, fold_concatenations)?;
            Some(left + &right)
        }
        _ => None,
    }
}
