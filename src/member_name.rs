use oxc_ast::ast::{Expression, PropertyKey};

/// Strip type-cast and grouping wrappers down to the innermost expression.
pub fn uncast<'a, 'b>(mut expr: &'b Expression<'a>) -> &'b Expression<'a> {
    loop {
        expr = match expr {
            Expression::ParenthesizedExpression(inner) => &inner.expression,
            Expression::TSAsExpression(inner) => &inner.expression,
            Expression::TSSatisfiesExpression(inner) => &inner.expression,
            Expression::TSTypeAssertion(inner) => &inner.expression,
            Expression::TSNonNullExpression(inner) => &inner.expression,
            other => return other,
        };
    }
}

/// True when the expression is the instance receiver (`this`), ignoring casts.
pub fn is_this_expression(expr: &Expression) -> bool {
    matches!(uncast(expr), Expression::ThisExpression(_))
}

/// Canonical member name for a key written in expression position
/// (computed brackets, destructuring values, etc.).
///
/// Only statically-knowable keys resolve: string/number/boolean/null literals
/// and template literals with no interpolation. Everything else is dynamic and
/// yields `None`, which keeps the member invisible to the analysis.
pub fn expression_key_name(expr: &Expression) -> Option<String> {
    match uncast(expr) {
        Expression::StringLiteral(lit) => Some(lit.value.to_string()),
        // Rust's float Display matches JS String() for integral values: 3.0 -> "3"
        Expression::NumericLiteral(lit) => Some(format!("{}", lit.value)),
        Expression::BooleanLiteral(lit) => Some(lit.value.to_string()),
        Expression::NullLiteral(_) => Some("null".to_string()),
        Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() => {
            tpl.quasis.first().map(|quasi| quasi.value.raw.to_string())
        }
        _ => None,
    }
}

/// Canonical member name for a class-element or object-pattern property key.
///
/// A bare identifier only names the member when the key is not computed;
/// `[foo]` is a dynamic lookup and resolves to nothing. Private names live in
/// a separate namespace and are never tracked.
pub fn property_key_name(key: &PropertyKey, computed: bool) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(id) => {
            if computed {
                None
            } else {
                Some(id.name.to_string())
            }
        }
        PropertyKey::PrivateIdentifier(_) => None,
        _ => key.as_expression().and_then(expression_key_name),
    }
}
