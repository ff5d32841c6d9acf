use oxc_ast::ast::{Class, ClassType, Expression};
use std::collections::HashSet;

use crate::member_name::uncast;

lazy_static::lazy_static! {
    static ref COMPONENT_BASE_NAMES: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("Component");
        s.insert("PureComponent");
        s
    };
}

/// Decides whether a class is subject to instance-member analysis.
/// The analysis treats the answer as opaque and authoritative.
pub trait ComponentDetector {
    fn is_component_class(&self, class: &Class<'_>) -> bool;
}

/// Default detector: a named class declaration whose heritage clause names a
/// recognized component base, either bare (`extends Component`) or through a
/// namespace (`extends React.Component`).
///
/// Class expressions and anonymous defaults never qualify; reporting needs a
/// display name and these have none to offer.
pub struct ExtendsComponentDetector;

impl ComponentDetector for ExtendsComponentDetector {
    fn is_component_class(&self, class: &Class<'_>) -> bool {
        if !matches!(class.r#type, ClassType::ClassDeclaration) || class.id.is_none() {
            return false;
        }
        let super_class = match &class.super_class {
            Some(expr) => uncast(expr),
            None => return false,
        };
        match super_class {
            Expression::Identifier(id) => COMPONENT_BASE_NAMES.contains(id.name.as_str()),
            Expression::StaticMemberExpression(member) => {
                COMPONENT_BASE_NAMES.contains(member.property.name.as_str())
            }
            _ => false,
        }
    }
}
