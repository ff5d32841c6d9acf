//! Unused instance-member analysis for component classes.
//!
//! One pass over the syntax tree: entering a component class opens a scope,
//! member-shaped nodes update it, and leaving the class reconciles the
//! definition-sites against the observed usages.

use oxc_ast::ast::{
    AssignmentExpression, AssignmentTarget, BindingPattern, Class, ComputedMemberExpression,
    MethodDefinition, Program, PropertyDefinition, PropertyKey, StaticBlock,
    StaticMemberExpression, VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::GetSpan;

use crate::class_scope::{ClassScope, ScopeFrame, ScopeStack, LIFECYCLE_METHODS};
use crate::detect::ComponentDetector;
use crate::diagnostics::{line_column, LintDiagnostic, ReportSink};
use crate::member_name::{expression_key_name, is_this_expression, property_key_name};

/// Walk one parsed program and report every unused instance member of every
/// component class to `sink`.
pub fn run_unused_members(
    program: &Program<'_>,
    source: &str,
    file_path: &str,
    detector: &dyn ComponentDetector,
    sink: &mut dyn ReportSink,
) {
    let mut visitor = UnusedMemberVisitor {
        source,
        file_path,
        detector,
        sink,
        scopes: ScopeStack::new(),
    };
    visitor.visit_program(program);
}

struct UnusedMemberVisitor<'s> {
    source: &'s str,
    file_path: &'s str,
    detector: &'s dyn ComponentDetector,
    sink: &'s mut dyn ReportSink,
    scopes: ScopeStack,
}

impl UnusedMemberVisitor<'_> {
    /// A scope is open and traversal is not inside a static member of it.
    fn in_tracked_region(&mut self) -> bool {
        match self.scopes.active_mut() {
            Some(scope) => !scope.in_static_region,
            None => false,
        }
    }

    /// Shared entry for class properties and methods. Static members open a
    /// static region instead of defining anything; the return value says
    /// whether the caller must close that region again.
    fn enter_member(&mut self, key: &PropertyKey<'_>, computed: bool, is_static: bool) -> bool {
        let span = key.span();
        let name = property_key_name(key, computed);
        let Some(scope) = self.scopes.active_mut() else {
            return false;
        };
        if is_static {
            scope.in_static_region = true;
            return true;
        }
        if let Some(name) = name {
            scope.record_definition(name, span);
        }
        false
    }

    fn leave_member(&mut self, close_static_region: bool) {
        if close_static_region {
            if let Some(scope) = self.scopes.active_mut() {
                scope.in_static_region = false;
            }
        }
    }

    fn reconcile(&mut self, scope: ClassScope) {
        for definition in &scope.definitions {
            if scope.usages.contains(&definition.name) {
                continue;
            }
            if LIFECYCLE_METHODS.contains(definition.name.as_str()) {
                continue;
            }
            let location = line_column(self.source, definition.span.start);
            self.sink.report(LintDiagnostic::unused_member(
                self.file_path,
                location,
                &scope.class_name,
                &definition.name,
            ));
        }
    }
}

impl<'a> Visit<'a> for UnusedMemberVisitor<'_> {
    fn visit_class(&mut self, class: &Class<'a>) {
        if self.detector.is_component_class(class) {
            let class_name = class
                .id
                .as_ref()
                .map(|id| id.name.to_string())
                .unwrap_or_default();
            self.scopes.push_tracked(class_name);
            walk::walk_class(self, class);
            if let Some(ScopeFrame::Tracked(scope)) = self.scopes.pop() {
                self.reconcile(scope);
            }
        } else {
            self.scopes.push_opaque();
            walk::walk_class(self, class);
            self.scopes.pop();
        }
    }

    fn visit_method_definition(&mut self, def: &MethodDefinition<'a>) {
        let close_static_region = self.enter_member(&def.key, def.computed, def.r#static);
        walk::walk_method_definition(self, def);
        self.leave_member(close_static_region);
    }

    fn visit_property_definition(&mut self, def: &PropertyDefinition<'a>) {
        let close_static_region = self.enter_member(&def.key, def.computed, def.r#static);
        walk::walk_property_definition(self, def);
        self.leave_member(close_static_region);
    }

    fn visit_static_block(&mut self, block: &StaticBlock<'a>) {
        let entered = match self.scopes.active_mut() {
            Some(scope) => {
                scope.in_static_region = true;
                true
            }
            None => false,
        };
        walk::walk_static_block(self, block);
        if entered {
            if let Some(scope) = self.scopes.active_mut() {
                scope.in_static_region = false;
            }
        }
    }

    fn visit_assignment_expression(&mut self, assign: &AssignmentExpression<'a>) {
        // A receiver member as the assignment target is a write, which counts
        // as a definition-site rather than a use.
        if self.in_tracked_region() {
            match &assign.left {
                AssignmentTarget::StaticMemberExpression(member)
                    if is_this_expression(&member.object) =>
                {
                    let name = member.property.name.to_string();
                    let span = member.property.span;
                    if let Some(scope) = self.scopes.active_mut() {
                        scope.record_definition(name, span);
                    }
                    self.visit_expression(&assign.right);
                    return;
                }
                AssignmentTarget::ComputedMemberExpression(member)
                    if is_this_expression(&member.object) =>
                {
                    if let Some(name) = expression_key_name(&member.expression) {
                        let span = member.expression.span();
                        if let Some(scope) = self.scopes.active_mut() {
                            scope.record_definition(name, span);
                        }
                    } else {
                        // Dynamic key: the write is invisible, but the key
                        // expression itself can still read members.
                        self.visit_expression(&member.expression);
                    }
                    self.visit_expression(&assign.right);
                    return;
                }
                _ => {}
            }
        }
        walk::walk_assignment_expression(self, assign);
    }

    fn visit_static_member_expression(&mut self, member: &StaticMemberExpression<'a>) {
        if self.in_tracked_region() && is_this_expression(&member.object) {
            let name = member.property.name.to_string();
            if let Some(scope) = self.scopes.active_mut() {
                scope.record_usage(name);
            }
        }
        walk::walk_static_member_expression(self, member);
    }

    fn visit_computed_member_expression(&mut self, member: &ComputedMemberExpression<'a>) {
        if self.in_tracked_region() && is_this_expression(&member.object) {
            if let Some(name) = expression_key_name(&member.expression) {
                if let Some(scope) = self.scopes.active_mut() {
                    scope.record_usage(name);
                }
            }
        }
        walk::walk_computed_member_expression(self, member);
    }

    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        // One level of destructuring from the receiver marks each
        // literal-keyed binding as a use: const { foo } = this
        if self.in_tracked_region() {
            if let Some(init) = &decl.init {
                if is_this_expression(init) {
                    if let BindingPattern::ObjectPattern(pattern) = &decl.id {
                        let names: Vec<String> = pattern
                            .properties
                            .iter()
                            .filter_map(|prop| property_key_name(&prop.key, prop.computed))
                            .collect();
                        if let Some(scope) = self.scopes.active_mut() {
                            for name in names {
                                scope.record_usage(name);
                            }
                        }
                    }
                }
            }
        }
        walk::walk_variable_declarator(self, decl);
    }
}
