use oxc_span::Span;
use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Lifecycle hooks the component host invokes itself. Defining one without
    /// referencing it is normal, so these names are never reported.
    pub static ref LIFECYCLE_METHODS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("constructor");
        s.insert("componentWillMount");
        s.insert("UNSAFE_componentWillMount");
        s.insert("componentDidMount");
        s.insert("componentWillReceiveProps");
        s.insert("UNSAFE_componentWillReceiveProps");
        s.insert("shouldComponentUpdate");
        s.insert("componentWillUpdate");
        s.insert("UNSAFE_componentWillUpdate");
        s.insert("render");
        s.insert("componentDidUpdate");
        s.insert("componentDidCatch");
        s.insert("componentWillUnmount");
        s
    };
}

/// One definition-site of an instance member. A name can have several sites
/// (a class property plus a later receiver write); each is kept so each can be
/// reported on its own if the name is never read.
#[derive(Debug, Clone)]
pub struct MemberDefinition {
    pub name: String,
    pub span: Span,
}

/// Accumulated member state for one open component class.
#[derive(Debug)]
pub struct ClassScope {
    pub class_name: String,
    /// Definition-sites in source order.
    pub definitions: Vec<MemberDefinition>,
    /// Canonical names observed as reads, calls, or destructured bindings.
    pub usages: HashSet<String>,
    /// True while traversal is inside a static member's subtree. Static
    /// members belong to the class-level namespace, which this analysis
    /// does not model.
    pub in_static_region: bool,
}

impl ClassScope {
    pub fn new(class_name: String) -> Self {
        ClassScope {
            class_name,
            definitions: Vec::new(),
            usages: HashSet::new(),
            in_static_region: false,
        }
    }

    pub fn record_definition(&mut self, name: String, span: Span) {
        self.definitions.push(MemberDefinition { name, span });
    }

    pub fn record_usage(&mut self, name: String) {
        self.usages.insert(name);
    }
}

pub enum ScopeFrame {
    /// A component class currently being tracked.
    Tracked(ClassScope),
    /// A non-component class. Its frame hides every enclosing scope so that
    /// nothing inside it leaks member names outward.
    Opaque,
}

#[derive(Default)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_tracked(&mut self, class_name: String) {
        self.frames.push(ScopeFrame::Tracked(ClassScope::new(class_name)));
    }

    pub fn push_opaque(&mut self) {
        self.frames.push(ScopeFrame::Opaque);
    }

    pub fn pop(&mut self) -> Option<ScopeFrame> {
        self.frames.pop()
    }

    /// The innermost scope, and only if it is tracked.
    pub fn active_mut(&mut self) -> Option<&mut ClassScope> {
        match self.frames.last_mut() {
            Some(ScopeFrame::Tracked(scope)) => Some(scope),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_allowlist_covers_unsafe_aliases() {
        assert!(LIFECYCLE_METHODS.contains("render"));
        assert!(LIFECYCLE_METHODS.contains("constructor"));
        assert!(LIFECYCLE_METHODS.contains("UNSAFE_componentWillReceiveProps"));
        assert!(!LIFECYCLE_METHODS.contains("handleClick"));
        assert_eq!(LIFECYCLE_METHODS.len(), 13);
    }

    #[test]
    fn opaque_frame_hides_enclosing_scope() {
        let mut stack = ScopeStack::new();
        stack.push_tracked("Outer".to_string());
        assert!(stack.active_mut().is_some());

        stack.push_opaque();
        assert!(stack.active_mut().is_none());

        stack.pop();
        let outer = stack.active_mut().expect("outer scope restored");
        assert_eq!(outer.class_name, "Outer");
    }

    #[test]
    fn nested_tracked_scopes_do_not_mix() {
        let mut stack = ScopeStack::new();
        stack.push_tracked("Outer".to_string());
        stack
            .active_mut()
            .expect("outer open")
            .record_usage("outerOnly".to_string());

        stack.push_tracked("Inner".to_string());
        let inner = stack.active_mut().expect("inner open");
        assert_eq!(inner.class_name, "Inner");
        assert!(inner.usages.is_empty());
        inner.record_definition("innerProp".to_string(), Span::new(0, 0));

        match stack.pop() {
            Some(ScopeFrame::Tracked(scope)) => {
                assert_eq!(scope.definitions.len(), 1);
            }
            _ => panic!("expected tracked inner frame"),
        }

        let outer = stack.active_mut().expect("outer restored");
        assert!(outer.definitions.is_empty());
        assert!(outer.usages.contains("outerOnly"));
    }
}
