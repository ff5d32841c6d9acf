//! # Native Unused-Member Analysis (Ground Truth)
//!
//! ## Analysis Invariants
//!
//! 1. **Single Pass**: each file is analyzed in one traversal of one syntax
//!    tree. No cross-file or whole-program state exists; the only process-wide
//!    data is the immutable lifecycle allowlist.
//!
//! 2. **Scope Discipline**: member definitions and usages are only recorded
//!    against the innermost open class scope. A non-component class pushes an
//!    opaque frame, so nothing inside it is visible to any enclosing scope.
//!
//! 3. **Literal-Like Keys Only**: a member participates in the analysis only
//!    when its key resolves statically to one string (identifier, literal, or
//!    template literal without interpolation). Dynamic keys are invisible in
//!    both directions, which can under-report but never misreport.
//!
//! 4. **Static Exclusion**: static members and static blocks belong to the
//!    class-level namespace. Nothing inside a static region contributes
//!    definitions or usages.
//!
//! 5. **Writes Define, Reads Use**: `this.x = v` in any assignment position is
//!    a definition-site; every other receiver access with a resolvable key is
//!    a use. One level of destructuring from `this` also counts as a use.
//!
//! 6. **Reports at Scope Close**: diagnostics are emitted only when a class
//!    scope closes cleanly, one per unused definition-site, in source order.
//!    An abandoned traversal emits nothing.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod analyze;
mod cache;
mod class_scope;
mod detect;
mod diagnostics;
mod discovery;
mod member_name;
mod unused_members;


#[cfg(feature = "napi")]
pub use analyze::analyze_source_native;
pub use analyze::{analyze_source, analyze_source_with};
pub use cache::IncrementalCache;
pub use class_scope::{ClassScope, MemberDefinition, ScopeFrame, ScopeStack, LIFECYCLE_METHODS};
pub use detect::{ComponentDetector, ExtendsComponentDetector};
pub use diagnostics::*;
pub use discovery::analyze_project;
#[cfg(feature = "napi")]
pub use discovery::analyze_project_native;
pub use member_name::{expression_key_name, is_this_expression, property_key_name, uncast};
pub use unused_members::run_unused_members;

#[cfg(feature = "napi")]
#[napi]
pub fn analyzer_bridge() -> String {
    "Linter Native Bridge Connected".to_string()
}
