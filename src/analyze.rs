//! Per-file analysis entry points.

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::detect::{ComponentDetector, ExtendsComponentDetector};
use crate::diagnostics::{DiagnosticCollector, LintDiagnostic};
use crate::unused_members::run_unused_members;

fn source_type_for(file_path: &str) -> SourceType {
    let base = SourceType::default().with_module(true);
    if file_path.ends_with(".tsx") {
        base.with_typescript(true).with_jsx(true)
    } else if file_path.ends_with(".ts") {
        base.with_typescript(true)
    } else {
        base.with_jsx(true)
    }
}

/// Parse one source file and collect its unused-member diagnostics, deciding
/// class eligibility through `detector`.
///
/// `Err` carries a single syntax diagnostic when the parser rejects the file;
/// nothing is reported speculatively from a broken tree.
pub fn analyze_source_with(
    source: &str,
    file_path: &str,
    detector: &dyn ComponentDetector,
) -> Result<Vec<LintDiagnostic>, LintDiagnostic> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type_for(file_path)).parse();

    if let Some(error) = ret.errors.first() {
        return Err(LintDiagnostic::syntax_error(
            &format!("Invalid source syntax: {:?}", error),
            file_path,
            1,
            1,
        ));
    }

    let mut collector = DiagnosticCollector::new();
    run_unused_members(&ret.program, source, file_path, detector, &mut collector);
    Ok(collector.diagnostics)
}

/// Default-detector entry: syntax failures come back as an ordinary
/// diagnostic so callers get one flat list per file.
pub fn analyze_source(source: &str, file_path: &str) -> Vec<LintDiagnostic> {
    match analyze_source_with(source, file_path, &ExtendsComponentDetector) {
        Ok(diagnostics) => diagnostics,
        Err(syntax) => vec![syntax],
    }
}

#[cfg(feature = "napi")]
#[napi]
pub fn analyze_source_native(source: String, file_path: String) -> serde_json::Value {
    let diagnostics = analyze_source(&source, &file_path);
    serde_json::to_value(diagnostics).unwrap_or(serde_json::Value::Null)
}
