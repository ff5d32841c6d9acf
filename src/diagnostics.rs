#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// RULE & ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const RULE_UNUSED_MEMBER: &str = "L-RULE-UNUSED-MEMBER";
pub const ERR_SYNTAX: &str = "L-ERR-SYNTAX-001";

fn get_guarantee(code: &str) -> &'static str {
    match code {
        RULE_UNUSED_MEMBER => {
            "Every instance member of a component class is read somewhere in the class body, or is a lifecycle hook."
        }
        ERR_SYNTAX => "Analysis only runs over sources the parser accepts.",
        _ => "Unknown rule.",
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DIAGNOSTICS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
pub struct LintDiagnostic {
    pub code: String,
    pub error_type: String,
    pub message: String,
    pub guarantee: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub class_name: Option<String>,
    pub member_name: Option<String>,
}

impl LintDiagnostic {
    pub fn unused_member(
        file: &str,
        location: SourceLocation,
        class_name: &str,
        member_name: &str,
    ) -> Self {
        LintDiagnostic {
            code: RULE_UNUSED_MEMBER.to_string(),
            error_type: "LINT_RULE_VIOLATION".to_string(),
            message: format!(
                "Unused method or property \"{}\" of class \"{}\"",
                member_name, class_name
            ),
            guarantee: get_guarantee(RULE_UNUSED_MEMBER).to_string(),
            file: file.to_string(),
            line: location.line,
            column: location.column,
            class_name: Some(class_name.to_string()),
            member_name: Some(member_name.to_string()),
        }
    }

    pub fn syntax_error(message: &str, file: &str, line: u32, column: u32) -> Self {
        LintDiagnostic {
            code: ERR_SYNTAX.to_string(),
            error_type: "SYNTAX_ERROR".to_string(),
            message: message.to_string(),
            guarantee: get_guarantee(ERR_SYNTAX).to_string(),
            file: file.to_string(),
            line,
            column,
            class_name: None,
            member_name: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// REPORT SINK
// ═══════════════════════════════════════════════════════════════════════════════

/// Receives diagnostics as the analysis emits them. The host decides
/// presentation, aggregation, and exit codes.
pub trait ReportSink {
    fn report(&mut self, diagnostic: LintDiagnostic);
}

/// Default sink: buffers everything in emission order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    pub diagnostics: Vec<LintDiagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: LintDiagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// 1-based line and column for a byte offset into `source`.
pub fn line_column(source: &str, offset: u32) -> SourceLocation {
    let limit = offset as usize;
    let mut line = 1;
    let mut column = 1;
    for (index, ch) in source.char_indices() {
        if index >= limit {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    SourceLocation { line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_column_is_one_based() {
        let source = "ab\ncd\nef";
        let start = line_column(source, 0);
        assert_eq!((start.line, start.column), (1, 1));

        let second_line = line_column(source, 3);
        assert_eq!((second_line.line, second_line.column), (2, 1));

        let mid = line_column(source, 4);
        assert_eq!((mid.line, mid.column), (2, 2));

        let third_line = line_column(source, 7);
        assert_eq!((third_line.line, third_line.column), (3, 2));
    }

    #[test]
    fn unused_member_message_shape() {
        let diagnostic = LintDiagnostic::unused_member(
            "App.jsx",
            SourceLocation { line: 2, column: 3 },
            "Hello",
            "handleClick",
        );
        assert_eq!(
            diagnostic.message,
            "Unused method or property \"handleClick\" of class \"Hello\""
        );
        assert_eq!(diagnostic.code, RULE_UNUSED_MEMBER);
        assert_eq!(diagnostic.class_name.as_deref(), Some("Hello"));
        assert_eq!(diagnostic.member_name.as_deref(), Some("handleClick"));
    }
}
