//! Output formatting for the CLI

use crate::models::{AnalysisSuggestion, ParsedData};
use crate::parse::Delimiter;

/// Format a parse summary (delimiter, column and row counts)
pub fn format_summary(data: &ParsedData, delimiter: Option<Delimiter>) -> String {
    let mut output = String::new();

    match delimiter {
        Some(d) => output.push_str(&format!("Delimiter: {}\n", d.label())),
        None => output.push_str("Delimiter: (no input)\n"),
    }

    output.push_str(&format!(
        "Columns: {}\nRows: {}\n",
        data.headers.len(),
        data.row_count()
    ));

    if !data.headers.is_empty() {
        output.push_str(&format!("Headers: {}\n", data.headers.join(", ")));
    }

    output
}

/// Format an advisory suggestion for display
pub fn format_suggestion(suggestion: &AnalysisSuggestion) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Suggested table name: {}\n",
        suggestion.suggested_table_name
    ));

    if !suggestion.column_types.is_empty() {
        output.push_str("Column types:\n");
        for column in &suggestion.column_types {
            output.push_str(&format!("  - {}: {}\n", column.column_name, column.sql_type));
        }
    }

    if !suggestion.data_cleanup_suggestions.is_empty() {
        output.push_str("Cleanup suggestions:\n");
        for hint in &suggestion.data_cleanup_suggestions {
            output.push_str(&format!("  - {}\n", hint));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnTypeSuggestion;
    use crate::parse::parse;

    #[test]
    fn test_format_summary() {
        let data = parse("Id\tName\n1\tAnn\n2\tBea");
        let summary = format_summary(&data, Some(Delimiter::Tab));
        assert!(summary.contains("Delimiter: tab"));
        assert!(summary.contains("Columns: 2"));
        assert!(summary.contains("Rows: 2"));
        assert!(summary.contains("Headers: Id, Name"));
    }

    #[test]
    fn test_format_summary_empty() {
        let summary = format_summary(&ParsedData::empty(), None);
        assert!(summary.contains("Delimiter: (no input)"));
        assert!(summary.contains("Columns: 0"));
    }

    #[test]
    fn test_format_suggestion() {
        let suggestion = AnalysisSuggestion {
            suggested_table_name: "Shops".to_string(),
            data_cleanup_suggestions: vec!["Trim Name values".to_string()],
            column_types: vec![ColumnTypeSuggestion {
                column_name: "Shop_Id".to_string(),
                sql_type: "INT".to_string(),
            }],
        };

        let text = format_suggestion(&suggestion);
        assert!(text.contains("Suggested table name: Shops"));
        assert!(text.contains("- Shop_Id: INT"));
        assert!(text.contains("- Trim Name values"));
    }
}
