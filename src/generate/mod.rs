//! SQL statement generation
//!
//! Turns a [`ParsedData`] plus [`GenerationSettings`] into SQL Server-flavored
//! statement text (bracket-quoted identifiers, one statement per row).
//!
//! The generator never returns an error: every failure mode - no data,
//! missing or unresolvable primary key, the unimplemented UPSERT - comes back
//! as `--` comment text, so a display surface only ever renders a string.

pub mod value;

pub use value::{SqlValue, sql_literal};

use crate::models::{GenerationSettings, ParsedData, SqlOperation};

/// Comment returned when there are no headers or no rows to generate from
pub const NO_DATA_COMMENT: &str = "-- No data provided";

/// Comment returned when UPDATE is requested without a primary key
pub const MISSING_PRIMARY_KEY_COMMENT: &str =
    "-- Please specify a Primary Key for UPDATE statements";

/// Generate SQL for the parsed data under the given settings.
///
/// Pure dispatch on the operation; same inputs always produce the same text.
/// The identity-insert wrapper is emitted only around actual statement
/// output - the empty-data and UPDATE error comments short-circuit without
/// it.
pub fn generate(data: &ParsedData, settings: &GenerationSettings) -> String {
    if data.is_empty() {
        return NO_DATA_COMMENT.to_string();
    }

    let mut sql = String::new();

    if settings.identity_insert {
        sql.push_str(&format!(
            "SET IDENTITY_INSERT [{}] ON;\n\n",
            settings.table_name
        ));
    }

    match settings.operation {
        SqlOperation::Insert => generate_insert(data, settings, &mut sql),
        SqlOperation::Update => match generate_update(data, settings, &mut sql) {
            Ok(()) => {}
            // Short-circuit: the comment replaces everything, wrapper included.
            Err(comment) => return comment,
        },
        SqlOperation::Upsert => generate_upsert(data, settings, &mut sql),
    }

    if settings.identity_insert {
        sql.push_str(&format!(
            "\nSET IDENTITY_INSERT [{}] OFF;",
            settings.table_name
        ));
    }

    sql
}

/// Bracket-quote an identifier. The name is interpolated verbatim; `]` is
/// not escaped.
fn bracket(identifier: &str) -> String {
    format!("[{identifier}]")
}

fn generate_insert(data: &ParsedData, settings: &GenerationSettings, sql: &mut String) {
    // Column list is constant across rows; compute it once per call.
    let column_list = data
        .headers
        .iter()
        .map(|h| bracket(h))
        .collect::<Vec<_>>()
        .join(", ");

    for row in &data.rows {
        let values = (0..data.headers.len())
            .map(|i| sql_literal(row.get(i).map(String::as_str)))
            .collect::<Vec<_>>()
            .join(", ");

        sql.push_str(&format!(
            "INSERT INTO [{}] ({})\nVALUES ({});\n",
            settings.table_name, column_list, values
        ));
    }
}

fn generate_update(
    data: &ParsedData,
    settings: &GenerationSettings,
    sql: &mut String,
) -> Result<(), String> {
    if !settings.has_primary_key() {
        return Err(MISSING_PRIMARY_KEY_COMMENT.to_string());
    }

    let pk_lower = settings.primary_key.to_lowercase();
    let pk_index = data
        .headers
        .iter()
        .position(|h| h.to_lowercase() == pk_lower)
        .ok_or_else(|| {
            format!(
                "-- Primary Key [{}] not found in columns",
                settings.primary_key
            )
        })?;

    for row in &data.rows {
        // The primary-key column is excluded from the SET clause entirely.
        let sets = data
            .headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pk_index)
            .map(|(i, h)| format!("{} = {}", bracket(h), sql_literal(row.get(i).map(String::as_str))))
            .collect::<Vec<_>>()
            .join(", ");

        let pk_value = sql_literal(row.get(pk_index).map(String::as_str));

        sql.push_str(&format!(
            "UPDATE [{}] SET {} WHERE {} = {};\n",
            settings.table_name,
            sets,
            bracket(&settings.primary_key),
            pk_value
        ));
    }

    Ok(())
}

// Placeholder output: descriptive comments, not a MERGE statement.
fn generate_upsert(data: &ParsedData, settings: &GenerationSettings, sql: &mut String) {
    sql.push_str(&format!(
        "-- UPSERT logic (MERGE statement) for {} rows...\n",
        data.row_count()
    ));

    let key = if settings.has_primary_key() {
        settings.primary_key.as_str()
    } else {
        "PK"
    };
    sql.push_str(&format!(
        "-- Suggesting MERGE for [{}] based on [{}]\n",
        settings.table_name, key
    ));
}
