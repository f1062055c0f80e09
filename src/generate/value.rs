//! Cell value classification and SQL literal formatting
//!
//! Classification is a single tagged decision over a closed set of kinds;
//! formatting is a separate step per kind. This keeps the escaping rules
//! testable independent of the numeric heuristic, and makes that heuristic
//! one documented decision point instead of scattered conditionals.

/// Classification of one cell into a SQL literal kind.
///
/// Borrowed from the cell so classification allocates nothing; only
/// [`SqlValue::render`] produces the output fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlValue<'a> {
    /// Absent cell or empty string: the unquoted literal `NULL`
    Null,
    /// Passes the numeric heuristic: emitted verbatim, unquoted
    Numeric(&'a str),
    /// Starts with `0x`: treated as a SQL hex literal, emitted verbatim
    Hex(&'a str),
    /// Everything else: single-quoted with internal quotes doubled
    Quoted(&'a str),
}

impl<'a> SqlValue<'a> {
    /// Classify a cell. Total over presence/absence and all string content.
    ///
    /// Precedence: absent/empty → Null, then the numeric check, then the hex
    /// prefix, then quoted. The numeric heuristic is permissive on purpose -
    /// a trimmed cell counts as numeric iff it parses as a finite `f64`
    /// (leading sign, exponents and bare decimals included). Zero-padded
    /// codes and digit-only phone numbers therefore come out unquoted; a
    /// deliberate decision, covered by tests as a known heuristic boundary.
    pub fn classify(cell: Option<&'a str>) -> Self {
        let val = match cell {
            None => return SqlValue::Null,
            Some(v) if v.is_empty() => return SqlValue::Null,
            Some(v) => v,
        };

        if is_numeric(val) {
            return SqlValue::Numeric(val);
        }

        if val.starts_with("0x") {
            return SqlValue::Hex(val);
        }

        SqlValue::Quoted(val)
    }

    /// Render this value as a SQL literal fragment
    pub fn render(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Numeric(val) | SqlValue::Hex(val) => (*val).to_string(),
            SqlValue::Quoted(val) => format!("'{}'", val.replace('\'', "''")),
        }
    }
}

fn is_numeric(val: &str) -> bool {
    // The finite guard rejects "inf"/"NaN" spellings that f64 parsing accepts.
    val.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// Produce the SQL literal fragment for one cell.
///
/// Convenience for `SqlValue::classify(cell).render()`; `None` stands for a
/// missing cell in a ragged row.
pub fn sql_literal(cell: Option<&str>) -> String {
    SqlValue::classify(cell).render()
}
