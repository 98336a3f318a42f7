//! SQL literal helpers

/// SQL column types whose values are emitted unquoted.
///
/// View metadata reports column types as free-form uppercase names, so the
/// check is by name rather than by a closed enum.
pub const SQL_NUMBER_TYPES: &[&str] = &[
    "TINYINT",
    "SMALLINT",
    "MEDIUMINT",
    "INT",
    "INTEGER",
    "BIGINT",
    "FLOAT",
    "DOUBLE",
    "DECIMAL",
    "NUMERIC",
    "REAL",
    "NUMBER",
    "MONEY",
];

/// Check whether a SQL column type name is numeric (case-insensitive)
pub fn is_number_type(sql_type: &str) -> bool {
    SQL_NUMBER_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(sql_type))
}

/// Quote a SQL string literal, doubling embedded single quotes
///
/// # Example
///
/// ```
/// use glint_controls::utils::sql::quote_literal;
///
/// assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
/// ```
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Render a column comparison value: quoted unless the column type is numeric
///
/// An empty value or an empty type name passes through unchanged.
pub fn valid_column_value(value: &str, sql_type: &str) -> String {
    if value.is_empty() || sql_type.is_empty() {
        return value.to_string();
    }
    if is_number_type(sql_type) {
        value.to_string()
    } else {
        quote_literal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_type_unquoted() {
        assert_eq!(valid_column_value("5", "NUMBER"), "5");
        assert_eq!(valid_column_value("3.14", "DOUBLE"), "3.14");
    }

    #[test]
    fn test_varchar_quoted() {
        assert_eq!(valid_column_value("abc", "VARCHAR"), "'abc'");
    }

    #[test]
    fn test_number_type_case_insensitive() {
        assert_eq!(valid_column_value("5", "number"), "5");
        assert_eq!(valid_column_value("5", "Bigint"), "5");
    }

    #[test]
    fn test_empty_value_passthrough() {
        assert_eq!(valid_column_value("", "VARCHAR"), "");
    }

    #[test]
    fn test_empty_type_passthrough() {
        assert_eq!(valid_column_value("abc", ""), "abc");
    }

    #[test]
    fn test_quote_literal_plain() {
        assert_eq!(quote_literal("hello"), "'hello'");
    }

    #[test]
    fn test_quote_literal_embedded_quote() {
        assert_eq!(quote_literal("it's"), "'it''s'");
    }

    #[test]
    fn test_quoted_value_escapes() {
        assert_eq!(valid_column_value("it's", "VARCHAR"), "'it''s'");
    }
}
