//! A1-style cell reference parsing.
//!
//! A reference is a column label followed by a 1-based row number
//! ("A1", "B20"). Column labels are matched against the store's column
//! display names, which need not be ASCII, so the split point is the
//! first ASCII digit rather than the first non-letter.

/// Parsed reference: column display name plus 0-based row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRef {
    pub column: String,
    pub row: usize,
}

/// Parse an A1-style reference.
pub fn parse(reference: &str) -> Result<GridRef, String> {
    let trimmed = reference.trim();
    let split = trimmed
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| format!("'{}': missing row number", reference))?;

    let (column, digits) = trimmed.split_at(split);
    if column.is_empty() {
        return Err(format!("'{}': missing column label", reference));
    }

    let row: usize = digits
        .parse()
        .map_err(|_| format!("'{}': invalid row number", reference))?;
    if row == 0 {
        return Err(format!("'{}': row numbers start at 1", reference));
    }

    Ok(GridRef {
        column: column.to_string(),
        row: row - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(
            parse("A1").unwrap(),
            GridRef {
                column: "A".to_string(),
                row: 0
            }
        );
        assert_eq!(parse("B20").unwrap().row, 19);
    }

    #[test]
    fn test_parse_non_ascii_column() {
        let r = parse("Я3").unwrap();
        assert_eq!(r.column, "Я");
        assert_eq!(r.row, 2);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse("A").is_err());
        assert!(parse("12").is_err());
        assert!(parse("A0").is_err());
        assert!(parse("").is_err());
    }
}
