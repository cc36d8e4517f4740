//! CSV parsing for the taxonomy document.
//!
//! The taxonomy is a small, well-known CSV file, so the reader is deliberately
//! lenient rather than RFC-4180 complete:
//!
//! - Fields are comma separated; a `"` toggles "inside quotes" so quoted
//!   fields may contain commas. Quote characters themselves are dropped and
//!   doubled quotes are not treated as an escape.
//! - Each field is trimmed, which also absorbs `\r` from CRLF line endings.
//! - The header row is split on plain commas.
//! - Blank lines are ignored, and rows with fewer fields than the header
//!   are skipped.
//!
//! | Header column | Rule field |
//! |---------------|------------|
//! | `tag` | [`TaxonomyRule::tag`] |
//! | `Regular expression` | [`TaxonomyRule::include_pattern`] |
//! | `Exclude regular expression` | [`TaxonomyRule::exclude_pattern`] |
//! | `Code` / `code` | [`TaxonomyRule::code`] |
//! | `Category` / `category` | [`TaxonomyRule::category`] |
//! | `Level` / `level` | [`TaxonomyRule::level`] |

use super::rule::TaxonomyRule;
use super::table::RuleTable;
use crate::core::error::DomainError;

pub const TAG_COLUMN: &str = "tag";
pub const INCLUDE_COLUMN: &str = "Regular expression";
pub const EXCLUDE_COLUMN: &str = "Exclude regular expression";

const CODE_COLUMNS: [&str; 2] = ["Code", "code"];
const CATEGORY_COLUMNS: [&str; 2] = ["Category", "category"];
const LEVEL_COLUMNS: [&str; 2] = ["Level", "level"];

/// A parsed taxonomy document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTaxonomy {
    pub table: RuleTable,
    /// Rows dropped because they had fewer fields than the header
    pub skipped_rows: usize,
}

/// Column positions resolved from the header row
struct ColumnMap {
    width: usize,
    tag: usize,
    include: usize,
    exclude: Option<usize>,
    code: Option<usize>,
    category: Option<usize>,
    level: Option<usize>,
}

impl ColumnMap {
    fn from_header(headers: &[String]) -> Result<Self, DomainError> {
        let position = |name: &str| headers.iter().position(|h| h == name);
        let first_of = |names: &[&str]| names.iter().find_map(|name| position(name));

        Ok(Self {
            width: headers.len(),
            tag: position(TAG_COLUMN)
                .ok_or_else(|| DomainError::MissingColumn(TAG_COLUMN.to_string()))?,
            include: position(INCLUDE_COLUMN)
                .ok_or_else(|| DomainError::MissingColumn(INCLUDE_COLUMN.to_string()))?,
            exclude: position(EXCLUDE_COLUMN),
            code: first_of(&CODE_COLUMNS),
            category: first_of(&CATEGORY_COLUMNS),
            level: first_of(&LEVEL_COLUMNS),
        })
    }

    fn to_rule(&self, values: &[String]) -> TaxonomyRule {
        let optional = |index: Option<usize>| {
            index
                .and_then(|i| values.get(i))
                .filter(|v| !v.is_empty())
                .cloned()
        };

        TaxonomyRule {
            tag: values[self.tag].clone(),
            include_pattern: values[self.include].clone(),
            exclude_pattern: self.exclude.map(|i| values[i].clone()),
            code: optional(self.code),
            category: optional(self.category),
            level: optional(self.level).and_then(|v| v.parse().ok()),
        }
    }
}

/// Parse the full taxonomy document into a rule table.
///
/// # Errors
///
/// - [`DomainError::EmptyTaxonomy`] when there is no header row
/// - [`DomainError::MissingColumn`] when `tag` or `Regular expression` is absent
///
/// # Examples
///
/// ```
/// use prospie_domain::taxonomy::parse_taxonomy;
///
/// let csv = "tag,Regular expression,Exclude regular expression\n\
///            Education,\"school,college\",pre-school\n\
///            broken row\n";
/// let parsed = parse_taxonomy(csv).unwrap();
/// assert_eq!(parsed.table.len(), 1);
/// assert_eq!(parsed.skipped_rows, 1);
/// assert_eq!(parsed.table.rules()[0].include_pattern, "school,college");
/// ```
pub fn parse_taxonomy(text: &str) -> Result<ParsedTaxonomy, DomainError> {
    let mut lines = text.split('\n');

    let header_line = lines.next().unwrap_or_default();
    if header_line.trim().is_empty() {
        return Err(DomainError::EmptyTaxonomy);
    }

    let headers: Vec<String> = header_line.split(',').map(clean_field).collect();
    let columns = ColumnMap::from_header(&headers)?;

    let mut rules = Vec::new();
    let mut skipped_rows = 0;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let values = parse_csv_line(line);
        if values.len() < columns.width {
            skipped_rows += 1;
            continue;
        }

        rules.push(columns.to_rule(&values));
    }

    Ok(ParsedTaxonomy {
        table: RuleTable::new(rules),
        skipped_rows,
    })
}

/// Split one CSV line into cleaned fields, honouring quoted commas.
///
/// # Examples
///
/// ```
/// use prospie_domain::taxonomy::parse_csv_line;
///
/// assert_eq!(parse_csv_line(r#"a, "b,c" ,d"#), vec!["a", "b,c", "d"]);
/// assert_eq!(parse_csv_line(""), vec![""]);
/// ```
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(clean_field(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(clean_field(&current));
    fields
}

/// Trim a field and strip one quote from each boundary.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Code,tag,Category,Level,Regular expression,Exclude regular expression";

    #[test]
    fn test_parse_csv_line_plain() {
        assert_eq!(parse_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_quoted_commas() {
        assert_eq!(
            parse_csv_line(r#"ED,"Education, training",\b(school|college)\b"#),
            vec!["ED", "Education, training", r"\b(school|college)\b"]
        );
    }

    #[test]
    fn test_parse_csv_line_doubled_quotes_are_toggles() {
        // "" closes and reopens, so the quote characters simply vanish
        assert_eq!(parse_csv_line(r#""say ""hi"", ok",x"#), vec!["say hi, ok", "x"]);
    }

    #[test]
    fn test_parse_csv_line_trims_and_keeps_empty_fields() {
        assert_eq!(parse_csv_line(" a ,, b\r"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_full_document() {
        let csv = format!(
            "{HEADER}\n\
             BE-AG-YO,Young people,Beneficiaries,3,\"young (people|person)|youth\",\n\
             ED,Education,Activities,1,school,pre-school\n"
        );
        let parsed = parse_taxonomy(&csv).unwrap();
        assert_eq!(parsed.skipped_rows, 0);
        assert_eq!(parsed.table.len(), 2);

        let youth = &parsed.table.rules()[0];
        assert_eq!(youth.tag, "Young people");
        assert_eq!(youth.include_pattern, "young (people|person)|youth");
        assert_eq!(youth.exclude_pattern(), None);
        assert_eq!(youth.code.as_deref(), Some("BE-AG-YO"));
        assert_eq!(youth.category.as_deref(), Some("Beneficiaries"));
        assert_eq!(youth.level, Some(3));

        let education = &parsed.table.rules()[1];
        assert_eq!(education.exclude_pattern(), Some("pre-school"));
        assert_eq!(education.level, Some(1));
    }

    #[test]
    fn test_malformed_row_is_skipped_without_affecting_later_rows() {
        let csv = "tag,Regular expression,Exclude regular expression\n\
                   Arts,arts\n\
                   Education,school,pre-school\n";
        let parsed = parse_taxonomy(csv).unwrap();
        assert_eq!(parsed.skipped_rows, 1);
        assert_eq!(parsed.table.len(), 1);
        assert_eq!(parsed.table.rules()[0].tag, "Education");
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let csv = "\"tag\",\"Regular expression\"\r\n\r\nArts,\\barts?\\b\r\n\n";
        let parsed = parse_taxonomy(csv).unwrap();
        assert_eq!(parsed.skipped_rows, 0);
        assert_eq!(parsed.table.len(), 1);
        assert_eq!(parsed.table.rules()[0].include_pattern, r"\barts?\b");
        assert_eq!(parsed.table.rules()[0].exclude_pattern, None);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let csv = "tag,Regular expression\nArts,arts,unexpected,extra\n";
        let parsed = parse_taxonomy(csv).unwrap();
        assert_eq!(parsed.table.rules()[0].tag, "Arts");
    }

    #[test]
    fn test_unparsable_level_becomes_none() {
        let csv = "tag,Level,Regular expression\nArts,top,arts\n";
        let parsed = parse_taxonomy(csv).unwrap();
        assert_eq!(parsed.table.rules()[0].level, None);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse_taxonomy(""), Err(DomainError::EmptyTaxonomy));
        assert_eq!(parse_taxonomy("  \n"), Err(DomainError::EmptyTaxonomy));
    }

    #[test]
    fn test_missing_required_column() {
        assert_eq!(
            parse_taxonomy("tag,pattern\nArts,arts\n"),
            Err(DomainError::MissingColumn("Regular expression".to_string()))
        );
        assert_eq!(
            parse_taxonomy("label,Regular expression\nArts,arts\n"),
            Err(DomainError::MissingColumn("tag".to_string()))
        );
    }
}
