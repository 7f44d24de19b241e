use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::core::genotype::GenotypeValue;
use crate::core::types::Locus;
use crate::parsing::{ParseError, ResultExtractor};
use crate::utils::validation::{check_entry_limit, normalize_code};

/// Genotype codes keyed directly by locus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenotypeTable {
    values: HashMap<Locus, String>,
}

impl GenotypeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code for a locus, replacing any earlier value
    pub fn insert(&mut self, locus: Locus, code: impl Into<String>) {
        self.values.insert(locus, code.into());
    }

    #[must_use]
    pub fn with(mut self, locus: Locus, code: impl Into<String>) -> Self {
        self.insert(locus, code);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a table from `(name, code)` pairs, where name is a locus key or gene id
    ///
    /// Unknown names and invalid codes are skipped with a warning. A locus listed
    /// more than once must carry the same code each time.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::TooManyEntries` if the entry limit is exceeded, or
    /// `ParseError::InvalidFormat` if a locus is given two different codes.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        let mut count = 0;

        for (name, raw_code) in pairs {
            // Check entry limit for DOS protection
            if check_entry_limit(count).is_some() {
                return Err(ParseError::TooManyEntries(count));
            }
            count += 1;

            let Ok(locus) = name.parse::<Locus>() else {
                warn!(name = %name.trim(), "Ignoring unknown locus");
                continue;
            };

            let Some(code) = normalize_code(raw_code) else {
                warn!(locus = %locus, code = %raw_code, "Ignoring invalid genotype code");
                continue;
            };

            // A locus may be named by key and by gene id; both must agree
            if let Some(existing) = table.values.get(&locus) {
                if *existing != code {
                    let (first, second) = if *existing < code {
                        (existing.as_str(), code.as_str())
                    } else {
                        (code.as_str(), existing.as_str())
                    };
                    return Err(ParseError::InvalidFormat(format!(
                        "Conflicting codes for {locus} ({}): '{first}' and '{second}'",
                        locus.gene_id()
                    )));
                }
                continue;
            }
            table.insert(locus, code);
        }

        Ok(table)
    }
}

impl ResultExtractor for GenotypeTable {
    fn extract(&self, locus: Locus) -> GenotypeValue {
        self.values
            .get(&locus)
            .map_or(GenotypeValue::NoCall(locus), |code| {
                GenotypeValue::called(code.clone())
            })
    }
}

/// Parse a TSV/CSV file with columns: locus, code
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_table_file(path: &Path, delimiter: char) -> Result<GenotypeTable, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_table_text(&content, delimiter)
}

/// Parse TSV/CSV text with columns: locus, code
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has fewer than 2 fields or no
/// entries are found, or `ParseError::TooManyEntries` if the limit is exceeded.
pub fn parse_table_text(text: &str, delimiter: char) -> Result<GenotypeTable, ParseError> {
    let mut pairs = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).collect();

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.trim().to_lowercase()).unwrap_or_default();
            if first == "locus" || first == "gene" || first == "trait" {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        pairs.push((fields[0], fields[1]));
    }

    if pairs.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No genotype entries found".to_string(),
        ));
    }

    GenotypeTable::from_pairs(pairs)
}

/// Parse a JSON object mapping locus key or gene id to genotype code
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not a JSON object of strings.
pub fn parse_json_text(text: &str) -> Result<GenotypeTable, ParseError> {
    let map: HashMap<String, String> = serde_json::from_str(text)?;
    GenotypeTable::from_pairs(map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv_text() {
        let tsv = "locus\tcode\nMC1R\tee\nbLocus\tbb\nPMEL_Merle\tM*m\n";

        let table = parse_table_text(tsv, '\t').unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.extract(Locus::ELocus), GenotypeValue::called("ee"));
        assert_eq!(table.extract(Locus::BLocus), GenotypeValue::called("bb"));
        assert_eq!(table.extract(Locus::Merle), GenotypeValue::called("M*m"));
        assert_eq!(
            table.extract(Locus::Harlequin),
            GenotypeValue::NoCall(Locus::Harlequin)
        );
    }

    #[test]
    fn test_parse_csv_with_comments_and_unknown_loci() {
        let csv = "# exported genotypes\ngene,code\nMITF,Ssp\nIGF1,NN\n";
        let table = parse_table_text(csv, ',').unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.extract(Locus::SLocus).code(), Some("Ssp"));
    }

    #[test]
    fn test_parse_table_missing_field() {
        let err = parse_table_text("MC1R\tee\nTYRP1\n", '\t').unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("Line 2")));
    }

    #[test]
    fn test_parse_table_empty() {
        assert!(matches!(
            parse_table_text("# nothing\n\n", '\t'),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_json_text() {
        let table = parse_json_text(r#"{"kLocus": "KBky", "ASIP": "atat"}"#).unwrap();
        assert_eq!(table.extract(Locus::KLocus).code(), Some("KBky"));
        assert_eq!(table.extract(Locus::ALocus).code(), Some("atat"));
    }

    #[test]
    fn test_key_and_gene_id_must_agree() {
        let table = parse_json_text(r#"{"eLocus": "ee", "MC1R": "ee"}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.extract(Locus::ELocus).code(), Some("ee"));

        for _ in 0..50 {
            let err = parse_json_text(r#"{"eLocus": "ee", "MC1R": "EE"}"#).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid genotype input: Conflicting codes for eLocus (MC1R): 'EE' and 'ee'"
            );
        }
    }

    #[test]
    fn test_duplicate_table_rows_must_agree() {
        let err = parse_table_text("MC1R\tee\neLocus\tEe\n", '\t').unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("Conflicting codes")));
    }

    #[test]
    fn test_parse_json_rejects_non_object() {
        assert!(matches!(
            parse_json_text("[1, 2]"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_too_many_entries() {
        let pairs: Vec<(&str, &str)> = std::iter::repeat(("MC1R", "ee"))
            .take(crate::utils::validation::MAX_GENOTYPE_ENTRIES + 1)
            .collect();
        assert!(matches!(
            GenotypeTable::from_pairs(pairs),
            Err(ParseError::TooManyEntries(_))
        ));
    }
}
