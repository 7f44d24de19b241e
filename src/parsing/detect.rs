use std::path::Path;

use crate::core::genotype::GenotypeValue;
use crate::core::types::{Locus, ProfileLayout};
use crate::parsing::profile::{parse_profile_text, TraitProfile};
use crate::parsing::table::{parse_json_text, parse_table_text, GenotypeTable};
use crate::parsing::{ParseError, ResultExtractor};

/// Supported genotype input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Exported trait profile (standard or breeder layout)
    Report,
    /// Tab-separated `locus<TAB>code` lines
    Tsv,
    /// Comma-separated `locus,code` lines
    Csv,
    /// JSON object `{ "locus": "code" }`
    Json,
}

impl InputFormat {
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Report => "Trait Profile",
            Self::Tsv => "TSV Genotype Table",
            Self::Csv => "CSV Genotype Table",
            Self::Json => "JSON Genotype Map",
        }
    }
}

/// Any parsed input, usable as an extractor
#[derive(Debug, Clone)]
pub enum ParsedInput {
    Table(GenotypeTable),
    Profile(TraitProfile),
}

impl ResultExtractor for ParsedInput {
    fn extract(&self, locus: Locus) -> GenotypeValue {
        match self {
            Self::Table(table) => table.extract(locus),
            Self::Profile(profile) => profile.extract(locus),
        }
    }

    fn layout(&self) -> Option<ProfileLayout> {
        match self {
            Self::Table(_) => None,
            Self::Profile(profile) => Some(profile.layout),
        }
    }
}

/// Detect input format from content and optional filename
///
/// The filename extension wins when present; otherwise the content decides.
#[must_use]
pub fn detect_format(content: &str, filename: Option<&str>) -> InputFormat {
    if let Some(format) = filename.and_then(detect_format_from_filename) {
        return format;
    }
    detect_format_from_content(content)
}

fn detect_format_from_filename(filename: &str) -> Option<InputFormat> {
    let extension = Path::new(filename).extension()?.to_str()?.to_lowercase();

    match extension.as_str() {
        "json" => Some(InputFormat::Json),
        "tsv" => Some(InputFormat::Tsv),
        "csv" => Some(InputFormat::Csv),
        "txt" | "md" => Some(InputFormat::Report),
        _ => None,
    }
}

fn detect_format_from_content(content: &str) -> InputFormat {
    let trimmed = content.trim_start();
    if trimmed.starts_with('{') {
        return InputFormat::Json;
    }

    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(20)
        .collect(); // Sample first 20 lines

    // Profiles have section headings followed by `gene: result` lines
    let has_headings = lines.iter().any(|l| l.starts_with('#'));
    let has_colon_results = lines
        .iter()
        .any(|l| !l.starts_with('#') && l.contains(':'));
    if has_headings && has_colon_results {
        return InputFormat::Report;
    }

    let data_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| !l.starts_with('#'))
        .collect();
    if data_lines.is_empty() {
        return InputFormat::Report;
    }
    if data_lines.iter().all(|l| l.contains('\t')) {
        return InputFormat::Tsv;
    }
    if data_lines.iter().all(|l| l.contains(',')) {
        return InputFormat::Csv;
    }

    InputFormat::Report
}

/// Parse content with the specified format
///
/// `layout` only applies to trait profiles; `None` detects it.
///
/// # Errors
///
/// Returns the underlying `ParseError` for the chosen format.
pub fn parse_with_format(
    content: &str,
    format: InputFormat,
    layout: Option<ProfileLayout>,
) -> Result<ParsedInput, ParseError> {
    match format {
        InputFormat::Report => parse_profile_text(content, layout).map(ParsedInput::Profile),
        InputFormat::Tsv => parse_table_text(content, '\t').map(ParsedInput::Table),
        InputFormat::Csv => parse_table_text(content, ',').map(ParsedInput::Table),
        InputFormat::Json => parse_json_text(content).map(ParsedInput::Table),
    }
}
