use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::genotype::GenotypeValue;
use crate::core::types::{Locus, ProfileLayout};
use crate::parsing::{ParseError, ResultExtractor};
use crate::utils::validation::{check_entry_limit, normalize_code};

/// A trait section of an exported profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSection {
    pub title: String,
    /// Gene identifiers listed in this section, in order
    pub genes: Vec<String>,
}

/// Trait results read from an exported laboratory profile
///
/// The export is plain text. Each trait section starts with a `#` heading and
/// lists one result per line as `<GENE>: <result>`. In the standard layout the
/// result is the genotype code itself. In the breeder layout it is a label with
/// the code in trailing parentheses, e.g. `MC1R: E Locus (ee)`.
#[derive(Debug, Clone)]
pub struct TraitProfile {
    pub layout: ProfileLayout,
    pub sections: Vec<ProfileSection>,
    /// Genotype codes for recognized loci
    results: HashMap<Locus, String>,
    /// Results for genes the rule set does not interpret (e.g. size genes)
    pub other_results: Vec<(String, String)>,
}

impl TraitProfile {
    /// Number of recognized loci with a result
    #[must_use]
    pub fn called_count(&self) -> usize {
        self.results.len()
    }
}

impl ResultExtractor for TraitProfile {
    fn extract(&self, locus: Locus) -> GenotypeValue {
        match self.results.get(&locus) {
            Some(code) => GenotypeValue::called(code.clone()),
            None => {
                debug!(gene = locus.gene_id(), "No result in profile");
                GenotypeValue::NoCall(locus)
            }
        }
    }

    fn layout(&self) -> Option<ProfileLayout> {
        Some(self.layout)
    }
}

/// Parse a trait profile export file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_profile_file(
    path: &Path,
    layout: Option<ProfileLayout>,
) -> Result<TraitProfile, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_profile_text(&content, layout)
}

/// Parse a trait profile export
///
/// When `layout` is `None` it is detected from the number of trait sections.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for result lines outside a section or
/// without a `:` separator, `ParseError::UnknownLayout` if the layout cannot be
/// detected, or `ParseError::TooManyEntries` if the limit is exceeded.
pub fn parse_profile_text(
    text: &str,
    layout: Option<ProfileLayout>,
) -> Result<TraitProfile, ParseError> {
    let mut sections: Vec<ProfileSection> = Vec::new();
    let mut raw_results: Vec<(String, String)> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(title) = line.strip_prefix('#') {
            sections.push(ProfileSection {
                title: title.trim_start_matches('#').trim().to_string(),
                genes: Vec::new(),
            });
            continue;
        }

        let line_num = i + 1;

        let Some(section) = sections.last_mut() else {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} appears before any trait section heading"
            )));
        };

        let Some((gene, result)) = line.split_once(':') else {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} is not a '<gene>: <result>' line"
            )));
        };

        // Check entry limit for DOS protection
        if check_entry_limit(raw_results.len()).is_some() {
            return Err(ParseError::TooManyEntries(raw_results.len()));
        }

        let gene = gene.trim().to_string();
        section.genes.push(gene.clone());
        raw_results.push((gene, result.trim().to_string()));
    }

    let layout = match layout {
        Some(layout) => {
            if layout.section_count() != sections.len() {
                warn!(
                    layout = %layout,
                    sections = sections.len(),
                    "Section count does not match the requested profile layout"
                );
            }
            layout
        }
        None => ProfileLayout::from_section_count(sections.len())
            .ok_or(ParseError::UnknownLayout(sections.len()))?,
    };

    let mut results = HashMap::new();
    let mut other_results = Vec::new();

    for (gene, result) in raw_results {
        let Ok(locus) = gene.parse::<Locus>() else {
            other_results.push((gene, result));
            continue;
        };

        match extract_code(&result, layout) {
            Some(code) => {
                results.insert(locus, code);
            }
            None => warn!(
                gene = %gene,
                result = %result,
                layout = %layout,
                "Could not read a genotype code from result"
            ),
        }
    }

    Ok(TraitProfile {
        layout,
        sections,
        results,
        other_results,
    })
}

/// Pull the genotype code out of a result according to the layout
fn extract_code(result: &str, layout: ProfileLayout) -> Option<String> {
    match layout {
        ProfileLayout::Standard => normalize_code(result),
        ProfileLayout::Breeder => breeder_code(result).and_then(normalize_code),
    }
}

/// Code inside the trailing parenthesised group, e.g. `E Locus (ee)` -> `ee`
fn breeder_code(result: &str) -> Option<&str> {
    let result = result.trim_end();
    let inner = result.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    Some(&inner[open + 1..])
}
