use chrono::Utc;
use tracing::{debug, warn};

use crate::catalog::store::LocusRegistry;
use crate::core::report::Report;
use crate::core::statement::GroupInterpretation;
use crate::core::types::{Locus, LocusGroup};
use crate::interpret::base_color::{summarize_base_color, BaseColorGenotypes};
use crate::interpret::body::{summarize_body, BodyGenotypes};
use crate::interpret::coat_modifiers::{summarize_coat_modifiers, CoatModifierGenotypes};
use crate::interpret::other_coat::{summarize_other_coat, OtherCoatGenotypes};
use crate::interpret::performance::{summarize_performance, PerformanceGenotypes};
use crate::interpret::size::summarize_size;
use crate::parsing::ResultExtractor;

/// Configuration for the interpreter
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Warn about called codes missing from the registry vocabulary
    pub check_vocabulary: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            check_vocabulary: true,
        }
    }
}

/// Runs every group evaluator over one subject's genotypes
pub struct Interpreter<'a> {
    registry: &'a LocusRegistry,
    config: InterpreterConfig,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default configuration
    pub fn new(registry: &'a LocusRegistry) -> Self {
        Self {
            registry,
            config: InterpreterConfig::default(),
        }
    }

    /// Create an interpreter with custom configuration
    pub fn with_config(registry: &'a LocusRegistry, config: InterpreterConfig) -> Self {
        Self { registry, config }
    }

    /// Interpret all groups, in report order
    pub fn interpret(&self, extractor: &dyn ResultExtractor) -> Report {
        let groups: Vec<GroupInterpretation> = LocusGroup::ALL
            .iter()
            .map(|&group| Self::interpret_group(group, extractor))
            .collect();

        let warnings = if self.config.check_vocabulary {
            self.vocabulary_warnings(extractor)
        } else {
            Vec::new()
        };

        debug!(
            groups = groups.len(),
            warnings = warnings.len(),
            "Interpretation complete"
        );

        Report {
            layout: extractor.layout(),
            generated_at: Utc::now(),
            groups,
            warnings,
        }
    }

    /// Interpret a single group
    pub fn interpret_group(
        group: LocusGroup,
        extractor: &dyn ResultExtractor,
    ) -> GroupInterpretation {
        match group {
            LocusGroup::BaseColor => {
                summarize_base_color(&BaseColorGenotypes::extract(extractor))
            }
            LocusGroup::CoatColorModifiers => {
                summarize_coat_modifiers(&CoatModifierGenotypes::extract(extractor))
            }
            LocusGroup::OtherCoatTraits => {
                summarize_other_coat(&OtherCoatGenotypes::extract(extractor))
            }
            LocusGroup::BodyFeatures => summarize_body(&BodyGenotypes::extract(extractor)),
            LocusGroup::BodySize => summarize_size(),
            LocusGroup::Performance => {
                summarize_performance(&PerformanceGenotypes::extract(extractor))
            }
        }
    }

    fn vocabulary_warnings(&self, extractor: &dyn ResultExtractor) -> Vec<String> {
        let mut warnings = Vec::new();

        for locus in Locus::ALL {
            let value = extractor.extract(locus);
            let Some(code) = value.code() else {
                continue;
            };
            if self.registry.is_valid_code(locus, code) {
                continue;
            }

            warn!(locus = %locus, code = %code, "Genotype code not in registry vocabulary");
            warnings.push(format!(
                "{} ({}): code '{code}' is not a recognized genotype",
                locus.label(),
                locus.gene_id()
            ));
        }

        warnings
    }
}
