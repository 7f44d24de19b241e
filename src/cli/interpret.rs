use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::LocusRegistry;
use crate::cli::OutputFormat;
use crate::core::report::Report;
use crate::core::types::ProfileLayout;
use crate::interpret::{Interpreter, InterpreterConfig};
use crate::parsing::detect::{detect_format, parse_with_format, InputFormat, ParsedInput};
use crate::utils::validation::validate_text_content;

/// Profile layout selection
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum LayoutArg {
    /// Detect from the number of trait sections
    #[default]
    Auto,
    /// Six sections, bare genotype codes
    Standard,
    /// Five sections, codes in trailing parentheses
    Breeder,
}

impl LayoutArg {
    #[must_use]
    pub fn to_layout(self) -> Option<ProfileLayout> {
        match self {
            Self::Auto => None,
            Self::Standard => Some(ProfileLayout::Standard),
            Self::Breeder => Some(ProfileLayout::Breeder),
        }
    }
}

/// Input format selection
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum InputFormatArg {
    /// Detect from the file extension, then the content
    #[default]
    Auto,
    /// Exported trait profile
    Report,
    /// Tab-separated `locus<TAB>code` lines
    Tsv,
    /// Comma-separated `locus,code` lines
    Csv,
    /// JSON object `{ "locus": "code" }`
    Json,
}

impl InputFormatArg {
    #[must_use]
    pub fn to_format(self) -> Option<InputFormat> {
        match self {
            Self::Auto => None,
            Self::Report => Some(InputFormat::Report),
            Self::Tsv => Some(InputFormat::Tsv),
            Self::Csv => Some(InputFormat::Csv),
            Self::Json => Some(InputFormat::Json),
        }
    }
}

#[derive(Args)]
pub struct InterpretArgs {
    /// Input file (trait profile export, TSV, CSV, or JSON)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format
    #[arg(long, value_enum, default_value = "auto")]
    pub input_format: InputFormatArg,

    /// Trait profile layout
    #[arg(long, value_enum, default_value = "auto")]
    pub layout: LayoutArg,

    /// Path to custom locus catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Exit with an error if any code is unrecognized or any group failed to process
    #[arg(long)]
    pub strict: bool,
}

/// Execute interpret subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, the catalog cannot be
/// loaded, or `--strict` is set and the report is not clean.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InterpretArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let parsed = parse_input(&args, verbose)?;

    let registry = if let Some(path) = &args.catalog {
        LocusRegistry::load_from_file(path)?
    } else {
        LocusRegistry::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded locus catalog with {} loci", registry.len());
    }

    let interpreter = Interpreter::with_config(&registry, InterpreterConfig::default());
    let report = interpreter.interpret(&parsed);

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    if args.strict && !report.is_clean() {
        let failed = report
            .groups
            .iter()
            .filter(|g| !g.outcome.is_complete())
            .count();
        anyhow::bail!(
            "Strict mode: {} unrecognized code(s) and {failed} group(s) that could not be fully processed",
            report.warnings.len()
        );
    }

    Ok(())
}

fn parse_input(args: &InterpretArgs, verbose: bool) -> anyhow::Result<ParsedInput> {
    use std::io::{self, Read};

    let (bytes, filename) = if args.input.to_string_lossy() == "-" {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        (buffer, None)
    } else {
        let bytes = std::fs::read(&args.input)?;
        let filename = args
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        (bytes, filename)
    };

    let content = validate_text_content(&bytes)?;

    let format = args
        .input_format
        .to_format()
        .unwrap_or_else(|| detect_format(content, filename.as_deref()));

    if verbose {
        eprintln!("Reading input as {}", format.display_name());
    }

    Ok(parse_with_format(content, format, args.layout.to_layout())?)
}

fn print_text_report(report: &Report) {
    match report.layout {
        Some(layout) => println!("Coat Genotype Report ({layout} layout)"),
        None => println!("Coat Genotype Report"),
    }

    for group in &report.groups {
        println!("\n== {} ==", group.group);
        if let Some(quick) = &group.quick_genotype {
            println!("[Quick Genotype: {quick}]");
        }
        if let Some(preamble) = &group.preamble {
            println!("{preamble}");
        }
        for statement in group.statements() {
            println!("  - {statement}");
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    println!();
}

fn print_tsv_report(report: &Report) {
    println!("group\tquick_genotype\tseverity\tstatement");
    for group in &report.groups {
        let quick = group.quick_genotype.as_deref().unwrap_or("");
        for statement in group.statements() {
            println!(
                "{}\t{quick}\t{}\t{}",
                group.group, statement.severity, statement.text
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_arg() {
        assert_eq!(LayoutArg::Auto.to_layout(), None);
        assert_eq!(
            LayoutArg::Standard.to_layout(),
            Some(ProfileLayout::Standard)
        );
        assert_eq!(LayoutArg::Breeder.to_layout(), Some(ProfileLayout::Breeder));
    }

    #[test]
    fn test_input_format_arg() {
        assert_eq!(InputFormatArg::Auto.to_format(), None);
        assert_eq!(InputFormatArg::default().to_format(), None);
        assert_eq!(InputFormatArg::Report.to_format(), Some(InputFormat::Report));
        assert_eq!(InputFormatArg::Json.to_format(), Some(InputFormat::Json));
    }
}
