use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::{LocusEntry, LocusRegistry};
use crate::cli::OutputFormat;
use crate::core::types::LocusGroup;

#[derive(Args)]
pub struct LociArgs {
    /// Only list loci in this group (e.g. "base-color", "modifiers", "performance")
    #[arg(long)]
    pub group: Option<String>,

    /// Path to custom locus catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute loci subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the group name is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LociArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = if let Some(path) = &args.catalog {
        LocusRegistry::load_from_file(path)?
    } else {
        LocusRegistry::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded locus catalog with {} loci", registry.len());
    }

    let group_filter = args
        .group
        .as_deref()
        .map(str::parse::<LocusGroup>)
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let filtered: Vec<&LocusEntry> = registry
        .entries
        .iter()
        .filter(|e| group_filter.map_or(true, |g| e.group() == g))
        .collect();

    match format {
        OutputFormat::Text => {
            let key_width = filtered
                .iter()
                .map(|e| e.locus.key().len())
                .max()
                .unwrap_or(5)
                .max(5);
            let gene_width = filtered
                .iter()
                .map(|e| e.locus.gene_id().len().min(40))
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Locus Catalog ({} loci)\n", filtered.len());
            println!(
                "{:<key_w$} {:<gene_w$} {:<22} Codes",
                "Locus",
                "Gene",
                "Group",
                key_w = key_width,
                gene_w = gene_width
            );
            println!("{}", "-".repeat(key_width + gene_width + 30));

            for entry in &filtered {
                let gene = entry.locus.gene_id();
                let gene = if gene.len() > 40 {
                    format!("{}...", &gene[..37])
                } else {
                    gene.to_string()
                };
                println!(
                    "{:<key_w$} {:<gene_w$} {:<22} {}",
                    entry.locus.key(),
                    gene,
                    entry.group().to_string(),
                    entry.codes.join(" "),
                    key_w = key_width,
                    gene_w = gene_width
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("locus\tgene\tgroup\tsemantics\tcodes");
            for entry in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    entry.locus.key(),
                    entry.locus.gene_id(),
                    entry.group(),
                    entry.semantics,
                    entry.codes.join(",")
                );
            }
        }
    }

    Ok(())
}
