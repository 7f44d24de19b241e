use clap::Parser;
use tracing_subscriber::EnvFilter;

use coat_decoder::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("coat_decoder=debug,info")
    } else {
        EnvFilter::new("coat_decoder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Interpret(args) => {
            cli::interpret::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Loci(args) => {
            cli::loci::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
