mod cli;
mod extract_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays clean for JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Extract {
            ref pdf,
            page,
            ref bbox,
            ref out,
            y_tolerance,
            space_gap_ratio,
        } => extract_cmd::run(pdf, page, bbox, out.as_deref(), y_tolerance, space_gap_ratio),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
