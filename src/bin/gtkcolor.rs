//! Command-line preview of GTK CSS color variables.
//!
//! Resolves the definitions visible from a stylesheet and prints them,
//! followed by every `@name` reference that would get a color preview.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use gtkcolor::{ColorResolver, FsLoader, LineIndex, ResolveOptions, plan_decorations};

#[derive(Parser, Debug)]
#[command(name = "gtkcolor", version, about = "Preview GTK CSS @define-color variables")]
struct Cli {
    /// Stylesheet to resolve
    file: PathBuf,

    /// Only print the resolved definitions
    #[arg(long)]
    definitions_only: bool,

    /// Extension appended to extension-less imports
    #[arg(long, default_value = gtkcolor::base::constants::DEFAULT_EXTENSION)]
    default_extension: String,

    /// Log resolution details (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "gtkcolor=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ResolveOptions::new().with_default_extension(cli.default_extension);
    let resolver = ColorResolver::new(FsLoader::new()).with_options(options);

    let text = match resolver.read_entry(&cli.file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let resolution = resolver.resolution_for_text(&cli.file, &text);

    for path in &resolution.visited {
        tracing::info!(file = %path.display(), "visited");
    }

    println!("Definitions ({}):", resolution.table.len());
    for (name, value) in resolution.table.iter() {
        match gtkcolor::to_canonical_hex(value) {
            Some(color) => println!("  @{name} = {value}  [{color}]"),
            None => println!("  @{name} = {value}"),
        }
    }

    if cli.definitions_only {
        return ExitCode::SUCCESS;
    }

    let plan = plan_decorations(&text, &resolution.table);
    let line_index = LineIndex::new(&text);
    println!("\nPreviews ({}):", plan.markers.len());
    for marker in &plan.markers {
        let start = line_index.line_col(marker.range.start());
        let foreground = marker.color.contrast_foreground();
        println!(
            "  {}:{}  @{}  {} on {}",
            start.line + 1,
            start.col + 1,
            marker.name,
            foreground,
            marker.color
        );
    }

    ExitCode::SUCCESS
}
