//! Route rewriter CLI.
//!
//! # Architecture Overview
//!
//! ```text
//!   <build_dir>/routes-manifest.json
//!            │
//!            ▼
//!   ┌────────────────┐    ┌────────────────┐    ┌────────────────┐    ┌────────────────┐
//!   │    manifest    │───▶│   validation   │───▶│  routing trie  │───▶│    emitter     │
//!   │     loader     │    │                │    │ + route table  │    │ render/minify  │
//!   └────────────────┘    └────────────────┘    └───────┬────────┘    └───────┬────────┘
//!                                                       │                     │
//!                                                       ▼                     ▼
//!                                               `match` / `inspect`    matcher program
//!                                               (reference matcher)    (size-checked)
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use route_rewriter::config::{load_config, CompilerConfig};
use route_rewriter::observability::init_logging;
use route_rewriter::Compiler;

#[derive(Parser)]
#[command(name = "route-rewriter")]
#[command(about = "Compile a static export's route manifest into an edge URL rewriter", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Build output directory holding the route manifest.
    #[arg(short, long)]
    build_dir: Option<PathBuf>,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the matcher program
    Compile {
        /// Write the program here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show how request paths would be rewritten
    Match {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the compiled route table as JSON
    Inspect,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CompilerConfig::default(),
    };
    if let Some(build_dir) = cli.build_dir {
        config.manifest.build_dir = build_dir;
    }

    let compiler = Compiler::new(config);

    match cli.command {
        Commands::Compile { out } => {
            let program = compiler.compile_build()?;
            match out {
                Some(path) => {
                    fs::write(&path, program.as_str())?;
                    tracing::info!(
                        path = %path.display(),
                        bytes = program.byte_len(),
                        "Matcher program written"
                    );
                }
                None => println!("{program}"),
            }
        }
        Commands::Match { paths } => {
            let manifest = compiler.load()?;
            let table = compiler.route_table(&manifest)?;
            let matcher = compiler.matcher(&table);

            for path in &paths {
                let resolution = matcher.resolve(path);
                let target = resolution.target().unwrap_or(path.as_str());
                println!("{path} -> {target} ({})", resolution.kind());
            }
        }
        Commands::Inspect => {
            let manifest = compiler.load()?;
            let table = compiler.route_table(&manifest)?;
            let json = table.to_json(&compiler.config().routes);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
