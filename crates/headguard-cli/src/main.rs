//! HeadGuard CLI
//!
//! Command-line interface for include-guard maintenance.

use anyhow::Result;
use clap::{Parser, Subcommand};
use headguard_core::{build_guard_name, Config};
use headguard_rewrite::{run_pipeline, scan_headers, verify_listings};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "headguard")]
#[command(author, version, about = "Include-guard maintenance tool", long_about = None)]
struct Cli {
    /// Configuration file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert include guards into every header in the manifest
    Apply,

    /// Print the guard name for a header path
    Name {
        /// Header file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Regenerate the header manifest from the project tree
    Scan {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cross-check the header listing against modified files
    Verify {
        /// Modified-files listing (`git status -s` output)
        #[arg(long, value_name = "FILE")]
        status: PathBuf,

        /// Header listing to check
        #[arg(long, value_name = "FILE")]
        listing: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Apply => cmd_apply(&config)?,
        Commands::Name { file } => cmd_name(&config, &file)?,
        Commands::Scan { output } => cmd_scan(&config, output.as_deref())?,
        Commands::Verify { status, listing } => cmd_verify(&config, &status, &listing)?,
    }

    Ok(())
}

fn cmd_apply(config: &Config) -> Result<()> {
    println!("📂 Applying include guards from {}", config.manifest.display());

    let report = run_pipeline(config)?;

    println!("\n📊 Summary:");
    println!("   Processed: {}", report.processed);
    println!("   Guarded: {}", report.guarded);
    println!("   Already guarded: {}", report.already_guarded);
    println!("   No pragma: {}", report.no_pragma);
    println!("   Failed: {}", report.failed());

    for failure in &report.failures {
        println!("   ✗ {}: {}", failure.path.display(), failure.error);
    }

    Ok(())
}

fn cmd_name(config: &Config, file: &Path) -> Result<()> {
    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        config.resolved_root()?.join(file)
    };

    let guard = build_guard_name(&path.to_string_lossy(), &config.style)?;
    println!("{}", guard);

    Ok(())
}

fn cmd_scan(config: &Config, output: Option<&Path>) -> Result<()> {
    let base = config.resolved_root()?.join(&config.project);
    let headers = scan_headers(&base, &config.scan)?;

    let mut lines = String::new();
    for header in &headers {
        let relative = header.strip_prefix(&base).unwrap_or(header);
        lines.push_str(&format!("./{}\n", relative.display()));
    }

    if let Some(out_path) = output {
        std::fs::write(out_path, &lines)?;
        println!(
            "📋 {} headers written to {}",
            headers.len(),
            out_path.display()
        );
    } else {
        print!("{}", lines);
    }

    Ok(())
}

fn cmd_verify(config: &Config, status: &Path, listing: &Path) -> Result<()> {
    let report = verify_listings(status, listing, &config.verify)?;

    println!("📋 Modified files: {}", report.modified);
    for entry in &report.unmatched {
        println!("   ✗ {}", entry);
    }
    println!("   Matched: {}", report.matched);

    Ok(())
}
