//! CLI entry point for ahk-hotkey-parser
//!
//! Provides command-line interface for checking a script for lines the
//! parser does not recognize, and for listing recognized expressions.

use clap::{Parser, Subcommand};
use colored::*;
use ahk_hotkey_parser::{core::Expression, script::ScriptFile};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ahk-hotkey-parser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log parsing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report lines that are neither comments nor hotkeys
    Check {
        /// Path to AutoHotkey script
        script: PathBuf,
    },

    /// List recognized comments and hotkeys
    List {
        /// Path to AutoHotkey script
        script: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { script } => check_script(&script)?,
        Commands::List { script, json } => list_expressions(&script, json)?,
    }

    Ok(())
}

/// RUST_LOG wins unless --verbose is given
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Check script for unrecognized lines
fn check_script(script_path: &PathBuf) -> anyhow::Result<()> {
    println!("{} Parsing script: {}", "→".cyan(), script_path.display());

    let script = ScriptFile::load(script_path)
        .map_err(|e| anyhow::anyhow!("Failed to load script: {}", e))?;
    let report = script.report();

    println!(
        "{} Recognized {} of {} lines\n",
        "✓".green(),
        report.matched(),
        report.lines().len()
    );

    let unrecognized: Vec<_> = report.unrecognized().collect();

    if unrecognized.is_empty() {
        println!("{} {}", "✓".green().bold(), "Every line recognized!".bold());
        return Ok(());
    }

    println!(
        "{} Found {} unrecognized line{}:\n",
        "✗".red().bold(),
        unrecognized.len(),
        if unrecognized.len() == 1 { "" } else { "s" }
    );

    for line in unrecognized {
        println!(
            "  {} {}",
            format!("{}:", line.number).dimmed(),
            line.text.trim().yellow()
        );
    }

    std::process::exit(1);
}

/// List all recognized expressions in the script
fn list_expressions(script_path: &PathBuf, json: bool) -> anyhow::Result<()> {
    let script = ScriptFile::load(script_path)
        .map_err(|e| anyhow::anyhow!("Failed to load script: {}", e))?;
    let expressions: Vec<&Expression> = script.tree().expressions().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&expressions)?);
        return Ok(());
    }

    println!("{}", format!("Expressions from: {}\n", script.path().display()).bold());

    for expression in &expressions {
        match expression {
            Expression::Comment(comment) => println!("{}", comment.text().dimmed()),
            Expression::Hotkey(hotkey) => {
                let kind = if hotkey.is_chord() { "chord" } else { "hotkey" };
                println!(
                    "{} {} {}",
                    hotkey.describe().cyan().bold(),
                    "←".dimmed(),
                    format!("{} `{}`", kind, hotkey.text().trim()).magenta()
                );
            }
        }
    }

    println!("\n{} {} expressions", "Total:".bold(), expressions.len());

    Ok(())
}
