//! CLI entry point for modgraph

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use modgraph::config::DEFAULT_EXTENSION;
use modgraph::{
    DEFAULT_LABELS, GraphConfig, ScanConfig, emit_graphs, extract_dependencies, print_json,
    print_report,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// When the run report is colored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal, unless the environment says otherwise
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode against the process environment and stdout.
    fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => auto_color(
                |key: &str| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()),
                std::io::stdout().is_terminal(),
            ),
        }
    }
}

/// `NO_COLOR` beats `FORCE_COLOR`; `TERM=dumb` disables color on a terminal.
fn auto_color(env: impl Fn(&str) -> Option<String>, is_terminal: bool) -> bool {
    if env("NO_COLOR").is_some() {
        false
    } else if env("FORCE_COLOR").is_some() {
        true
    } else {
        is_terminal && env("TERM").as_deref() != Some("dumb")
    }
}

#[derive(Parser, Debug)]
#[command(name = "modgraph")]
#[command(about = "Write per-subsystem module dependency graphs (Graphviz DOT) from `use crate::` imports")]
#[command(version)]
struct Args {
    /// Subsystem labels; one <label>.dot is written per label
    #[arg(value_name = "LABEL", default_values_t = DEFAULT_LABELS.iter().map(|l| l.to_string()))]
    labels: Vec<String>,

    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Directory receiving the graph files (created if missing)
    #[arg(short, long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    /// Source file extension to scan
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Print the dependency map as JSON instead of writing graphs
    #[arg(long)]
    json: bool,

    /// Do not print the run report
    #[arg(short, long)]
    quiet: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(args: &Args) -> modgraph::Result<()> {
    let scan_config = ScanConfig {
        root: args.root.clone(),
        extension: args.extension.clone(),
    };
    let deps = extract_dependencies(&scan_config)?;

    if args.json {
        return print_json(&deps);
    }

    let graph_config = GraphConfig {
        out_dir: args.out_dir.clone(),
        labels: args.labels.clone(),
    };
    let summaries = emit_graphs(&deps, &graph_config)?;

    if !args.quiet {
        if let Err(e) = print_report(&summaries, args.color.enabled()) {
            tracing::warn!("cannot print report: {}", e);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("modgraph: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_explicit_modes_ignore_environment() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }

    #[test]
    fn test_auto_follows_terminal() {
        assert!(auto_color(env_of(&[]), true));
        assert!(!auto_color(env_of(&[]), false));
    }

    #[test]
    fn test_auto_environment_overrides() {
        assert!(!auto_color(env_of(&[("NO_COLOR", "1")]), true));
        assert!(!auto_color(env_of(&[("NO_COLOR", ""), ("FORCE_COLOR", "1")]), true));
        assert!(auto_color(env_of(&[("FORCE_COLOR", "1")]), false));
        assert!(!auto_color(env_of(&[("TERM", "dumb")]), true));
        assert!(auto_color(env_of(&[("TERM", "xterm-256color")]), true));
    }

    #[test]
    fn test_default_labels_and_paths() {
        let args = Args::parse_from(["modgraph"]);
        assert_eq!(args.labels, DEFAULT_LABELS);
        assert_eq!(args.root, PathBuf::from("."));
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert_eq!(args.extension, "rs");
        assert_eq!(args.color, ColorMode::Auto);
    }
}
