//! Tabfit CLI - proportional column widths for LaTeX tabular environments

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use tabfit::{adjust_table_widths_with_options, plan_tables, TabfitResult, WidthOptions};

/// Sample document with two wide result tables
#[cfg(feature = "cli")]
const DEMO_DOCUMENT: &str = include_str!("../../demos/graph_tasks.tex");

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tabfit")]
#[command(version)]
#[command(about = "Tabfit - proportional column widths for LaTeX tabular environments", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Share of \textwidth distributed across wide columns
    #[arg(long, default_value_t = 0.90)]
    max_width: f64,

    /// Smallest width of any wide column, as a share of \textwidth
    #[arg(long, default_value_t = 0.15)]
    min_width: f64,

    /// Process the bundled demo document instead of reading input
    #[arg(long, conflicts_with = "input_file")]
    demo: bool,

    /// Print the planned column spec of each table instead of the document
    #[arg(long)]
    explain: bool,
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> TabfitResult<()> {
    let options = WidthOptions::validated(cli.max_width, cli.min_width)?;

    let input = if cli.demo {
        DEMO_DOCUMENT.to_string()
    } else {
        read_input(cli.input_file.as_deref())?
    };

    let result = if cli.explain {
        let reports = plan_tables(&input, &options);
        log::info!("found {} tabular environment(s)", reports.len());
        reports
            .iter()
            .map(|r| format!("{}\n", r))
            .collect::<String>()
    } else {
        adjust_table_widths_with_options(&input, &options)
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            file.write_all(result.as_bytes())?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            io::stdout().write_all(result.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> TabfitResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabfit --features cli");
    eprintln!("  tabfit [OPTIONS] [INPUT_FILE]");
}
