//! Liquor Sales - command line entry point
//!
//! Runs the cleanup pipeline over a sales CSV and offers a scatter plot.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use liquor_sales::config::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use liquor_sales::data::ZipFormat;
use liquor_sales::gui::NativeScatterWindow;
use liquor_sales::prompt::{console_yes_no, VISUALIZE_QUESTION};
use liquor_sales::PipelineConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ZipArg {
    /// Store zip codes as integers (leading zeros dropped)
    Integer,
    /// Store zip codes as five-digit zero-padded text
    Padded,
}

impl From<ZipArg> for ZipFormat {
    fn from(arg: ZipArg) -> Self {
        match arg {
            ZipArg::Integer => ZipFormat::Integer,
            ZipArg::Padded => ZipFormat::ZeroPadded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VisualizeArg {
    /// Ask on the console
    Ask,
    Yes,
    No,
}

#[derive(Debug, Parser)]
#[command(
    name = "liquor_sales",
    about = "Clean liquor store sales data, total it by zip code and store, and plot it"
)]
struct Cli {
    /// Sales CSV to read
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the cleaned CSV (overwritten)
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// How zip codes are stored in the cleaned table
    #[arg(long, value_enum, default_value_t = ZipArg::Integer)]
    zip_format: ZipArg,

    /// Whether to show the scatter plot
    #[arg(long, value_enum, default_value_t = VisualizeArg::Ask)]
    visualize: VisualizeArg,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config =
        PipelineConfig::new(&cli.input, &cli.output).with_zip_format(cli.zip_format.into());

    let decide = || match cli.visualize {
        VisualizeArg::Ask => console_yes_no(VISUALIZE_QUESTION),
        VisualizeArg::Yes => true,
        VisualizeArg::No => false,
    };

    let mut stdout = std::io::stdout();
    let mut window = NativeScatterWindow::default();

    liquor_sales::run(&config, &mut stdout, decide, &mut window)
        .with_context(|| format!("Sales pipeline aborted for {}", config.input.display()))?;

    Ok(())
}
