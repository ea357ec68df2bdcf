use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use refnet_render::Graphviz;
use std::io;
use std::path::PathBuf;

pub mod config;
pub mod pipeline;
pub mod report;

use config::AppConfig;
use pipeline::RunOptions;
use report::DoctorReport;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "refnet")]
#[command(about = "Reference network of regulatory and standards documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect references, write the adjacency matrix and render the network
    Run(RunArgs),

    /// Validate the configuration and check that Graphviz can be started
    Doctor(DoctorArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Configuration file (TOML); the built-in configuration is used if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the documents directory
    #[arg(long)]
    documents: Option<PathBuf>,

    /// Override the figure output file
    #[arg(long)]
    figure: Option<PathBuf>,

    /// Override the matrix output file
    #[arg(long)]
    matrix: Option<PathBuf>,

    /// Skip Graphviz rendering
    #[arg(long)]
    no_render: bool,

    /// Also write the DOT source to this file
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DoctorArgs {
    /// Configuration file (TOML); the built-in configuration is used if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Run(args) => run_pipeline(args),
        Commands::Doctor(args) => run_doctor(args),
    }
}

fn run_pipeline(args: RunArgs) -> Result<()> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(dir) = args.documents {
        config.paths.documents_dir = dir;
    }

    let mut options = RunOptions::from_config(&config);
    if let Some(matrix) = args.matrix {
        options.matrix_path = matrix;
    }
    if let Some(figure) = args.figure {
        options.figure_path = figure;
    }
    options.render = !args.no_render;
    options.dot_path = args.dot;

    let report = pipeline::run(&config, &options)?;

    if args.json {
        print_stdout(&serde_json::to_string_pretty(&report)?)?;
    } else {
        print_stdout(&report.render_summary())?;
    }
    Ok(())
}

fn run_doctor(args: DoctorArgs) -> Result<()> {
    let mut report = DoctorReport::default();

    match AppConfig::load(args.config.as_deref()) {
        Ok(config) => {
            report.config_ok = true;
            report.clusters = config.clusters.len();

            let graphviz = Graphviz::new(&config.layout);
            report.graphviz_program = Some(graphviz.executable().display().to_string());
            match graphviz.check_available() {
                Ok(version) => {
                    report.graphviz_ok = true;
                    report.graphviz_version = Some(version);
                }
                Err(err) => report.graphviz_error = Some(err.to_string()),
            }
        }
        Err(err) => report.config_error = Some(format!("{err:#}")),
    }

    if args.json {
        print_stdout(&serde_json::to_string_pretty(&report)?)?;
    } else {
        match &report.config_error {
            None => eprintln!("Config: ok ({} clusters)", report.clusters),
            Some(err) => eprintln!("Config: error ({err})"),
        }
        if let Some(program) = &report.graphviz_program {
            match (&report.graphviz_version, &report.graphviz_error) {
                (Some(version), _) => eprintln!("Graphviz: ok ({version})"),
                (None, Some(err)) => eprintln!("Graphviz: error ({err})"),
                (None, None) => eprintln!("Graphviz: {program}"),
            }
        }
    }

    if !report.ok() {
        bail!("doctor found problems");
    }
    Ok(())
}
