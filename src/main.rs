//! `javalex` - tokenize a Java-like source file and report the token stream.
//!
//! The report is printed to stdout and, unless disabled, written next to the
//! source file. Lexical errors are additionally shown as caret diagnostics on
//! stderr.

use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use javalex::{
    config::{ColorMode, Config},
    errors::errors::AppError,
    format_error,
    lexer::{lexer::tokenize, tokens::Token},
    report::Report,
};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "javalex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Java-like source and report the token stream", long_about = None)]
struct Cli {
    /// Source file to tokenize (prompts for a name when omitted)
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, env = "JAVALEX_CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the report instead of next to the source
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not write a report file
    #[arg(long)]
    no_report: bool,

    /// Disable color output
    #[arg(long, env = "JAVALEX_NO_COLOR")]
    no_color: bool,

    /// Exit with a failure status if the source has lexical errors
    #[arg(long, env = "JAVALEX_DENY_ERRORS")]
    deny_errors: bool,

    /// Enable verbose output
    #[arg(short, long, env = "JAVALEX_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("{}", e);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that stdout carries only the report.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), AppError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color && io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = ColorMode::Never;
    }
    if cli.output.is_some() {
        config.write_report = true;
    }
    if cli.no_report {
        config.write_report = false;
    }
    if cli.deny_errors {
        config.deny_errors = true;
    }
    debug!(?config, "effective configuration");

    let path = match cli.file {
        Some(path) => path,
        None => prompt_for_source(&config)?,
    };

    let source = fs::read_to_string(&path).map_err(|source| AppError::Io {
        path: path.clone(),
        source,
    })?;
    let tokens = tokenize(&source);

    let stdout = io::stdout();
    let colors = config.color.should_use_colors(stdout.is_terminal());
    let mut handle = stdout.lock();
    handle
        .write_all(Report::new(colors).render(&tokens).as_bytes())
        .and_then(|_| handle.flush())
        .context("failed to print report")?;

    let file_name = path.display().to_string();
    let errors: Vec<_> = tokens.iter().filter_map(Token::as_error).collect();
    for e in &errors {
        eprint!("{}", format_error(e, &source, &file_name));
    }

    if config.write_report {
        let report_path = cli.output.unwrap_or_else(|| config.report_path(&path));
        fs::write(&report_path, Report::new(false).render(&tokens)).map_err(|source| {
            AppError::Io {
                path: report_path.clone(),
                source,
            }
        })?;
        info!(path = %report_path.display(), "report written");
    }

    if !errors.is_empty() {
        warn!(count = errors.len(), file = %file_name, "source contains lexical errors");
        if config.deny_errors {
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Asks for a file name until one resolves to an existing file.
fn prompt_for_source(config: &Config) -> Result<PathBuf> {
    let mut lines = io::stdin().lock().lines();

    loop {
        println!("Enter a file's name");
        let Some(line) = lines.next() else {
            bail!("no source file given");
        };
        let line = line.context("failed to read file name")?;

        let path = config.resolve_source(line.trim());
        if path.is_file() {
            return Ok(path);
        }
        println!("File {} not found", path.display());
    }
}
