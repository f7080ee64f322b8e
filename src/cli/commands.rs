//! Command implementations for the ASC reader CLI
//!
//! This module wires arguments, configuration and logging to a [`Session`]
//! and prints the result.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{debug, info};

use super::args::{Args, OutputFormat};
use super::display::{
    render_json, render_page_footer, render_patient, render_session, render_stats, render_table,
};
use super::interactive::run_interactive;
use crate::config::AscConfig;
use crate::session::Session;

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Load the file, if one was given
/// 3. Print the requested page(s) or hand over to the interactive loop
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args)?;
    let mut session = Session::new(&config);

    if let Some(path) = &args.file {
        session
            .load_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
    }

    if args.interactive {
        info!("Starting interactive session");
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return run_interactive(&mut session, stdin.lock(), &mut stdout);
    }

    session.paginator_mut().go_to(args.page);

    let mut stdout = io::stdout().lock();
    match args.output_format {
        OutputFormat::Json => {
            let json = render_json(&session, args.all, args.stats)
                .context("Failed to serialise output")?;
            writeln!(stdout, "{}", json)?;
        }
        OutputFormat::Human => {
            if args.all {
                print_all_pages(&session, &mut stdout)?;
            } else {
                write!(stdout, "{}", render_session(&session))?;
            }
            if args.stats {
                write!(stdout, "{}", render_stats(session.stats()))?;
            }
        }
    }

    Ok(())
}

fn print_all_pages<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out, "{}\n", render_patient(session))?;

    let mut pages = session.paginator().clone();
    pages.go_first();
    loop {
        let window = pages.current_page();
        if !window.is_empty() {
            write!(out, "{}", render_table(window.records))?;
        }
        writeln!(out, "{}\n", render_page_footer(&window))?;
        if !pages.go_next() {
            break;
        }
    }

    Ok(())
}

/// Defaults, then config file, then environment, then CLI flags
fn load_configuration(args: &Args) -> Result<AscConfig> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, checking default location"),
    }

    let mut config = AscConfig::load_layered(args.config_file.as_deref())?;

    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    config.validate()?;
    Ok(config)
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("asc_reader={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
