//! Interactive page navigation
//!
//! Reads one command per line and redraws the current page after each.
//! End of input behaves like `quit`.

use anyhow::{Context, Result, bail};
use colored::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use super::display::{render_session, render_stats};
use crate::session::Session;

const PROMPT: &str = "[n]ext [p]rev [f]irst [l]ast [g N] [o PATH] [c]lear [s]tats [h]elp [q]uit > ";

const HELP: &str = "\
Commands:
  n, next          next page
  p, prev          previous page
  f, first         first page
  l, last          last page
  g, goto <N>      jump to page N
  o, open <PATH>   load another ASC file
  c, clear         clear the loaded file
  s, stats         show parse statistics
  h, help          show this help
  q, quit          exit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    Goto(usize),
    Open(PathBuf),
    Clear,
    Stats,
    Help,
    Quit,
}

impl FromStr for NavCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (word, rest) = match s.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (s, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "n" | "next" => NavCommand::Next,
            "p" | "prev" | "previous" => NavCommand::Previous,
            "f" | "first" => NavCommand::First,
            "l" | "last" => NavCommand::Last,
            "g" | "goto" => {
                let page = rest
                    .parse::<usize>()
                    .with_context(|| format!("'{}' is not a page number", rest))?;
                NavCommand::Goto(page)
            }
            "o" | "open" => {
                if rest.is_empty() {
                    bail!("open needs a file path");
                }
                NavCommand::Open(PathBuf::from(rest))
            }
            "c" | "clear" => NavCommand::Clear,
            "s" | "stats" => NavCommand::Stats,
            "h" | "help" | "?" => NavCommand::Help,
            "q" | "quit" | "exit" => NavCommand::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command '{}'", other),
        };

        Ok(command)
    }
}

/// Run the navigation loop until `quit` or end of input
pub fn run_interactive<R, W>(session: &mut Session, mut input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_session(session))?;
    writeln!(output, "{}", session.status().message().bright_black())?;

    loop {
        write!(output, "{}", PROMPT.bright_white())?;
        output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            writeln!(output)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<NavCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{} {} (type 'h' for help)", "Error:".bright_red(), e)?;
                continue;
            }
        };

        if !apply(session, command, output)? {
            break;
        }
    }

    Ok(())
}

/// Execute one command; returns false when the loop should stop
fn apply<W: Write>(session: &mut Session, command: NavCommand, output: &mut W) -> Result<bool> {
    match command {
        NavCommand::Next => {
            if !session.paginator_mut().go_next() {
                writeln!(output, "{}", "Already on the last page".bright_yellow())?;
                return Ok(true);
            }
        }
        NavCommand::Previous => {
            if !session.paginator_mut().go_previous() {
                writeln!(output, "{}", "Already on the first page".bright_yellow())?;
                return Ok(true);
            }
        }
        NavCommand::First => session.paginator_mut().go_first(),
        NavCommand::Last => session.paginator_mut().go_last(),
        NavCommand::Goto(page) => session.paginator_mut().go_to(page),
        NavCommand::Open(path) => {
            if let Err(e) = session.load_file(&path) {
                writeln!(output, "{} {}", "Error:".bright_red(), e)?;
                writeln!(output, "{}", session.status().message().bright_black())?;
                return Ok(true);
            }
        }
        NavCommand::Clear => session.clear(),
        NavCommand::Stats => {
            write!(output, "{}", render_stats(session.stats()))?;
            return Ok(true);
        }
        NavCommand::Help => {
            writeln!(output, "{}", HELP)?;
            return Ok(true);
        }
        NavCommand::Quit => return Ok(false),
    }

    write!(output, "{}", render_session(session))?;
    writeln!(output, "{}", session.status().message().bright_black())?;
    Ok(true)
}
