mod chinese;
mod cli;
mod dates;
mod error;
mod filter;
mod output;
mod tokens;
mod western;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use forge_types::{Mode, Report, Style};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputFormat};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // The menu goes to stderr so a redirected stdout only ever holds usernames.
    let style = cli::resolve_style(cli.style, &mut io::stdin().lock(), &mut io::stderr())?;

    run(&cli, style)
}

// ═══════════════════════════════════════════════════════════════════════
//  GENERATE → SUMMARY → LIST / SAVE
// ═══════════════════════════════════════════════════════════════════════

fn run(cli: &Cli, style: Style) -> anyhow::Result<()> {
    let mode = Mode::from_flag(cli.full);
    let usernames = generate(cli, style, mode);
    if usernames.is_empty() {
        warn!(?style, "no usernames survived the length window");
    }

    // Summary goes to stderr so stdout stays a clean wordlist.
    eprintln!();
    for line in output::summary_lines(cli, style) {
        eprintln!("{line}");
    }
    let (header, rule) = output::count_header(usernames.len(), style, mode);
    eprintln!("{header}");
    eprintln!("{rule}");

    if !cli.no_print {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match cli.format {
            OutputFormat::Text => {
                for u in &usernames {
                    writeln!(out, "{u}")?;
                }
            }
            OutputFormat::Json => {
                let report = Report::new(style, mode, usernames.clone());
                writeln!(out, "{}", output::render_json(&report)?)?;
            }
        }
    }

    if let Some(path) = &cli.output {
        output::write_wordlist(path, &usernames)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!(path = %path.display(), count = usernames.len(), "wordlist saved");
        eprintln!("\n[+] Saved to: {}", path.display());
    }

    Ok(())
}

fn generate(cli: &Cli, style: Style, mode: Mode) -> Vec<String> {
    match style {
        Style::Chinese => chinese::generate_chinese(&cli.chinese_name(), mode.is_full()),
        Style::Western => western::generate_western(&cli.western_name(), mode.is_full()),
    }
}
