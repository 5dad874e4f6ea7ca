use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use forge_types::Style;

use crate::error::{ForgeError, Result};
use crate::tokens::{ChineseName, WesternName};

#[derive(Parser, Debug)]
#[command(
    name = "aliasforge",
    about = "Username wordlists from Chinese and Western naming conventions",
    version,
    after_help = "All output is lowercase, uses '.' as the only separator, skips month-only \
                  date suffixes and keeps 6-16 (Chinese) or 6-18 (Western) characters.\n\n\
                  Example:\n  aliasforge --style chinese --last Chan --first \"Tai Man\" \
                  --alias Tommy --dob 2001/10/15"
)]
pub struct Cli {
    /// Naming convention: chinese or western. Prompted for when omitted.
    #[arg(long)]
    pub style: Option<Style>,

    /// Chinese: given name(s), e.g. "Tai Man". Western: first name, e.g. Charlie
    #[arg(long)]
    pub first: String,

    /// Surname / family name, e.g. Chan or Brown
    #[arg(long)]
    pub last: String,

    /// Western only: middle name, e.g. Monroe
    #[arg(long, default_value = "")]
    pub middle: String,

    /// Chinese: English alias, e.g. Tommy. Western: nickname
    #[arg(long, default_value = "")]
    pub alias: String,

    /// Second alias / nickname
    #[arg(long, default_value = "")]
    pub alias2: String,

    /// Year of birth, e.g. 2001
    #[arg(long, default_value = "")]
    pub year: String,

    /// Date of birth, YYYY/MM/DD or YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub dob: String,

    /// Emit the extended combination set
    #[arg(long)]
    pub full: bool,

    /// Save results to a file, one per line
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not list usernames on stdout (useful with -o)
    #[arg(long)]
    pub no_print: bool,

    /// Listing format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One username per line
    Text,
    /// A JSON report with settings and usernames
    Json,
}

impl Cli {
    pub fn chinese_name(&self) -> ChineseName {
        ChineseName {
            last: self.last.clone(),
            first: self.first.clone(),
            alias: self.alias.clone(),
            alias2: self.alias2.clone(),
            year: self.year.clone(),
            dob: self.dob.clone(),
        }
    }

    pub fn western_name(&self) -> WesternName {
        WesternName {
            first: self.first.clone(),
            middle: self.middle.clone(),
            last: self.last.clone(),
            alias: self.alias.clone(),
            alias2: self.alias2.clone(),
            year: self.year.clone(),
            dob: self.dob.clone(),
        }
    }
}

/// Use the style given on the command line, or ask for one on `prompt`.
pub fn resolve_style<R: BufRead, W: Write>(
    given: Option<Style>,
    input: &mut R,
    prompt: &mut W,
) -> Result<Style> {
    match given {
        Some(style) => Ok(style),
        None => ask_style(input, prompt),
    }
}

/// Ask which naming convention applies until the answer is 1 or 2.
pub fn ask_style<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Style> {
    writeln!(out, "\n[?] Is the target Chinese or Western?")?;
    writeln!(out, "    1) Chinese  -- surname first  (e.g. chan tai man, alias tommy)")?;
    writeln!(out, "    2) Western  -- given name first  (e.g. charlie monroe brown)")?;

    loop {
        write!(out, "    Enter 1 or 2: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ForgeError::Prompt("no style given before end of input".into()));
        }
        if let Some(style) = Style::from_choice(&line) {
            return Ok(style);
        }
        writeln!(out, "    Please enter 1 or 2.")?;
    }
}
