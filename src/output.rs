use std::path::Path;

use forge_types::{MIN_LEN, Mode, Style};

use crate::cli::Cli;
use crate::error::Result;

/// Lines describing the target, printed above the wordlist.
pub fn summary_lines(cli: &Cli, style: Style) -> Vec<String> {
    let mut lines = vec![format!("[+] Style   : {}", style.label())];
    match style {
        Style::Chinese => {
            lines.push(format!("[+] Surname : {}", cli.last.to_lowercase()));
            lines.push(format!("[+] Given   : {}", cli.first.to_lowercase()));
        }
        Style::Western => {
            lines.push(format!("[+] First   : {}", cli.first.to_lowercase()));
            if !cli.middle.is_empty() {
                lines.push(format!("[+] Middle  : {}", cli.middle.to_lowercase()));
            }
            lines.push(format!("[+] Last    : {}", cli.last.to_lowercase()));
        }
    }
    if !cli.alias.is_empty() {
        lines.push(format!("[+] Alias   : {}", cli.alias.to_lowercase()));
    }
    if !cli.dob.is_empty() || !cli.year.is_empty() {
        let date = if cli.dob.is_empty() { &cli.year } else { &cli.dob };
        lines.push(format!("[+] DOB     : {date}"));
    }
    lines
}

/// "[+] Generated N usernames (MODE mode · 6-16 chars)" plus a dashed rule.
pub fn count_header(count: usize, style: Style, mode: Mode) -> (String, String) {
    let header = format!(
        "[+] Generated {count} usernames ({} mode · {MIN_LEN}-{} chars)",
        mode.as_upper(),
        style.max_len()
    );
    let rule = "-".repeat(header.chars().count());
    (header, rule)
}

/// Write one username per line, with a trailing newline.
pub fn write_wordlist(path: &Path, usernames: &[String]) -> Result<()> {
    let mut body = usernames.join("\n");
    body.push('\n');
    std::fs::write(path, body)?;
    Ok(())
}

pub fn render_json<T: serde::Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use forge_types::Report;

    use super::*;

    #[test]
    fn test_count_header() {
        let (header, rule) = count_header(42, Style::Chinese, Mode::Default);
        assert_eq!(header, "[+] Generated 42 usernames (DEFAULT mode · 6-16 chars)");
        assert_eq!(rule.len(), header.chars().count());
        assert!(rule.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_summary_western() {
        let cli = Cli::parse_from([
            "aliasforge", "--first", "Charlie", "--middle", "Monroe", "--last", "Brown",
            "--year", "1990",
        ]);
        let lines = summary_lines(&cli, Style::Western);
        assert_eq!(
            lines,
            vec![
                "[+] Style   : Western (given name first)",
                "[+] First   : charlie",
                "[+] Middle  : monroe",
                "[+] Last    : brown",
                "[+] DOB     : 1990",
            ]
        );
    }

    #[test]
    fn test_summary_chinese_prefers_dob() {
        let cli = Cli::parse_from([
            "aliasforge", "--first", "Tai Man", "--last", "Chan", "--alias", "Tommy",
            "--year", "2001", "--dob", "2001/10/15",
        ]);
        let lines = summary_lines(&cli, Style::Chinese);
        assert_eq!(lines[1], "[+] Surname : chan");
        assert_eq!(lines[2], "[+] Given   : tai man");
        assert_eq!(lines[3], "[+] Alias   : tommy");
        assert_eq!(lines[4], "[+] DOB     : 2001/10/15");
    }

    #[test]
    fn test_write_wordlist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_wordlist(&path, &["tommychan".to_string(), "taimanc".to_string()]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "tommychan\ntaimanc\n");
    }

    #[test]
    fn test_write_wordlist_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(write_wordlist(&path, &[]).is_err());
    }

    #[test]
    fn test_render_json() {
        let report = Report::new(Style::Chinese, Mode::Full, vec!["taimanc".into()]);
        let json = render_json(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.usernames, vec!["taimanc"]);
        assert_eq!(back.max_len, 16);
        assert_eq!(back.mode, Mode::Full);
    }

    #[test]
    fn test_render_json_plain_list() {
        let names = vec!["charliebrown".to_string(), "cbrown".to_string()];
        let json = render_json(&names).unwrap();
        let back: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, names);
    }
}
