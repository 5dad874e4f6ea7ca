use serde::{Deserialize, Serialize};

// ── Length window ────────────────────────────────────────────────────────

/// Shortest username kept in any wordlist.
pub const MIN_LEN: usize = 6;
/// Longest Chinese-style username. Chinese names are short, so the cap is tight.
pub const MAX_LEN_CN: usize = 16;
/// Longest Western-style username.
pub const MAX_LEN_EN: usize = 18;

// ── Naming convention ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Surname first: chan tai man (alias tommy)
    Chinese,
    /// Given name first: charlie monroe brown
    Western,
}

impl Style {
    /// Upper bound of the length window for this style.
    pub fn max_len(&self) -> usize {
        match self {
            Self::Chinese => MAX_LEN_CN,
            Self::Western => MAX_LEN_EN,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Chinese => "Chinese (surname first)",
            Self::Western => "Western (given name first)",
        }
    }

    /// Map an interactive menu answer ("1" / "2") to a style.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Chinese),
            "2" => Some(Self::Western),
            _ => None,
        }
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chinese" => Ok(Self::Chinese),
            "western" => Ok(Self::Western),
            other => Err(format!("unknown style '{other}' (expected chinese or western)")),
        }
    }
}

// ── Generation depth ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Default,
    Full,
}

impl Mode {
    pub fn from_flag(full: bool) -> Self {
        if full { Self::Full } else { Self::Default }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn as_upper(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Full => "FULL",
        }
    }
}

// ── JSON output format ───────────────────────────────────────────────────

/// A generated wordlist together with the settings that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub style: Style,
    pub mode: Mode,
    pub min_len: usize,
    pub max_len: usize,
    pub count: usize,
    pub usernames: Vec<String>,
}

impl Report {
    pub fn new(style: Style, mode: Mode, usernames: Vec<String>) -> Self {
        Report {
            style,
            mode,
            min_len: MIN_LEN,
            max_len: style.max_len(),
            count: usernames.len(),
            usernames,
        }
    }
}
