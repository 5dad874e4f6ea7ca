use regex::Regex;
use std::sync::LazyLock;

// Date-of-birth separators: 2001/10/15 or 2001-10-15
static RE_DOB_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/-]").unwrap());

/// Date fragments usable as username suffixes.
///
/// A month on its own (e.g. `tommy10`) is never a suffix: there is no field
/// for it, so it cannot leak into a combination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTokens {
    /// 4-digit year: "2001"
    pub yr4: String,
    /// 2-digit year: "01"
    pub yr2: String,
    /// Zero-padded day: "15"
    pub day2: String,
    /// Zero-padded month followed by day: "1015"
    pub monthday: String,
}

impl DateTokens {
    /// Suffixes in emission order (yyyy, yy, mmdd, dd), empty ones dropped.
    pub fn suffixes(&self) -> Vec<&str> {
        [&self.yr4, &self.yr2, &self.monthday, &self.day2]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Day followed by 2-digit year ("1501"), when both are known.
    pub fn day_year(&self) -> Option<String> {
        if self.day2.is_empty() || self.yr2.is_empty() {
            None
        } else {
            Some(format!("{}{}", self.day2, self.yr2))
        }
    }
}

/// Derive date suffixes from an explicit year and/or a date of birth.
///
/// An explicit `year` wins over the year part of `dob`. A `dob` that does not
/// split into exactly year/month/day contributes nothing.
pub fn parse_dates(year: &str, dob: &str) -> DateTokens {
    let mut dates = DateTokens::default();

    let year = year.trim();
    if !year.is_empty() {
        dates.yr4 = last_chars(year, 4).to_string();
        dates.yr2 = last_chars(&dates.yr4, 2).to_string();
    }

    let dob = dob.trim();
    if !dob.is_empty() {
        let parts: Vec<&str> = RE_DOB_SEP.split(dob).collect();
        if let [y, m, d] = parts[..] {
            if dates.yr4.is_empty() {
                dates.yr4 = y.to_string();
                dates.yr2 = last_chars(y, 2).to_string();
            }
            let month = zero_pad(m);
            let day = zero_pad(d);
            dates.day2 = last_chars(&day, 2).to_string();
            dates.monthday = format!("{month}{day}");
        }
    }

    dates
}

/// The trailing `n` characters of `s` (all of `s` when shorter).
fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// Left-pad with zeros to at least two characters.
fn zero_pad(s: &str) -> String {
    format!("{s:0>2}")
}
