use crate::dates::{DateTokens, parse_dates};

/// Trim and lowercase a raw name field.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// First character of `s`, lowercased. Empty for an empty string.
pub fn initial(s: &str) -> String {
    s.chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

// ── Raw input records ──────────────────────────────────────────────────

/// Name fields for a Chinese-style target, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ChineseName {
    /// Family name, e.g. "Chan"
    pub last: String,
    /// Given name(s), e.g. "Tai Man"
    pub first: String,
    /// English / alias name, e.g. "Tommy"
    pub alias: String,
    pub alias2: String,
    pub year: String,
    pub dob: String,
}

/// Name fields for a Western-style target, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct WesternName {
    pub first: String,
    pub middle: String,
    pub last: String,
    /// Nickname
    pub alias: String,
    pub alias2: String,
    pub year: String,
    pub dob: String,
}

// ── Derived tokens ─────────────────────────────────────────────────────

/// Lowercase building blocks for Chinese combinations.
///
/// For "Chan" / "Tai Man" / "Tommy": `s = chan`, `g1 = tai`, `g2 = man`,
/// `g = taiman`, `si = c`, `gi = tm`, `init_sg = ctm`, `a = tommy`, `ai = t`,
/// `init_as = tc`, `init_asg = tctm`.
#[derive(Debug, Clone, Default)]
pub struct ChineseTokens {
    pub s: String,
    pub g1: String,
    /// Second given word. Anchors its own tier family, like the alias.
    pub g2: String,
    /// Full given name, joined and never re-split.
    pub g: String,
    pub si: String,
    pub gi: String,
    pub init_sg: String,
    pub a: String,
    pub ai: String,
    pub init_as: String,
    pub init_asg: String,
    pub a2: String,
    pub dates: DateTokens,
}

impl ChineseTokens {
    pub fn derive(name: &ChineseName) -> Self {
        let s = normalize(&name.last);
        let a = normalize(&name.alias);
        let a2 = normalize(&name.alias2);

        let given = normalize(&name.first);
        let mut words = given.split_whitespace();
        let g1 = words.next().unwrap_or_default().to_string();
        let g2 = words.next().unwrap_or_default().to_string();
        let g = format!("{g1}{g2}");

        let si = initial(&s);
        let gi = format!("{}{}", initial(&g1), initial(&g2));
        let init_sg = format!("{si}{gi}");
        let ai = initial(&a);
        let (init_as, init_asg) = if ai.is_empty() {
            (String::new(), String::new())
        } else {
            (format!("{ai}{si}"), format!("{ai}{init_sg}"))
        };

        ChineseTokens {
            s,
            g1,
            g2,
            g,
            si,
            gi,
            init_sg,
            a,
            ai,
            init_as,
            init_asg,
            a2,
            dates: parse_dates(&name.year, &name.dob),
        }
    }
}

/// Lowercase building blocks for Western combinations.
///
/// For "Charlie Monroe Brown": `fi = c`, `mi = m`, `li = b`, `init_fl = cb`,
/// `init_fml = cmb`, `ml = monroebrown`.
#[derive(Debug, Clone, Default)]
pub struct WesternTokens {
    pub f: String,
    pub m: String,
    pub l: String,
    pub a: String,
    pub a2: String,
    pub fi: String,
    pub mi: String,
    pub li: String,
    pub ai: String,
    pub init_fl: String,
    /// Falls back to `init_fl` without a middle name.
    pub init_fml: String,
    /// Middle + last, empty without a middle name.
    pub ml: String,
    pub dates: DateTokens,
}

impl WesternTokens {
    pub fn derive(name: &WesternName) -> Self {
        let f = normalize(&name.first);
        let m = normalize(&name.middle);
        let l = normalize(&name.last);
        let a = normalize(&name.alias);
        let a2 = normalize(&name.alias2);

        let fi = initial(&f);
        let mi = initial(&m);
        let li = initial(&l);
        let ai = initial(&a);

        let init_fl = format!("{fi}{li}");
        let init_fml = format!("{fi}{mi}{li}");
        let ml = if m.is_empty() {
            String::new()
        } else {
            format!("{m}{l}")
        };

        WesternTokens {
            f,
            m,
            l,
            a,
            a2,
            fi,
            mi,
            li,
            ai,
            init_fl,
            init_fml,
            ml,
            dates: parse_dates(&name.year, &name.dob),
        }
    }
}
