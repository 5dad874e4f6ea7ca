//! Chinese-style (surname first) username combinations.
//!
//! Three body tokens get full date/initial treatment: the alias (`tommy`),
//! the joined given name (`taiman`) and the second given word (`man`).
//! Tiers are emitted from most to least commonly observed; dedupe keeps the
//! earliest tier's position.

use forge_types::MAX_LEN_CN;
use tracing::debug;

use crate::filter::{Combos, DOT, filter_candidates};
use crate::tokens::{ChineseName, ChineseTokens};

/// Generate the ordered, deduplicated Chinese-style wordlist.
pub fn generate_chinese(name: &ChineseName, full: bool) -> Vec<String> {
    let t = ChineseTokens::derive(name);
    let mut c = Combos::new();

    alias_tiers(&mut c, &t);
    second_given_tiers(&mut c, &t);
    given_tiers(&mut c, &t);
    alias2_block(&mut c, &t);
    if full {
        full_extension(&mut c, &t);
    }

    let raw = c.len();
    let out = filter_candidates(c.into_vec(), MAX_LEN_CN);
    debug!(raw, kept = out.len(), full, "chinese candidates filtered");
    out
}

/// Tiers 1-4: the alias on its own, then alias + given / init_sg / surname.
fn alias_tiers(c: &mut Combos, t: &ChineseTokens) {
    if t.a.is_empty() {
        return;
    }
    let (a, g, s, si, init_sg) = (&*t.a, &*t.g, &*t.s, &*t.si, &*t.init_sg);
    let dates = t.dates.suffixes();

    // Tier 1: tommy2001 tommy01 tommy1015 tommy15 tommy1501, tommyc tc tctm t.chan
    c.add_dated(&[a], &dates);
    if let Some(dy) = t.dates.day_year() {
        c.add(&[a, dy.as_str()]);
    }
    c.add(&[a, si]);
    c.add(&[a, DOT, si]);
    c.add(&[si, DOT, a]);
    c.add(&[&*t.init_as]);
    c.add(&[&*t.init_asg]);
    c.add(&[&*t.ai, DOT, s]);

    // Tiers 2-4 share one shape: a+x, a.x, x.a, then a+x+d, a.x+d
    for x in [g, init_sg, s] {
        c.add(&[a, x]);
        c.add(&[a, DOT, x]);
        c.add(&[x, DOT, a]);
        for &d in &dates {
            c.add(&[a, x, d]);
            c.add(&[a, DOT, x, d]);
        }
    }
}

/// Tiers 5-6: the second given word anchors the same depth as the alias.
fn second_given_tiers(c: &mut Combos, t: &ChineseTokens) {
    if t.g2.is_empty() {
        return;
    }
    let (g2, g, s, si, init_sg) = (&*t.g2, &*t.g, &*t.s, &*t.si, &*t.init_sg);
    let dates = t.dates.suffixes();

    // Tier 5: man2001 man1501 manc man.c c.man manc01 man.c1015
    c.add_dated(&[g2], &dates);
    if let Some(dy) = t.dates.day_year() {
        c.add(&[g2, dy.as_str()]);
    }
    c.add(&[g2, si]);
    c.add(&[g2, DOT, si]);
    c.add(&[si, DOT, g2]);
    for &d in &dates {
        c.add(&[g2, si, d]);
        c.add(&[g2, DOT, si, d]);
    }

    // Tier 6: mantaiman, manctm, manchan (no reversed g.g2)
    c.add(&[g2, g]);
    c.add(&[g2, DOT, g]);
    for &d in &dates {
        c.add(&[g2, g, d]);
        c.add(&[g2, DOT, g, d]);
    }
    for x in [init_sg, s] {
        c.add(&[g2, x]);
        c.add(&[g2, DOT, x]);
        c.add(&[x, DOT, g2]);
        for &d in &dates {
            c.add(&[g2, x, d]);
            c.add(&[g2, DOT, x, d]);
        }
    }
}

/// Tiers 7-10: given name and surname, always emitted.
fn given_tiers(c: &mut Combos, t: &ChineseTokens) {
    let (g, s, si, gi, init_sg) = (&*t.g, &*t.s, &*t.si, &*t.gi, &*t.init_sg);
    let dates = t.dates.suffixes();

    // Tier 7: taimanc taiman.c c.taiman taimanc01 taiman.c01
    c.add(&[g, si]);
    c.add(&[g, DOT, si]);
    c.add(&[si, DOT, g]);
    for &d in &dates {
        c.add(&[g, si, d]);
        c.add(&[g, DOT, si, d]);
    }

    // Tier 8: taiman2001 taiman01
    c.add_dated(&[g], &dates);

    // Tier 9: chantm ctm chan.tm. A bare surname+date is too common to be useful.
    c.add(&[s, gi]);
    c.add(&[init_sg]);
    c.add(&[s, DOT, gi]);
    for &d in &dates {
        c.add(&[s, gi, d]);
        c.add(&[init_sg, d]);
    }

    // Tier 10
    c.add(&[s, g]);
    c.add(&[g, s]);
}

fn alias2_block(c: &mut Combos, t: &ChineseTokens) {
    if t.a2.is_empty() {
        return;
    }
    let (a2, g) = (&*t.a2, &*t.g);

    c.add(&[a2, g]);
    c.add(&[a2, &*t.s]);
    c.add(&[g, DOT, a2]);
    c.add(&[&*t.a, DOT, a2]);
    for d in t.dates.suffixes() {
        c.add(&[a2, d]);
        c.add(&[a2, g, d]);
    }
}

/// Deeper date x token matrix and extra dot variants.
fn full_extension(c: &mut Combos, t: &ChineseTokens) {
    let (a, ai, g, g2, s, si, gi, init_sg) = (
        &*t.a, &*t.ai, &*t.g, &*t.g2, &*t.s, &*t.si, &*t.gi, &*t.init_sg,
    );
    let dates = t.dates.suffixes();

    if !a.is_empty() {
        for &d in &dates {
            c.add(&[a, g, si, d]);
            c.add(&[a, DOT, g, DOT, si, d]);
            c.add(&[ai, g, d]);
            c.add(&[ai, DOT, g, d]);
            c.add(&[ai, init_sg, d]);
        }
        c.add(&[ai, g]);
        c.add(&[ai, DOT, g]);
        c.add(&[ai, init_sg]);
        c.add(&[a, DOT, s, DOT, g]);
        c.add(&[a, gi]);
        c.add(&[a, DOT, gi]);
    }

    for &d in &dates {
        c.add(&[g, DOT, d]);
        c.add(&[g, DOT, si, DOT, d]);
    }

    // Still no bare surname+date.
    c.add(&[s, DOT, g]);
    c.add(&[g, DOT, s]);
    c.add(&[s, DOT, init_sg]);
    c.add(&[init_sg, DOT, s]);

    if !g2.is_empty() {
        for &d in &dates {
            c.add(&[g2, g, si, d]);
            c.add(&[ai, g2, d]);
            c.add(&[g2, DOT, g, DOT, si]);
        }
        c.add(&[g2, DOT, g, si]);
        c.add(&[g2, gi]);
        c.add(&[g2, DOT, gi]);
        c.add(&[ai, g2]);
        c.add(&[ai, DOT, g2]);
        if !a.is_empty() {
            c.add(&[a, g2]);
            c.add(&[a, DOT, g2]);
            for &d in &dates {
                c.add(&[a, g2, d]);
                c.add(&[a, DOT, g2, d]);
                c.add(&[a, g2, si, d]);
            }
        }
    }

    if !t.a2.is_empty() {
        let a2 = &*t.a2;
        for &d in &dates {
            c.add(&[a2, d]);
            c.add(&[a2, DOT, d]);
            c.add(&[a2, g, d]);
        }
        c.add(&[a2, DOT, g]);
        c.add(&[a2, DOT, s]);
        c.add(&[a2, init_sg]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chan_tai_man(full: bool) -> Vec<String> {
        generate_chinese(
            &ChineseName {
                last: "Chan".into(),
                first: "Tai Man".into(),
                alias: "Tommy".into(),
                dob: "2001/10/15".into(),
                ..Default::default()
            },
            full,
        )
    }

    #[test]
    fn test_scenario_tommy_chan() {
        let out = chan_tai_man(false);
        for want in [
            "tommy2001", "tommy01", "tommy1015", "tommy15", "tommy1501", "tommyctm", "tommy.ctm",
            "manchan", "taimanc", "ctm2001",
        ] {
            assert!(out.iter().any(|u| u == want), "missing {want}");
        }
        for unwanted in ["tommy10", "ctm", "chan2001"] {
            assert!(!out.iter().any(|u| u == unwanted), "unexpected {unwanted}");
        }
    }

    #[test]
    fn test_tier_order() {
        let out = chan_tai_man(false);
        assert_eq!(&out[..5], ["tommy2001", "tommy01", "tommy1015", "tommy15", "tommy1501"]);
        let pos = |s: &str| out.iter().position(|u| u == s).unwrap();
        // alias tiers before g2 tiers before given tiers
        assert!(pos("tommychan") < pos("man2001"));
        assert!(pos("manchan") < pos("taimanc"));
        assert!(pos("taiman2001") < pos("chantm"));
        assert_eq!(out.last().map(String::as_str), Some("taimanchan"));
    }

    #[test]
    fn test_length_and_uniqueness() {
        for full in [false, true] {
            let out = chan_tai_man(full);
            let unique: std::collections::HashSet<_> = out.iter().collect();
            assert_eq!(unique.len(), out.len());
            assert!(out.iter().all(|u| (6..=16).contains(&u.chars().count())));
            assert!(out.iter().all(|u| u == &u.to_lowercase()));
        }
    }

    #[test]
    fn test_no_month_only_suffix() {
        let out = chan_tai_man(true);
        for body in ["tommy", "man", "taiman", "taimanc", "ctm", "chantm", "tommychan"] {
            let month_only = format!("{body}10");
            assert!(!out.contains(&month_only), "unexpected {month_only}");
        }
    }

    #[test]
    fn test_full_mode_is_superset() {
        let default = chan_tai_man(false);
        let full = chan_tai_man(true);
        assert!(full.len() > default.len());
        assert!(default.iter().all(|u| full.contains(u)));
        assert!(full.contains(&"tommyman01".to_string()));
        assert!(full.contains(&"taiman.chan".to_string()));
        assert!(!default.contains(&"tommyman01".to_string()));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(chan_tai_man(true), chan_tai_man(true));
    }

    #[test]
    fn test_without_alias_or_dates() {
        let out = generate_chinese(
            &ChineseName {
                last: "Wong".into(),
                first: "Ka Fai".into(),
                ..Default::default()
            },
            false,
        );
        assert_eq!(
            out,
            vec![
                "faikafai", "fai.kafai", "faiwkf", "fai.wkf", "wkf.fai", "faiwong", "fai.wong",
                "wong.fai", "kafaiw", "kafai.w", "w.kafai", "wongkf", "wong.kf", "wongkafai",
                "kafaiwong",
            ]
        );
    }

    #[test]
    fn test_single_given_word_skips_g2_tiers() {
        let out = generate_chinese(
            &ChineseName {
                last: "Lee".into(),
                first: "Ming".into(),
                year: "1995".into(),
                ..Default::default()
            },
            true,
        );
        assert!(out.contains(&"ming1995".to_string()));
        assert!(out.contains(&"mingl1995".to_string()));
        assert!(!out.contains(&"lee1995".to_string()));
        assert!(out.iter().all(|u| !u.starts_with('.') && !u.ends_with('.')));
        assert!(out.iter().all(|u| !u.contains("..")));
    }

    #[test]
    fn test_empty_given_name_never_leaves_bare_dot() {
        for full in [false, true] {
            let out = generate_chinese(
                &ChineseName {
                    last: "Chan".into(),
                    first: "".into(),
                    alias: "Tommy".into(),
                    alias2: "TC".into(),
                    dob: "2001/10/15".into(),
                    ..Default::default()
                },
                full,
            );
            assert!(out.contains(&"tommychan".to_string()));
            assert!(!out.contains(&"tommy.".to_string()));
            assert!(!out.contains(&".tommy".to_string()));
            for u in &out {
                assert!(!u.starts_with('.') && !u.ends_with('.'), "dangling dot in {u}");
                assert!(!u.contains(".."), "double dot in {u}");
            }
        }
    }

    #[test]
    fn test_alias2_block() {
        let out = generate_chinese(
            &ChineseName {
                last: "Chan".into(),
                first: "Tai Man".into(),
                alias: "Tommy".into(),
                alias2: "TC".into(),
                year: "2001".into(),
                ..Default::default()
            },
            false,
        );
        let alias2: Vec<&String> = out.iter().filter(|u| u.contains("tc")).collect();
        assert_eq!(
            alias2,
            ["tctaiman", "tcchan", "taiman.tc", "tommy.tc", "tc2001", "tctaiman2001", "tctaiman01"]
        );
    }
}
