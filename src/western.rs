//! Western-style (given name first) username combinations.

use forge_types::MAX_LEN_EN;
use tracing::debug;

use crate::filter::{Combos, DOT, filter_candidates};
use crate::tokens::{WesternName, WesternTokens};

/// Generate the ordered, deduplicated Western-style wordlist.
pub fn generate_western(name: &WesternName, full: bool) -> Vec<String> {
    let t = WesternTokens::derive(name);
    let mut c = Combos::new();

    plain_and_short(&mut c, &t);
    alias_and_initials(&mut c, &t);
    dated_names(&mut c, &t);
    dot_variants(&mut c, &t);
    first_alias(&mut c, &t);
    alias2_block(&mut c, &t);
    if full {
        full_extension(&mut c, &t);
    }

    let raw = c.len();
    let out = filter_candidates(c.into_vec(), MAX_LEN_EN);
    debug!(raw, kept = out.len(), full, "western candidates filtered");
    out
}

/// charliebrown browncharlie, charlieb cbrown charlie.b c.brown b.charlie
fn plain_and_short(c: &mut Combos, t: &WesternTokens) {
    let (f, m, l, fi, mi, li) = (&*t.f, &*t.m, &*t.l, &*t.fi, &*t.mi, &*t.li);

    c.add(&[f, l]);
    c.add(&[l, f]);
    if !m.is_empty() {
        c.add(&[f, mi, l]);
        c.add(&[&*t.ml]);
    }

    c.add(&[f, li]);
    c.add(&[fi, l]);
    c.add(&[f, DOT, li]);
    c.add(&[fi, DOT, l]);
    c.add(&[li, DOT, f]);
    if !m.is_empty() {
        c.add(&[f, mi]);
        c.add(&[f, DOT, mi]);
        c.add(&[fi, DOT, m]);
        c.add(&[fi, mi, DOT, l]);
        c.add(&[f, mi, DOT, li]);
    }
}

fn alias_and_initials(c: &mut Combos, t: &WesternTokens) {
    let (f, l, a, fi, li, ai) = (&*t.f, &*t.l, &*t.a, &*t.fi, &*t.li, &*t.ai);
    let (init_fl, init_fml) = (&*t.init_fl, &*t.init_fml);
    let has_alias = !a.is_empty();
    let dates = t.dates.suffixes();

    if has_alias {
        c.add(&[a, f]);
        c.add(&[f, a]);
        c.add(&[a, l]);
        c.add(&[l, a]);
        c.add(&[a, fi]);
        c.add(&[ai, f]);
        c.add(&[a, li]);
        c.add(&[ai, l]);
        c.add(&[a, DOT, fi]);
        c.add(&[ai, DOT, f]);
        c.add(&[a, DOT, li]);
        c.add(&[ai, DOT, l]);
        c.add(&[li, DOT, a]);
        c.add(&[fi, DOT, a]);
        if !t.m.is_empty() {
            c.add(&[a, init_fml]);
        }

        c.add_dated(&[a], &dates);
        if let Some(dy) = t.dates.day_year() {
            c.add(&[a, dy.as_str()]);
        }
    }

    // cmb cmb.brown charlie.cmb cmb0322 cb0322
    c.add(&[init_fml]);
    c.add(&[init_fml, DOT, l]);
    c.add(&[f, DOT, init_fml]);
    for &d in &dates {
        c.add(&[init_fml, d]);
        c.add(&[init_fl, d]);
    }

    if has_alias {
        c.add(&[ai, init_fml]);

        // tommycb tommy.cb cb.tommy tommycb1990 tommy.cb90
        c.add(&[a, init_fl]);
        c.add(&[a, DOT, init_fl]);
        c.add(&[init_fl, DOT, a]);
        for &d in &dates {
            c.add(&[a, init_fl, d]);
            c.add(&[a, DOT, init_fl, d]);
        }

        for &d in &dates {
            c.add(&[a, l, d]);
            c.add(&[a, DOT, l, d]);
        }
    }
}

/// charlie1990 brown1990, chuckcharlie1990 chuck.charlie90, monroebrown0322 monroebrown22
fn dated_names(c: &mut Combos, t: &WesternTokens) {
    let (f, l, a) = (&*t.f, &*t.l, &*t.a);
    let dates = t.dates.suffixes();

    for &d in &dates {
        c.add(&[f, d]);
        c.add(&[l, d]);
    }
    if !a.is_empty() {
        for &d in &dates {
            c.add(&[a, f, d]);
            c.add(&[a, DOT, f, d]);
            c.add(&[a, &*t.init_fml, d]);
        }
    }
    if !t.dates.monthday.is_empty() && !t.m.is_empty() {
        c.add(&[&*t.ml, &*t.dates.monthday]);
        c.add(&[&*t.ml, &*t.dates.day2]);
    }
}

fn dot_variants(c: &mut Combos, t: &WesternTokens) {
    let (f, l, a, fi, mi, li) = (&*t.f, &*t.l, &*t.a, &*t.fi, &*t.mi, &*t.li);
    let init_fml = &*t.init_fml;

    c.add(&[f, DOT, l]);
    c.add(&[l, DOT, f]);
    if !t.m.is_empty() {
        c.add(&[f, DOT, mi, DOT, l]);
        c.add(&[fi, DOT, mi, DOT, l]);
    }

    if !a.is_empty() {
        c.add(&[a, DOT, f]);
        c.add(&[f, DOT, a]);
        c.add(&[a, DOT, l]);
        c.add(&[l, DOT, a]);
        c.add(&[a, DOT, init_fml]);
        c.add(&[init_fml, DOT, a]);
        c.add_dated(&[a, DOT, init_fml], &t.dates.suffixes());
        if !t.m.is_empty() {
            c.add(&[a, f, mi, li]);
            c.add(&[a, fi, li, f]);
        }
    }
}

/// charlietommybrown charlie.tommy.brown charlietommyb charliet
fn first_alias(c: &mut Combos, t: &WesternTokens) {
    let (f, l, a, li, ai) = (&*t.f, &*t.l, &*t.a, &*t.li, &*t.ai);
    if a.is_empty() {
        return;
    }
    let dates = t.dates.suffixes();

    c.add(&[f, a, l]);
    c.add(&[f, DOT, a, DOT, l]);
    c.add(&[f, a, li]);
    c.add(&[f, DOT, a, li]);
    for &d in &dates {
        c.add(&[f, a, d]);
        c.add(&[f, DOT, a, d]);
        c.add(&[f, a, li, d]);
    }

    c.add(&[f, ai]);
    c.add(&[f, DOT, ai]);
    for &d in &dates {
        c.add(&[f, ai, d]);
        c.add(&[f, DOT, ai, d]);
    }
}

/// Second alias with first, last, alias and initials, undotted then dotted.
fn alias2_block(c: &mut Combos, t: &WesternTokens) {
    let (f, l, a, a2) = (&*t.f, &*t.l, &*t.a, &*t.a2);
    if a2.is_empty() {
        return;
    }
    for sep in ["", DOT] {
        c.add_sep(a2, sep, f);
        c.add_sep(a2, sep, l);
        c.add_sep(f, sep, a2);
        c.add_sep(a2, sep, a);
        c.add_sep(a, sep, a2);
        c.add_sep(a2, sep, &t.init_fml);
    }
}

fn full_extension(c: &mut Combos, t: &WesternTokens) {
    let (f, l, a, a2, fi, mi, li, ai) = (
        &*t.f, &*t.l, &*t.a, &*t.a2, &*t.fi, &*t.mi, &*t.li, &*t.ai,
    );
    let dates = t.dates.suffixes();

    // Core tokens x every date; never digit-first, middle name alone excluded.
    for core in [f, l, a, a2, &*t.init_fml, &*t.init_fl, &*t.ml] {
        for &d in &dates {
            c.add(&[core, d]);
            c.add(&[core, DOT, d]);
        }
    }

    if !a2.is_empty() {
        alias2_block(c, t);
        for &d in &dates {
            c.add(&[a2, d]);
            c.add(&[a2, DOT, d]);
        }
    }

    if !t.m.is_empty() {
        c.add(&[f, DOT, mi, li]);
        c.add(&[fi, mi, DOT, l]);
    }

    if !a.is_empty() {
        c.add(&[ai, DOT, f, l]);
        c.add(&[a, DOT, f, l]);
        c.add(&[ai, f, DOT, l]);
        for &d in &dates {
            c.add(&[f, DOT, a, DOT, d]);
            c.add(&[f, a, &*t.init_fl, d]);
        }
        if !t.m.is_empty() {
            c.add(&[a, DOT, &*t.init_fml, &*t.dates.monthday]);
        }
    }
}
