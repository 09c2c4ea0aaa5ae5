//! Teleporter code normalization.
//!
//! Level rows encode teleporters as `t` plus a pair id (`t11`, `t12`). On the
//! rendered grid each one occupies a single cell, so width measurements work
//! on the collapsed form.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static TELEPORTER_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"t\d+").expect("regex is valid"));

/// Replace every `t<digits>` run in `line` with a bare `t`.
///
/// Borrows `line` unchanged when it holds no teleporter codes.
pub fn clean_teleporter_codes(line: &str) -> Cow<'_, str> {
    TELEPORTER_CODE.replace_all(line, "t")
}

/// Width of `line` in characters once teleporter codes are collapsed.
pub fn cleaned_width(line: &str) -> usize {
    clean_teleporter_codes(line).chars().count()
}
