/// Strip catalogue: media strips grouped by kind, with duplicate suffixes folded.
///
/// Sequencers name copies of a strip `clip.001`, `clip.002`... The catalogue
/// can list those once under their base name.

use std::fmt;
use rustc_hash::FxHashSet;
use super::strip::{IgnoreRules, Strip, StripKind, StripKinds};

const SOURCE: &str = "valign::catalog";

/// Cut a name at its duplicate suffix.
///
/// The suffix starts at the first `.NNN` group (a dot and three digits)
/// and runs to the end of the name. Names without one are returned unchanged.
pub fn strip_duplicate_suffix(name: &str) -> &str {
    let bytes = name.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte == b'.' && bytes.len() >= i + 4 && bytes[i + 1..i + 4].iter().all(u8::is_ascii_digit) {
            return &name[..i];
        }
    }
    name
}

/// Strips of one kind, in sequencer order
#[derive(Debug, Clone, PartialEq)]
pub struct StripGroup {
    pub kind: StripKind,
    pub strips: Vec<Strip>,
}

/// Strips grouped per requested kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripCatalog {
    groups: Vec<StripGroup>,
}

impl StripCatalog {
    /// Collect the strips of every requested kind that no ignore rule excludes.
    ///
    /// Groups follow catalogue order (sound, movie, image); a requested kind
    /// with no strips still gets an empty group.
    pub fn find(strips: &[Strip], kinds: StripKinds, rules: &IgnoreRules) -> Self {
        if kinds.is_empty() {
            crate::align_warn!(SOURCE, "No strip kinds requested, catalogue is empty");
            return Self::default();
        }

        let groups: Vec<StripGroup> = kinds
            .kinds()
            .map(|kind| StripGroup {
                kind,
                strips: strips
                    .iter()
                    .filter(|strip| strip.kind == kind && !rules.is_ignored(strip))
                    .cloned()
                    .collect(),
            })
            .collect();

        crate::align_debug!(
            SOURCE,
            "Catalogued {} of {} strips in {} group(s)",
            groups.iter().map(|g| g.strips.len()).sum::<usize>(),
            strips.len(),
            groups.len()
        );
        Self { groups }
    }

    pub fn groups(&self) -> &[StripGroup] {
        &self.groups
    }

    /// Strips of `kind`, empty if the kind was not requested
    pub fn strips(&self, kind: StripKind) -> &[Strip] {
        self.groups
            .iter()
            .find(|g| g.kind == kind)
            .map(|g| g.strips.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of catalogued strips
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.strips.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names per group.
    ///
    /// With `ignore_duplication`, duplicate suffixes are cut and each base
    /// name is listed once, in first-seen order.
    pub fn names(&self, ignore_duplication: bool) -> Vec<(StripKind, Vec<String>)> {
        self.groups
            .iter()
            .map(|group| {
                let names = if ignore_duplication {
                    let mut seen = FxHashSet::default();
                    group
                        .strips
                        .iter()
                        .map(|strip| strip_duplicate_suffix(&strip.name))
                        .filter(|base| seen.insert(*base))
                        .map(str::to_string)
                        .collect()
                } else {
                    group.strips.iter().map(|strip| strip.name.clone()).collect()
                };
                (group.kind, names)
            })
            .collect()
    }

    /// Printable listing of the catalogue, also sent to the logger
    pub fn report(&self, ignore_duplication: bool) -> CatalogReport {
        let report = CatalogReport {
            ignore_duplication,
            groups: self.names(ignore_duplication),
        };
        crate::align_info!(SOURCE, "{}", report);
        report
    }
}

/// Text listing produced by `StripCatalog::report`
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReport {
    pub ignore_duplication: bool,
    pub groups: Vec<(StripKind, Vec<String>)>,
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duplicates = if self.ignore_duplication { "ignored" } else { "included" };
        write!(f, "Found strips (duplicates {}):", duplicates)?;

        if self.groups.is_empty() {
            return write!(f, "\n(no strip kinds requested)");
        }
        for (kind, names) in &self.groups {
            write!(f, "\n\n{} strips:", kind.label())?;
            if names.is_empty() {
                write!(f, "\n(0 strips found)")?;
            }
            for name in names {
                write!(f, "\n{}", name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
