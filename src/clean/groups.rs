use std::collections::HashMap;

use once_cell::sync::Lazy;

// ---------------------------------------------------------------------------
// GroupingTable – many raw labels → few canonical groups
// ---------------------------------------------------------------------------

/// What a table returns for a label it has no group for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Unmapped labels fall into an explicit catch-all group.
    Default(&'static str),
    /// Unmapped labels become absent.
    Nullify,
}

/// Immutable exact-match lookup from raw label to canonical group.
///
/// Keys are compared byte-for-byte; no trimming or case folding. A key may
/// map to `None`, meaning "known but carries no signal", which resolves
/// through the fallback like any unmapped label.
#[derive(Debug)]
pub struct GroupingTable {
    name: &'static str,
    entries: HashMap<&'static str, Option<&'static str>>,
    fallback: Fallback,
}

impl GroupingTable {
    pub fn new(
        name: &'static str,
        entries: impl IntoIterator<Item = (&'static str, Option<&'static str>)>,
        fallback: Fallback,
    ) -> Self {
        GroupingTable {
            name,
            entries: entries.into_iter().collect(),
            fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// Canonical group for `label`, after applying the fallback policy.
    pub fn lookup(&self, label: &str) -> Option<&'static str> {
        match self.entries.get(label) {
            Some(Some(group)) => Some(*group),
            _ => self.fallback_group(),
        }
    }

    /// Like [`lookup`](Self::lookup), treating a missing cell as unmapped.
    pub fn resolve(&self, label: Option<&str>) -> Option<&'static str> {
        label.map_or_else(|| self.fallback_group(), |label| self.lookup(label))
    }

    fn fallback_group(&self) -> Option<&'static str> {
        match self.fallback {
            Fallback::Default(group) => Some(group),
            Fallback::Nullify => None,
        }
    }

    /// Whether `label` is a key of the table, mapped or not.
    pub fn is_known(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

const OWNERSHIP_GROUPS: &[(&str, &str)] = &[
    // Private
    ("Company - Private", "Private"),
    ("Private Practice / Firm", "Private"),
    ("Franchise", "Private"),
    ("Self-employed", "Private"),
    ("Subsidiary or Business Segment", "Private"),
    // Public and government
    ("Company - Public", "Public"),
    ("Nonprofit Organization", "Public"),
    ("Government", "Public"),
    // Education and health
    ("College / University", "Education/Health"),
    ("School / School District", "Education/Health"),
    ("Hospital", "Education/Health"),
];

/// Ownership labels that say nothing about the employer.
const OWNERSHIP_UNKNOWN: &[&str] = &["-1", "Unknown", "Other Organization", "Contract"];

/// Label [`OWNERSHIP_DETAILED`] gives to [`OWNERSHIP_UNKNOWN`] entries.
pub const OWNERSHIP_UNKNOWN_GROUP: &str = "Other/Unknown";

/// `Type of ownership` → `Ownership`. Unknown labels are absent.
pub static OWNERSHIP: Lazy<GroupingTable> = Lazy::new(|| {
    let known = OWNERSHIP_GROUPS.iter().map(|&(raw, group)| (raw, Some(group)));
    let unknown = OWNERSHIP_UNKNOWN.iter().map(|&raw| (raw, None));
    GroupingTable::new("ownership", known.chain(unknown), Fallback::Nullify)
});

/// `Type of ownership` → `Type of ownership grouped`, keeping the unknown
/// labels as their own group.
pub static OWNERSHIP_DETAILED: Lazy<GroupingTable> = Lazy::new(|| {
    let known = OWNERSHIP_GROUPS.iter().map(|&(raw, group)| (raw, Some(group)));
    let unknown = OWNERSHIP_UNKNOWN
        .iter()
        .map(|&raw| (raw, Some(OWNERSHIP_UNKNOWN_GROUP)));
    GroupingTable::new("ownership (detailed)", known.chain(unknown), Fallback::Nullify)
});

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

/// Catch-all group for sector and location tables.
pub const OTHER_GROUP: &str = "Other";

const SECTOR_GROUPS: &[(&str, Option<&str>)] = &[
    // Tech & digital
    ("Information Technology", Some("Tech & Digital")),
    ("Telecommunications", Some("Tech & Digital")),
    ("Media", Some("Tech & Digital")),
    ("Real Estate", Some("Tech & Digital")),
    // Business & professional services
    ("Business Services", Some("Business & Professional Services")),
    ("Accounting & Legal", Some("Business & Professional Services")),
    ("Insurance", Some("Business & Professional Services")),
    ("Finance", Some("Business & Professional Services")),
    ("Manufacturing", Some("Business & Professional Services")),
    // Healthcare & biotech
    ("Health Care", Some("Healthcare & Biotech")),
    ("Biotech & Pharmaceuticals", Some("Healthcare & Biotech")),
    // Education & non-profit
    ("Education", Some("Education & Non-Profit")),
    ("Non-Profit", Some("Education & Non-Profit")),
    // Public sector
    ("Government", Some("Public Sector")),
    ("Aerospace & Defense", Some("Public Sector")),
    // Industrial & energy
    ("Construction, Repair & Maintenance", Some("Industrial & Energy")),
    ("Oil, Gas, Energy & Utilities", Some("Industrial & Energy")),
    ("Mining & Metals", Some("Industrial & Energy")),
    ("Transportation & Logistics", Some("Industrial & Energy")),
    // Consumer & retail
    ("Retail", Some("Consumer & Retail")),
    ("Consumer Services", Some("Consumer & Retail")),
    ("Restaurants, Bars & Food Services", Some("Consumer & Retail")),
    ("Travel & Tourism", Some("Consumer & Retail")),
    ("Arts, Entertainment & Recreation", Some("Consumer & Retail")),
    // Unknown
    ("-1", None),
];

/// `Sector` → `Sector grouped`. Anything unmapped lands in [`OTHER_GROUP`].
pub static SECTOR: Lazy<GroupingTable> = Lazy::new(|| {
    GroupingTable::new(
        "sector",
        SECTOR_GROUPS.iter().copied(),
        Fallback::Default(OTHER_GROUP),
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_known_labels() {
        assert_eq!(OWNERSHIP.lookup("Company - Private"), Some("Private"));
        assert_eq!(OWNERSHIP.lookup("Government"), Some("Public"));
        assert_eq!(OWNERSHIP.lookup("Hospital"), Some("Education/Health"));
    }

    #[test]
    fn ownership_unknowns_are_nullified() {
        for label in ["-1", "Unknown", "Other Organization", "Contract", "Cooperative"] {
            assert_eq!(OWNERSHIP.lookup(label), None, "{label}");
        }
        assert!(OWNERSHIP.is_known("Contract"));
        assert!(!OWNERSHIP.is_known("Cooperative"));
    }

    #[test]
    fn detailed_ownership_keeps_unknown_group() {
        assert_eq!(OWNERSHIP_DETAILED.lookup("Contract"), Some(OWNERSHIP_UNKNOWN_GROUP));
        assert_eq!(OWNERSHIP_DETAILED.lookup("-1"), Some(OWNERSHIP_UNKNOWN_GROUP));
        assert_eq!(OWNERSHIP_DETAILED.lookup("Franchise"), Some("Private"));
        assert_eq!(OWNERSHIP_DETAILED.lookup("Cooperative"), None);
    }

    #[test]
    fn sector_defaults_to_other() {
        assert_eq!(SECTOR.lookup("Aerospace & Defense"), Some("Public Sector"));
        assert_eq!(SECTOR.lookup("-1"), Some(OTHER_GROUP));
        assert_eq!(SECTOR.lookup("Agriculture & Forestry"), Some(OTHER_GROUP));
        assert_eq!(SECTOR.fallback(), Fallback::Default(OTHER_GROUP));
    }

    #[test]
    fn missing_labels_follow_fallback() {
        assert_eq!(SECTOR.resolve(None), Some(OTHER_GROUP));
        assert_eq!(OWNERSHIP.resolve(None), None);
        assert_eq!(SECTOR.resolve(Some("Retail")), Some("Consumer & Retail"));
    }

    #[test]
    fn lookups_are_exact_match() {
        assert_eq!(SECTOR.lookup("retail"), Some(OTHER_GROUP));
        assert_eq!(SECTOR.lookup(" Retail"), Some(OTHER_GROUP));
        assert_eq!(OWNERSHIP.lookup("company - private"), None);
    }
}
