//! Synonym table for FAQ search expansion
//!
//! Entries are one-directional: `"delayed" -> "late"` does not imply
//! `"late" -> "delayed"`. Reciprocal links must be declared on both sides.

use std::collections::HashMap;

/// Default synonyms: term -> related terms
pub const SYNONYM_ENTRIES: &[(&str, &[&str])] = &[
    ("interval", &["schedule", "frequency", "maintenance", "routine"]),
    ("schedule", &["interval", "timing", "frequency", "maintenance"]),
    ("maintenance", &["service", "schedule", "interval", "routine"]),
    ("service", &["maintenance", "repair", "schedule"]),
    ("delayed", &["late", "postponed", "rescheduled"]),
    ("appointment", &["booking", "reservation", "slot"]),
];

/// Lookup table from a search term to its related terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(term, synonyms)` pairs
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut table = Self::new();
        for (term, synonyms) in entries {
            table.insert(term, synonyms.iter().copied());
        }
        table
    }

    /// Add synonyms for a term, appending to any existing ones
    pub fn insert<I, S>(&mut self, term: &str, synonyms: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slot = self.entries.entry(term.to_lowercase()).or_default();
        for synonym in synonyms {
            let synonym = synonym.as_ref().to_lowercase();
            if !slot.contains(&synonym) {
                slot.push(synonym);
            }
        }
        self
    }

    /// Related terms for an exact (lowercase) term
    pub fn get(&self, term: &str) -> Option<&[String]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synonyms of all `terms`, in first-seen order, without duplicates.
    ///
    /// Original terms are not included unless another term lists them.
    pub fn expand(&self, terms: &[String]) -> Vec<String> {
        let mut expanded: Vec<String> = Vec::new();
        for term in terms {
            if let Some(synonyms) = self.get(term) {
                for synonym in synonyms {
                    if !expanded.contains(synonym) {
                        expanded.push(synonym.clone());
                    }
                }
            }
        }
        expanded
    }
}

/// The built-in scooter-support synonym table
pub fn default_synonyms() -> SynonymTable {
    SynonymTable::from_entries(SYNONYM_ENTRIES.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_maintenance() {
        let table = default_synonyms();
        let synonyms = table.get("maintenance").unwrap();
        assert!(synonyms.contains(&"service".to_string()));
        assert!(synonyms.contains(&"routine".to_string()));
    }

    #[test]
    fn test_table_is_asymmetric() {
        // "delayed" lists "late", but "late" has no entry of its own
        let table = default_synonyms();
        assert!(table
            .get("delayed")
            .unwrap()
            .contains(&"late".to_string()));
        assert!(table.get("late").is_none());

        // "appointment" lists "booking", the reverse is not declared
        assert!(table.get("booking").is_none());
    }

    #[test]
    fn test_expand_deduplicates_in_order() {
        let table = default_synonyms();
        let expanded = table.expand(&["interval".to_string(), "schedule".to_string()]);
        assert_eq!(
            expanded,
            vec!["schedule", "frequency", "maintenance", "routine", "interval", "timing"]
        );
    }

    #[test]
    fn test_insert_extends_existing_entry() {
        let mut table = default_synonyms();
        table.insert("Battery", ["charging", "dead"]);
        table.insert("battery", ["charging", "range"]);
        assert_eq!(
            table.get("battery").unwrap(),
            &["charging".to_string(), "dead".to_string(), "range".to_string()]
        );
    }
}
