//! Ordered, indexed collection of recorded interactions.

use std::collections::HashMap;

use crate::model::{Fingerprint, Interaction};

/// In-memory collection of recorded interactions.
///
/// Interactions keep their insertion order; a fingerprint index built at
/// construction gives constant-time lookup. When several interactions share
/// a fingerprint the index points at the earliest one (first-match), so
/// replay stays deterministic. Later duplicates remain reachable through
/// [`Cassette::interactions`].
#[derive(Debug, Clone, Default)]
pub struct Cassette {
    interactions: Vec<Interaction>,
    index: HashMap<Fingerprint, usize>,
}

impl Cassette {
    /// Creates an empty cassette.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a cassette from already-validated interactions.
    ///
    /// Each `Interaction` carries its invariants from construction, so no
    /// re-validation is needed here; this only builds the first-match index.
    #[must_use]
    pub fn new(interactions: Vec<Interaction>) -> Self {
        let mut index = HashMap::with_capacity(interactions.len());
        for (position, interaction) in interactions.iter().enumerate() {
            index.entry(interaction.fingerprint()).or_insert(position);
        }
        Self { interactions, index }
    }

    /// Returns the position of the first interaction with the given
    /// fingerprint, if any.
    #[must_use]
    pub fn find(&self, fingerprint: Fingerprint) -> Option<usize> {
        self.index.get(&fingerprint).copied()
    }

    /// Returns the first interaction matching the fingerprint, if any.
    #[must_use]
    pub fn find_interaction(&self, fingerprint: Fingerprint) -> Option<&Interaction> {
        self.find(fingerprint).map(|position| &self.interactions[position])
    }

    /// Positional access into the interaction sequence.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Interaction> {
        self.interactions.get(position)
    }

    /// Interactions in insertion order.
    #[must_use]
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Number of recorded interactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Whether the cassette holds no interactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Produces a new cassette with the interaction appended.
    ///
    /// If the new fingerprint already exists, the returned cassette's index
    /// still points at the earlier occurrence.
    #[must_use]
    pub fn append(&self, interaction: Interaction) -> Self {
        let mut interactions = self.interactions.clone();
        interactions.push(interaction);
        Self::new(interactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Request, ResponseChunk};

    fn interaction(target: &str, data: &[u8]) -> Interaction {
        let request = Request::new("test-proto", "fetch", target, Vec::new(), Vec::new()).unwrap();
        Interaction::new(request, vec![ResponseChunk::new(data.to_vec(), 0)]).unwrap()
    }

    #[test]
    fn empty_cassette_finds_nothing() {
        let cassette = Cassette::empty();
        let fp = interaction("resource-123", b"x").fingerprint();
        assert!(cassette.is_empty());
        assert!(cassette.find(fp).is_none());
    }

    #[test]
    fn find_returns_position_of_match() {
        let a = interaction("resource-1", b"a");
        let b = interaction("resource-2", b"b");
        let fp_b = b.fingerprint();
        let cassette = Cassette::new(vec![a, b]);
        assert_eq!(cassette.find(fp_b), Some(1));
        assert_eq!(cassette.get(1).unwrap().fingerprint(), fp_b);
    }

    #[test]
    fn duplicate_fingerprints_resolve_to_first_occurrence() {
        let first = interaction("resource-1", b"A");
        let second = interaction("resource-1", b"B");
        let fp = first.fingerprint();
        assert_eq!(fp, second.fingerprint());

        let cassette = Cassette::new(vec![first, second]);
        assert_eq!(cassette.find(fp), Some(0));
        assert_eq!(cassette.find_interaction(fp).unwrap().response_chunks()[0].data, b"A");
        // The duplicate stays reachable by enumeration.
        assert_eq!(cassette.interactions().len(), 2);
    }

    #[test]
    fn append_produces_new_value_and_keeps_first_match() {
        let first = interaction("resource-1", b"A");
        let fp = first.fingerprint();
        let original = Cassette::new(vec![first]);

        let extended = original.append(interaction("resource-1", b"B"));

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.find(fp), Some(0));
        assert_eq!(extended.get(1).unwrap().response_chunks()[0].data, b"B");
    }

    #[test]
    fn append_indexes_new_fingerprints() {
        let original = Cassette::new(vec![interaction("resource-1", b"A")]);
        let fresh = interaction("resource-2", b"B");
        let fp = fresh.fingerprint();

        let extended = original.append(fresh);

        assert_eq!(extended.find(fp), Some(1));
        assert!(original.find(fp).is_none());
    }
}
