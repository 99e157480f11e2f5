//! Arena records and the frontier ordering key.

/// The frontier ordering key: `(f_cost, seq)`.
///
/// Lower `f_cost` first; ties go to the entry pushed earliest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub seq: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.seq.cmp(&other.seq))
    }
}

/// One discovered node. Indexed by its slot in the search arena; the
/// node's canonical key maps to that slot in the search index.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord<N> {
    pub node: N,
    /// Best known cost from the start.
    pub g_cost: u64,
    /// Heuristic estimate, computed once on discovery.
    pub h_cost: u64,
    pub parent: Option<usize>,
    pub closed: bool,
}

impl<N> NodeRecord<N> {
    pub fn f_cost(&self) -> u64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}
