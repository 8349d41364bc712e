//! Class graph derived from a partition: state-to-class map, inter-class
//! links and their transitive reduction (the Hasse diagram).

use std::collections::{HashMap, HashSet};

use chainscope_graph::Graph;
use tracing::debug;

use crate::error::SccError;
use crate::partition::Partition;

/// A directed link between two distinct classes, by 0-based class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassLink {
    /// Source class index.
    pub source: usize,
    /// Destination class index.
    pub dest: usize,
}

/// A deduplicated set of class links, kept in first-insertion order.
///
/// Two sets compare equal when they hold the same links, regardless of order.
#[derive(Debug, Clone, Default)]
pub struct ClassLinkSet {
    links: Vec<ClassLink>,
    seen: HashSet<ClassLink>,
}

impl ClassLinkSet {
    /// Creates an empty link set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `source -> dest`.
    ///
    /// Returns `false` without inserting if the link is already present or
    /// if `source == dest`.
    pub fn insert(&mut self, source: usize, dest: usize) -> bool {
        if source == dest {
            return false;
        }
        let link = ClassLink { source, dest };
        if !self.seen.insert(link) {
            return false;
        }
        self.links.push(link);
        true
    }

    /// Returns `true` if the set holds `source -> dest`.
    pub fn contains(&self, source: usize, dest: usize) -> bool {
        self.seen.contains(&ClassLink { source, dest })
    }

    /// Returns the number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the set holds no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over links in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassLink> {
        self.links.iter()
    }

    /// Iterates over the destinations of links leaving `class`.
    pub fn outgoing(&self, class: usize) -> impl Iterator<Item = usize> + '_ {
        self.links
            .iter()
            .filter(move |l| l.source == class)
            .map(|l| l.dest)
    }

    /// Returns the Hasse diagram of this link set.
    ///
    /// A link `A -> C` is dropped when some other link `A -> B` exists,
    /// `C` is reachable from `B` in this (unmodified) set, and `A` is not.
    /// The decision for each link reads only the original set, so the result
    /// does not depend on insertion order. Kept links retain their relative
    /// order.
    ///
    /// An intermediate `B` that leads back to `A` shares a cycle with it and
    /// never justifies dropping a link, so every class keeps at least one
    /// outgoing link if it had any, even on cyclic input.
    #[tracing::instrument(skip_all, fields(n_links = self.len()))]
    pub fn transitive_reduction(&self) -> ClassLinkSet {
        let mut successors: HashMap<usize, Vec<usize>> = HashMap::new();
        for link in &self.links {
            successors.entry(link.source).or_default().push(link.dest);
        }

        let mut reach_cache: HashMap<usize, HashSet<usize>> = HashMap::new();
        let mut reduced = ClassLinkSet::new();
        for link in &self.links {
            let implied = successors[&link.source]
                .iter()
                .filter(|&&b| b != link.dest)
                .any(|&b| {
                    let reach = reach_cache
                        .entry(b)
                        .or_insert_with(|| reachable_from(b, &successors));
                    reach.contains(&link.dest) && !reach.contains(&link.source)
                });
            if !implied {
                reduced.insert(link.source, link.dest);
            }
        }
        debug!(
            kept = reduced.len(),
            removed = self.len() - reduced.len(),
            "transitive reduction complete"
        );
        reduced
    }
}

impl PartialEq for ClassLinkSet {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for ClassLinkSet {}

impl FromIterator<(usize, usize)> for ClassLinkSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = ClassLinkSet::new();
        for (source, dest) in iter {
            set.insert(source, dest);
        }
        set
    }
}

/// Classes reachable from `start` by one or more links.
fn reachable_from(start: usize, successors: &HashMap<usize, Vec<usize>>) -> HashSet<usize> {
    let mut seen = HashSet::new();
    let mut pending = vec![start];
    while let Some(node) = pending.pop() {
        if let Some(next) = successors.get(&node) {
            for &n in next {
                if seen.insert(n) {
                    pending.push(n);
                }
            }
        }
    }
    seen
}

impl Partition {
    /// Maps each 0-based state index to the index of its class.
    ///
    /// # Panics
    ///
    /// Panics if a class member lies outside `1..=n_states`, if a state is
    /// listed in two classes, or if a state is not assigned to any class.
    /// Each of these means the partition was built incorrectly.
    pub fn vertex_to_class(&self) -> Vec<usize> {
        let n = self.n_states();
        let mut map: Vec<Option<usize>> = vec![None; n];
        for (class_index, class) in self.iter() {
            for &state in class.members() {
                assert!(
                    (1..=n).contains(&state),
                    "state {state} out of range in class {}",
                    class.name()
                );
                let slot = &mut map[state - 1];
                assert!(
                    slot.is_none(),
                    "state {state} assigned to two classes"
                );
                *slot = Some(class_index);
            }
        }
        map.into_iter()
            .enumerate()
            .map(|(i, c)| c.unwrap_or_else(|| panic!("state {} not assigned to any class", i + 1)))
            .collect()
    }
}

/// Collects the deduplicated links between distinct classes induced by the
/// graph's edges. Edge weights and multiplicities are not carried over.
///
/// # Errors
///
/// Returns [`SccError::StateCountMismatch`] if `vertex_to_class` does not
/// cover exactly the graph's states.
pub fn class_links(graph: &Graph, vertex_to_class: &[usize]) -> Result<ClassLinkSet, SccError> {
    if vertex_to_class.len() != graph.n_states() {
        return Err(SccError::StateCountMismatch {
            mapped: vertex_to_class.len(),
            n_states: graph.n_states(),
        });
    }
    let mut links = ClassLinkSet::new();
    for edge in graph.edges() {
        let source = vertex_to_class[edge.from_index()];
        let dest = vertex_to_class[edge.to_index()];
        links.insert(source, dest);
    }
    debug!(n_links = links.len(), "class links collected");
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tarjan::tarjan;

    fn set(links: &[(usize, usize)]) -> ClassLinkSet {
        links.iter().copied().collect()
    }

    #[test]
    fn insert_deduplicates_and_skips_self_links() {
        let mut s = ClassLinkSet::new();
        assert!(s.insert(0, 1));
        assert!(!s.insert(0, 1));
        assert!(!s.insert(2, 2));
        assert_eq!(s.len(), 1);
        assert!(s.contains(0, 1));
        assert!(!s.contains(1, 0));
    }

    #[test]
    fn outgoing_lists_destinations() {
        let s = set(&[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(s.outgoing(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(s.outgoing(2).count(), 0);
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(set(&[(0, 1), (1, 2)]), set(&[(1, 2), (0, 1)]));
        assert_ne!(set(&[(0, 1)]), set(&[(1, 0)]));
    }

    #[test]
    fn reduction_removes_shortcut() {
        let reduced = set(&[(0, 1), (1, 2), (0, 2)]).transitive_reduction();
        assert_eq!(reduced, set(&[(0, 1), (1, 2)]));
    }

    #[test]
    fn reduction_removes_long_shortcut() {
        // 0 -> 3 is implied by 0 -> 1 -> 2 -> 3.
        let reduced = set(&[(0, 3), (0, 1), (1, 2), (2, 3)]).transitive_reduction();
        assert_eq!(reduced, set(&[(0, 1), (1, 2), (2, 3)]));
    }

    #[test]
    fn reduction_keeps_chain() {
        let chain = set(&[(0, 1), (1, 2)]);
        assert_eq!(chain.transitive_reduction(), chain);
    }

    #[test]
    fn reduction_keeps_diamond_sides() {
        let diamond = set(&[(0, 1), (0, 2), (1, 3), (2, 3), (0, 3)]);
        assert_eq!(
            diamond.transitive_reduction(),
            set(&[(0, 1), (0, 2), (1, 3), (2, 3)])
        );
    }

    #[test]
    fn reduction_keeps_links_inside_a_cycle() {
        // 0 -> 1 -> 2 -> 0 plus 0 -> 2: every intermediate leads back to 0.
        let cyclic = set(&[(0, 1), (1, 2), (2, 0), (0, 2)]);
        let reduced = cyclic.transitive_reduction();
        assert_eq!(reduced, cyclic);
        assert_eq!(reduced.outgoing(0).count(), 2);
    }

    #[test]
    fn reduction_drops_shortcut_past_a_cycle() {
        // 1 <-> 2 is a cycle below 0; 0 -> 3 is still implied via 1.
        let links = set(&[(0, 1), (1, 2), (2, 1), (2, 3), (0, 3)]);
        let reduced = links.transitive_reduction();
        assert!(!reduced.contains(0, 3));
        assert!(reduced.contains(0, 1));
        assert!(reduced.contains(1, 2) && reduced.contains(2, 1));
    }

    #[test]
    fn reduction_of_empty_set() {
        assert!(ClassLinkSet::new().transitive_reduction().is_empty());
    }

    #[test]
    fn vertex_map_covers_all_states() {
        let p = Partition::from_members(vec![vec![3], vec![2, 1]], 3);
        assert_eq!(p.vertex_to_class(), vec![1, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "two classes")]
    fn vertex_map_rejects_overlap() {
        Partition::from_members(vec![vec![1, 2], vec![2, 3]], 3);
    }

    #[test]
    fn class_links_from_graph() {
        let mut g = Graph::new(4).unwrap();
        g.add_edge(1, 2, 0.5).unwrap();
        g.add_edge(1, 3, 0.5).unwrap();
        g.add_edge(2, 1, 0.5).unwrap();
        g.add_edge(2, 4, 0.5).unwrap();
        g.add_edge(3, 4, 1.0).unwrap();
        g.add_edge(4, 4, 1.0).unwrap();
        let p = tarjan(&g);
        let map = p.vertex_to_class();
        let links = class_links(&g, &map).unwrap();

        let c12 = map[0];
        let c3 = map[2];
        let c4 = map[3];
        assert_eq!(links, set(&[(c12, c3), (c12, c4), (c3, c4)]));
        assert_eq!(links.transitive_reduction(), set(&[(c12, c3), (c3, c4)]));
    }

    #[test]
    fn class_links_rejects_wrong_map() {
        let g = Graph::new(3).unwrap();
        assert_eq!(
            class_links(&g, &[0, 0]).unwrap_err(),
            SccError::StateCountMismatch {
                mapped: 2,
                n_states: 3
            }
        );
    }
}
