//! Transient / persistent / absorbing classification of classes.
//!
//! All predicates read already-computed structures. The transient test works
//! on either the raw or the reduced link set: reduction keeps at least one
//! outgoing link of every class that has one, cyclic input included.

use crate::condensation::ClassLinkSet;
use crate::error::SccError;
use crate::partition::Partition;

/// Long-run behaviour of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// Probability mass can leave the class for good.
    Transient,
    /// No link leaves the class.
    Persistent,
}

/// Classification of one class of a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSummary {
    /// 0-based class index.
    pub index: usize,
    /// Transient or persistent.
    pub kind: ClassKind,
    /// `true` for a persistent class with exactly one state.
    pub absorbing: bool,
}

/// Returns `true` if `class` has a link to a different class.
pub fn is_transient(class: usize, links: &ClassLinkSet) -> bool {
    links.outgoing(class).any(|dest| dest != class)
}

/// Returns `true` if no link leaves `class`.
pub fn is_persistent(class: usize, links: &ClassLinkSet) -> bool {
    !is_transient(class, links)
}

/// Returns `true` if `class` is persistent and holds exactly one state.
///
/// # Errors
///
/// Returns [`SccError::ClassIndexOutOfRange`] if `class` is not an index of
/// `partition`.
pub fn is_absorbing(
    partition: &Partition,
    class: usize,
    links: &ClassLinkSet,
) -> Result<bool, SccError> {
    let members = partition.class(class)?.len();
    Ok(is_persistent(class, links) && members == 1)
}

/// Returns `true` if the partition consists of a single class.
pub fn is_irreducible(partition: &Partition) -> bool {
    partition.len() == 1
}

/// Classifies every class of the partition, in class order.
pub fn classify(partition: &Partition, links: &ClassLinkSet) -> Vec<ClassSummary> {
    partition
        .iter()
        .map(|(index, class)| {
            let kind = if is_transient(index, links) {
                ClassKind::Transient
            } else {
                ClassKind::Persistent
            };
            ClassSummary {
                index,
                kind,
                absorbing: kind == ClassKind::Persistent && class.len() == 1,
            }
        })
        .collect()
}
