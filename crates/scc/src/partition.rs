//! Classes (strongly connected components) and the partition they form.

use crate::error::SccError;

/// One class of the partition: a named, ordered set of 1-based states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    members: Vec<usize>,
}

impl Class {
    pub(crate) fn new(name: String, members: Vec<usize>) -> Self {
        Self { name, members }
    }

    /// Returns the display name (`C1`, `C2`, ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member states in the order they were popped off the
    /// Tarjan stack.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Returns the number of member states.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the class has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if the 1-based `state` belongs to this class.
    pub fn contains(&self, state: usize) -> bool {
        self.members.contains(&state)
    }
}

/// An ordered collection of classes covering every state exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    classes: Vec<Class>,
    n_states: usize,
}

impl Partition {
    pub(crate) fn new(classes: Vec<Class>, n_states: usize) -> Self {
        Self { classes, n_states }
    }

    /// Builds a partition from explicit member lists, naming classes
    /// `C1, C2, ...` in order.
    ///
    /// # Panics
    ///
    /// Panics if the member lists do not cover `1..=n_states` exactly once.
    pub fn from_members(members: Vec<Vec<usize>>, n_states: usize) -> Self {
        let classes = members
            .into_iter()
            .enumerate()
            .map(|(i, m)| Class::new(format!("C{}", i + 1), m))
            .collect();
        let partition = Self::new(classes, n_states);
        // The class map asserts totality.
        let _ = partition.vertex_to_class();
        partition
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the partition holds no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns the number of states the partition covers.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Returns all classes in discovery order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// Returns the class at a 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`SccError::ClassIndexOutOfRange`] for an unknown index.
    pub fn class(&self, index: usize) -> Result<&Class, SccError> {
        self.classes
            .get(index)
            .ok_or(SccError::ClassIndexOutOfRange {
                index,
                n_classes: self.classes.len(),
            })
    }

    /// Iterates over `(class_index, class)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Class)> {
        self.classes.iter().enumerate()
    }

    /// Returns the index of the class holding the 1-based `state`.
    pub fn class_of(&self, state: usize) -> Option<usize> {
        self.classes.iter().position(|c| c.contains(state))
    }
}
