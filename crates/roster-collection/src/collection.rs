//! The ordered collection and its operations.

use chrono::{DateTime, Utc};
use roster_model::{GroupId, Semester, StudyGroup};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ordered by the record's `(students_count, id)` key.
///
/// Equality and ordering look only at the key, so the heap invariant is
/// independent of the remaining record fields.
#[derive(Debug, Clone)]
struct Entry(StudyGroup);

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.0.ordering_key() == other.0.ordering_key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.ordering_key().cmp(&other.0.ordering_key())
    }
}

/// Priority-ordered container of [`StudyGroup`] records.
///
/// Backed by a min-heap over the ordering key. The collection owns its
/// records exclusively; callers get references or cloned values and all
/// replacement goes through [`update`](Self::update) /
/// [`update_by_id`](Self::update_by_id).
///
/// # Example
///
/// ```
/// use roster_collection::GroupCollection;
///
/// let groups = GroupCollection::new();
/// assert!(groups.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GroupCollection {
    heap: BinaryHeap<Reverse<Entry>>,
    initialized_at: DateTime<Utc>,
}

impl GroupCollection {
    /// Creates an empty collection, recording the initialization instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            initialized_at: Utc::now(),
        }
    }

    /// When this collection was initialized.
    #[must_use]
    pub fn initialized_at(&self) -> DateTime<Utc> {
        self.initialized_at
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts a record. O(log n).
    pub fn add(&mut self, group: StudyGroup) {
        self.heap.push(Reverse(Entry(group)));
    }

    /// The record with the minimal ordering key, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&StudyGroup> {
        self.heap.peek().map(|Reverse(entry)| &entry.0)
    }

    /// Removes and returns the record with the minimal ordering key.
    pub fn remove_first(&mut self) -> Option<StudyGroup> {
        self.heap.pop().map(|Reverse(entry)| entry.0)
    }

    /// Removes every record with the given id.
    ///
    /// Ids are unique in practice, so at most one record is expected to
    /// match. Returns `true` if anything was removed.
    pub fn remove_by_id(&mut self, id: GroupId) -> bool {
        let before = self.heap.len();
        self.heap.retain(|Reverse(entry)| entry.0.id() != id);
        self.heap.len() != before
    }

    /// Replaces the record with the given id by `new_group`.
    ///
    /// Does not force `new_group`'s id to equal `id` - that is the
    /// caller's responsibility. Returns `false` (leaving the collection
    /// untouched) if no record matches.
    pub fn update(&mut self, id: GroupId, new_group: StudyGroup) -> bool {
        if !self.remove_by_id(id) {
            return false;
        }
        self.add(new_group);
        true
    }

    /// Id-preserving replace: like [`update`](Self::update), but the
    /// stored replacement always carries `id`.
    pub fn update_by_id(&mut self, id: GroupId, new_group: StudyGroup) -> bool {
        self.update(id, new_group.with_id(id))
    }

    /// Inserts `group` only if the collection is empty or `group`'s key
    /// is strictly less than the current minimum. Returns whether the
    /// record was inserted.
    pub fn add_if_min(&mut self, group: StudyGroup) -> bool {
        let is_min = match self.peek() {
            None => true,
            Some(first) => group.ordering_key() < first.ordering_key(),
        };
        if is_min {
            self.add(group);
        }
        is_min
    }

    /// Removes every record whose key is strictly less than `pivot`'s.
    /// Returns the number of records removed.
    pub fn remove_lower(&mut self, pivot: &StudyGroup) -> usize {
        let key = pivot.ordering_key();
        let before = self.heap.len();
        self.heap
            .retain(|Reverse(entry)| entry.0.ordering_key() >= key);
        before - self.heap.len()
    }

    /// The record with the given id, if present.
    #[must_use]
    pub fn get_by_id(&self, id: GroupId) -> Option<&StudyGroup> {
        self.iter().find(|group| group.id() == id)
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates over all records in arbitrary heap-internal order.
    pub fn iter(&self) -> impl Iterator<Item = &StudyGroup> {
        self.heap.iter().map(|Reverse(entry)| &entry.0)
    }

    /// Full copy of the collection, sorted ascending by ordering key.
    #[must_use]
    pub fn snapshot(&self) -> Vec<StudyGroup> {
        let mut groups: Vec<StudyGroup> = self.iter().cloned().collect();
        groups.sort_by_key(StudyGroup::ordering_key);
        groups
    }

    /// Records whose name contains `substring`, in store-internal order.
    #[must_use]
    pub fn filter_contains_name(&self, substring: &str) -> Vec<&StudyGroup> {
        self.iter()
            .filter(|group| group.name().contains(substring))
            .collect()
    }

    /// Records whose semester is set and strictly greater than `semester`
    /// by the ordinal ordering.
    #[must_use]
    pub fn filter_greater_than_semester(&self, semester: Semester) -> Vec<&StudyGroup> {
        self.iter()
            .filter(|group| group.semester().is_some_and(|s| s > semester))
            .collect()
    }

    /// Administrator names of all records, sorted in reverse
    /// lexicographic order.
    #[must_use]
    pub fn admin_names_descending(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .iter()
            .map(|group| group.group_admin().name().to_string())
            .collect();
        names.sort_by(|a, b| b.cmp(a));
        names
    }
}

impl Default for GroupCollection {
    fn default() -> Self {
        Self::new()
    }
}
