use crate::domain::entities::Identified;
use crate::domain::value_objects::RecordId;
use std::collections::HashSet;

/// Client-held copy of one resource listing: the records in server response
/// order plus the set of ids with a mutation currently in flight.
///
/// Every public method completes synchronously, so the collection a reader
/// observes is always a fully-applied snapshot, never a half-written one.
pub struct ListState<T> {
    records: Vec<T>,
    in_flight: HashSet<RecordId>,
}

impl<T: Identified> ListState<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            in_flight: HashSet::new(),
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Bulk replace from a fresh fetch. Clears nothing else: in-flight
    /// markers survive a refetch because their requests are still pending.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }

    /// Apply a local field mutation to the record with the given id and
    /// return whatever the mutator produced (the previous field value, for
    /// rollback). A miss is a no-op and returns `None`.
    pub fn apply_optimistic<R>(
        &mut self,
        id: &RecordId,
        mutate: impl FnOnce(&mut T) -> R,
    ) -> Option<R> {
        self.records
            .iter_mut()
            .find(|record| record.id() == id)
            .map(mutate)
    }

    /// Remove the record with the given id, preserving the order of the
    /// rest.
    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Remove the record when the predicate says it no longer belongs to the
    /// visible collection. Returns whether an eviction happened.
    pub fn evict_if(&mut self, id: &RecordId, should_evict: impl Fn(&T) -> bool) -> bool {
        let evict = self.get(id).map_or(false, |record| should_evict(record));
        if evict {
            self.remove(id);
        }
        evict
    }

    pub fn begin(&mut self, id: RecordId) -> bool {
        self.in_flight.insert(id)
    }

    pub fn finish(&mut self, id: &RecordId) {
        self.in_flight.remove(id);
    }

    pub fn is_in_flight(&self, id: &RecordId) -> bool {
        self.in_flight.contains(id)
    }

    pub fn in_flight_ids(&self) -> Vec<RecordId> {
        self.in_flight.iter().cloned().collect()
    }
}

impl<T: Identified> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        status: &'static str,
    }

    impl Identified for Row {
        fn id(&self) -> &RecordId {
            &self.id
        }
    }

    fn row(id: &str, status: &'static str) -> Row {
        Row {
            id: RecordId::parse(id).unwrap(),
            status,
        }
    }

    #[test]
    fn apply_optimistic_returns_previous_value() {
        let mut list = ListState::new();
        list.replace_all(vec![row("1", "pending"), row("2", "pending")]);

        let previous = list.apply_optimistic(&RecordId::parse("2").unwrap(), |r| {
            let prev = r.status;
            r.status = "approved";
            prev
        });

        assert_eq!(previous, Some("pending"));
        assert_eq!(list.get(&RecordId::parse("2").unwrap()).unwrap().status, "approved");
        assert_eq!(list.get(&RecordId::parse("1").unwrap()).unwrap().status, "pending");
    }

    #[test]
    fn apply_optimistic_misses_are_noops() {
        let mut list = ListState::new();
        list.replace_all(vec![row("1", "pending")]);

        let result = list.apply_optimistic(&RecordId::parse("missing").unwrap(), |r| {
            r.status = "approved";
        });

        assert!(result.is_none());
        assert_eq!(list.get(&RecordId::parse("1").unwrap()).unwrap().status, "pending");
    }

    #[test]
    fn remove_preserves_order_of_remaining_records() {
        let mut list = ListState::new();
        list.replace_all(vec![row("1", "a"), row("2", "b"), row("3", "c")]);

        let removed = list.remove(&RecordId::parse("2").unwrap());

        assert_eq!(removed.map(|r| r.status), Some("b"));
        let ids: Vec<&str> = list.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn in_flight_markers_are_per_record() {
        let mut list: ListState<Row> = ListState::new();
        let a = RecordId::parse("a").unwrap();
        let b = RecordId::parse("b").unwrap();

        assert!(list.begin(a.clone()));
        assert!(!list.begin(a.clone()));
        assert!(!list.is_in_flight(&b));

        list.finish(&a);
        assert!(!list.is_in_flight(&a));
    }

    #[test]
    fn evict_if_only_removes_on_predicate_match() {
        let mut list = ListState::new();
        list.replace_all(vec![row("1", "blocked"), row("2", "published")]);

        assert!(list.evict_if(&RecordId::parse("1").unwrap(), |r| r.status == "blocked"));
        assert!(!list.evict_if(&RecordId::parse("2").unwrap(), |r| r.status == "blocked"));
        assert_eq!(list.len(), 1);
    }
}
