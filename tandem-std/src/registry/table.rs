//! Per-phase event tables.

use super::wrapper::WrapperMap;
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::Arc;
use tandem_core::{EventName, Listener, ListenerId};

/// Ordered listeners for one event name.
///
/// The list is reference counted so an emit pass can keep walking it after
/// the table has dropped or replaced it.
pub(crate) type EventList<A> = Arc<Mutex<Vec<Listener<A>>>>;

/// Event lists for a single phase, plus the once-wrapper lookup.
///
/// Invariant: every list held by `lists` is non-empty once a mutation
/// returns. Names keep the order in which they were (re)created.
pub(crate) struct PhaseTable<A> {
    lists: IndexMap<EventName, EventList<A>>,
    wrapped: WrapperMap,
}

impl<A> PhaseTable<A> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            lists: IndexMap::with_capacity(capacity),
            wrapped: WrapperMap::default(),
        }
    }

    /// Append a listener, creating the list on first use.
    ///
    /// Returns the new length of the list.
    pub(crate) fn push(&mut self, name: EventName, listener: Listener<A>) -> usize {
        let list = self.lists.entry(name).or_default();
        let mut entries = list.lock();
        entries.push(listener);
        entries.len()
    }

    /// Record which wrapper stands in for `original`.
    pub(crate) fn wrap(&mut self, original: ListenerId, wrapper: ListenerId) {
        self.wrapped.insert(original, wrapper);
    }

    /// The live list for `name`, shared with the table.
    pub(crate) fn list(&self, name: &str) -> Option<EventList<A>> {
        self.lists.get(name).cloned()
    }

    /// Remove the first entry matching `id`, falling back to the wrapper
    /// registered for `id` by a once registration.
    ///
    /// Returns the entry that was actually removed, so the caller can drop it
    /// once the table is unlocked. A list left empty is dropped from the
    /// table. The wrapper mapping is left in place.
    pub(crate) fn remove(&mut self, name: &str, id: ListenerId) -> Option<Listener<A>> {
        let list = self.list(name)?;
        let (removed, emptied) = {
            let mut entries = list.lock();
            let removed = take(&mut entries, id).or_else(|| {
                self.wrapped
                    .get(id)
                    .and_then(|wrapper| take(&mut entries, wrapper))
            });
            (removed, entries.is_empty())
        };
        if emptied {
            self.lists.shift_remove(name);
        }
        removed
    }

    /// Detach the list for `name` whatever it contains.
    pub(crate) fn clear(&mut self, name: &str) -> Option<EventList<A>> {
        self.lists.shift_remove(name)
    }

    /// Detach every list.
    pub(crate) fn clear_all(&mut self) -> Vec<EventList<A>> {
        self.lists.drain(..).map(|(_, list)| list).collect()
    }

    pub(crate) fn count(&self, name: &str) -> usize {
        self.lists.get(name).map_or(0, |list| list.lock().len())
    }

    /// An independent copy of the list for `name`.
    pub(crate) fn snapshot(&self, name: &str) -> Option<Vec<Listener<A>>> {
        self.lists.get(name).map(|list| list.lock().clone())
    }

    pub(crate) fn names(&self) -> Vec<EventName> {
        self.lists.keys().cloned().collect()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.lists.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

fn take<A>(entries: &mut Vec<Listener<A>>, id: ListenerId) -> Option<Listener<A>> {
    let index = entries.iter().position(|listener| listener.id() == id)?;
    Some(entries.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Listener<()> {
        Listener::new(|_: &()| {})
    }

    #[test]
    fn test_push_creates_list_lazily() {
        let mut table = PhaseTable::with_capacity(0);
        assert!(table.is_empty());

        assert_eq!(table.push("e1".into(), noop()), 1);
        assert_eq!(table.push("e1".into(), noop()), 2);
        assert_eq!(table.count("e1"), 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_direct_removes_first_match() {
        let mut table = PhaseTable::with_capacity(0);
        let f = noop();
        let g = noop();
        table.push("e".into(), f.clone());
        table.push("e".into(), g.clone());
        table.push("e".into(), f.clone());

        assert_eq!(table.remove("e", f.id()), Some(f.clone()));
        let left: Vec<_> = table.snapshot("e").unwrap();
        assert_eq!(left, vec![g, f]);
    }

    #[test]
    fn test_remove_last_entry_drops_name() {
        let mut table = PhaseTable::with_capacity(0);
        let f = noop();
        table.push("e".into(), f.clone());

        assert_eq!(table.remove("e", f.id()), Some(f));
        assert!(!table.contains("e"));
        assert!(table.names().is_empty());
    }

    #[test]
    fn test_remove_falls_back_to_wrapper() {
        let mut table = PhaseTable::with_capacity(0);
        let original = noop();
        let wrapper = noop();
        table.wrap(original.id(), wrapper.id());
        table.push("e".into(), wrapper.clone());

        assert_eq!(table.remove("e", original.id()), Some(wrapper));
        assert_eq!(table.count("e"), 0);
        // The stale mapping stays; a second removal finds nothing.
        assert_eq!(table.remove("e", original.id()), None);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut table = PhaseTable::with_capacity(0);
        let f = noop();
        table.push("e".into(), f.clone());

        assert_eq!(table.remove("missing", f.id()), None);
        assert_eq!(table.remove("e", noop().id()), None);
        assert_eq!(table.count("e"), 1);
    }

    #[test]
    fn test_names_follow_recreation_order() {
        let mut table = PhaseTable::with_capacity(4);
        let a = noop();
        table.push("a".into(), a.clone());
        table.push("b".into(), noop());
        table.push("c".into(), noop());

        table.remove("a", a.id());
        table.push("a".into(), noop());
        assert_eq!(table.names(), vec!["b", "c", "a"]);

        assert!(table.clear("c").is_some());
        assert!(table.clear("c").is_none());
        assert_eq!(table.names(), vec!["b", "a"]);

        assert_eq!(table.clear_all().len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_detached_list_survives_clear() {
        let mut table = PhaseTable::with_capacity(0);
        table.push("e".into(), noop());
        let detached = table.list("e").unwrap();

        drop(table.clear("e"));
        assert_eq!(detached.lock().len(), 1);
        assert_eq!(table.count("e"), 0);
    }
}
