use alloc::vec::Vec;

use super::handle::Handle;

/// One arena slot. Vacant slots form a singly linked free list.
#[derive(Clone)]
enum Entry<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// Owning storage for tree nodes, addressed by [`Handle`].
///
/// A handle stays valid until its element is removed; freed slots are handed
/// out again before the backing vector grows.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    entries: Vec<Entry<T>>,
    next_free: Option<Handle>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn insert(&mut self, element: T) -> Handle {
        let handle = if let Some(handle) = self.next_free {
            let entry = &mut self.entries[handle.index()];
            let Entry::Vacant(next) = *entry else {
                panic!("`Arena::insert()` - free list points at an occupied slot!");
            };
            *entry = Entry::Occupied(element);
            self.next_free = next;
            handle
        } else {
            assert!(
                self.entries.len() <= Handle::MAX,
                "`Arena::insert()` - arena is at maximum capacity ({})",
                Handle::MAX + 1
            );
            self.entries.push(Entry::Occupied(element));
            Handle::new(self.entries.len() - 1)
        };
        self.len += 1;
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.entries[handle.index()] {
            Entry::Occupied(element) => element,
            Entry::Vacant(_) => panic!("`Arena::get()` - `handle` is vacant!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.entries[handle.index()] {
            Entry::Occupied(element) => element,
            Entry::Vacant(_) => panic!("`Arena::get_mut()` - `handle` is vacant!"),
        }
    }

    /// Moves the element out and puts its slot on the free list.
    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let entry = core::mem::replace(&mut self.entries[handle.index()], Entry::Vacant(self.next_free));
        match entry {
            Entry::Occupied(element) => {
                self.next_free = Some(handle);
                self.len -= 1;
                element
            }
            Entry::Vacant(next) => {
                // Put the slot back untouched before reporting the bad handle.
                self.entries[handle.index()] = Entry::Vacant(next);
                panic!("`Arena::remove()` - `handle` is vacant!");
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_free = None;
        self.len = 0;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn with_capacity_preallocates() {
        let arena: Arena<u8> = Arena::with_capacity(24);
        assert!(arena.capacity() >= 24);
        assert!(arena.is_empty());
    }

    #[test]
    fn removed_slots_are_reused_last_in_first_out() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');

        assert_eq!(arena.remove(a), 'a');
        assert_eq!(arena.remove(c), 'c');
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.insert('d'), c);
        assert_eq!(arena.insert('e'), a);
        assert_eq!(*arena.get(b), 'b');
        assert_eq!(arena.len(), 3);
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is vacant!")]
    fn get_after_remove_panics() {
        let mut arena = Arena::new();
        let handle = arena.insert(1u32);
        arena.remove(handle);
        let _ = arena.get(handle);
    }

    #[test]
    #[should_panic(expected = "`Arena::remove()` - `handle` is vacant!")]
    fn double_remove_panics() {
        let mut arena = Arena::new();
        let handle = arena.insert(1u32);
        arena.remove(handle);
        arena.remove(handle);
    }

    #[test]
    #[should_panic(expected = "`Arena::insert()` - arena is at maximum capacity")]
    fn insert_past_max_panics() {
        let mut arena = Arena::new();
        for value in 0..=Handle::MAX + 1 {
            arena.insert(value);
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(u32),
        Overwrite(usize, u32),
        Remove(usize),
        Clear,
    }

    fn operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            10 => any::<u32>().prop_map(Operation::Insert),
            4 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Overwrite(which, value)),
            6 => any::<usize>().prop_map(Operation::Remove),
            1 => Just(Operation::Clear),
        ]
    }

    proptest! {
        #[test]
        fn live_handles_track_a_model(operations in prop::collection::vec(operation(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Insert(value) => {
                        let handle = arena.insert(value);
                        prop_assert!(model.iter().all(|&(live, _)| live != handle));
                        model.push((handle, value));
                    }
                    Operation::Overwrite(which, value) if !model.is_empty() => {
                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Operation::Remove(which) if !model.is_empty() => {
                        let (handle, expected) = model.swap_remove(which % model.len());
                        prop_assert_eq!(arena.remove(handle), expected);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                    Operation::Overwrite(..) | Operation::Remove(_) => {}
                }

                prop_assert_eq!(arena.len(), model.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }
}
