use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use log::trace;
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Dir, Node, Slot};

/// Inline depth of the explicit stacks used to walk the tree. A red-black
/// tree holding `u32::MAX` nodes is at most 64 levels deep.
const WALK_DEPTH: usize = 64;

/// The red-black tree backing `RBTreeMap` and `RBTreeSet`.
#[derive(Clone)]
pub(crate) struct RawRBTreeMap<K, V> {
    /// Arena owning every node; dropping it drops the whole tree.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<K, V> RawRBTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of entries in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no entries.
    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Number of nodes on the longest path from the root down to a leaf.
    pub(crate) fn height(&self) -> usize {
        let mut stack: SmallVec<[(Handle, usize); WALK_DEPTH]> = SmallVec::new();
        stack.extend(self.root.map(|root| (root, 1)));

        let mut height = 0;
        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            for dir in [Dir::Left, Dir::Right] {
                if let Some(child) = node.child(dir) {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Calls `f` on every entry in ascending key order.
    pub(crate) fn for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        let mut stack: SmallVec<[Handle; WALK_DEPTH]> = SmallVec::new();
        let mut current = self.root;

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.child(handle, Dir::Left);
            }
            let Some(handle) = stack.pop() else {
                return;
            };
            let node = self.nodes.get(handle);
            f(&node.key, &node.value);
            current = node.child(Dir::Right);
        }
    }

    #[inline]
    fn child(&self, handle: Handle, dir: Dir) -> Option<Handle> {
        self.nodes.get(handle).child(dir)
    }

    #[inline]
    fn parent(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).parent
    }

    /// Side of its parent `handle` hangs from. Panics for the root.
    #[inline]
    fn dir_of(&self, handle: Handle) -> Dir {
        self.nodes.get(handle).slot.dir().expect("`RawRBTreeMap::dir_of()` - the root has no side!")
    }

    fn swap_colors(&mut self, a: Handle, b: Handle) {
        let color_a = self.nodes.get(a).color;
        let color_b = self.nodes.get(b).color;
        self.nodes.get_mut(a).color = color_b;
        self.nodes.get_mut(b).color = color_a;
    }

    /// Links `child` under `parent` on side `dir` and retags its slot.
    ///
    /// The child's parent link is left alone; callers set it with `set_parent`.
    fn set_child(&mut self, parent: Handle, dir: Dir, child: Option<Handle>) {
        self.nodes.get_mut(parent).children[dir] = child;
        if let Some(child) = child {
            self.nodes.get_mut(child).slot = dir.into();
        }
    }

    #[inline]
    fn set_parent(&mut self, handle: Handle, parent: Option<Handle>) {
        self.nodes.get_mut(handle).parent = parent;
    }

    /// Puts `new` where `old` hangs, rewiring `old`'s parent (or the root).
    /// `old`'s own links are left stale.
    fn transplant(&mut self, old: Handle, new: Option<Handle>) {
        let node = self.nodes.get(old);
        let parent = node.parent;
        match (parent, node.slot.dir()) {
            (Some(parent), Some(dir)) => self.set_child(parent, dir, new),
            (None, None) => {
                self.root = new;
                if let Some(new) = new {
                    self.nodes.get_mut(new).slot = Slot::Root;
                }
            }
            _ => panic!("`RawRBTreeMap::transplant()` - slot disagrees with parent link!"),
        }
        if let Some(new) = new {
            self.set_parent(new, parent);
        }
    }

    /// Single rotation at `node` toward `dir`.
    ///
    /// The child on the opposite side is promoted into `node`'s position and
    /// `node` becomes its `dir` child; the promoted child's `dir` subtree moves
    /// under `node`. `rotate(x, Dir::Left)` is the textbook left rotation.
    /// Colors are untouched.
    fn rotate(&mut self, node: Handle, dir: Dir) {
        let Some(pivot) = self.child(node, dir.opposite()) else {
            panic!("`RawRBTreeMap::rotate()` - no child to promote!");
        };
        let inner = self.child(pivot, dir);

        self.transplant(node, Some(pivot));

        self.set_child(node, dir.opposite(), inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(node));
        }

        self.set_child(pivot, dir, Some(node));
        self.set_parent(node, Some(pivot));
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.child(handle, Dir::Left) {
            handle = left;
        }
        handle
    }

    /// Restores "no red node has a red child" after `node` was linked in red.
    fn insert_fixup(&mut self, mut node: Handle) {
        loop {
            let Some(parent) = self.parent(node) else {
                return;
            };
            if !self.nodes.get(parent).is_red() {
                return;
            }

            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.parent(parent).expect("`RawRBTreeMap::insert_fixup()` - red node has no parent!");
            let side = self.dir_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.nodes.get(uncle).is_red()) {
                trace!("insert fixup: red uncle {uncle:?}, recoloring under {grandparent:?}");
                self.nodes.get_mut(parent).flip_color();
                self.nodes.get_mut(uncle).flip_color();
                let grand = self.nodes.get_mut(grandparent);
                grand.flip_color();
                if grand.slot == Slot::Root {
                    grand.flip_color();
                    return;
                }
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.dir_of(node) != side {
                trace!("insert fixup: inner grandchild {node:?}, rotating at {parent:?}");
                self.rotate(parent, side);
                parent = node;
            }
            trace!("insert fixup: outer grandchild, rotating at {grandparent:?}");
            self.rotate(grandparent, side.opposite());
            self.nodes.get_mut(grandparent).flip_color();
            self.nodes.get_mut(parent).flip_color();
            return;
        }
    }

    /// Repays a missing black node on the `side` subtree of `parent`.
    fn erase_fixup(&mut self, mut parent: Handle, mut side: Dir) {
        loop {
            let sibling = self
                .child(parent, side.opposite())
                .expect("`RawRBTreeMap::erase_fixup()` - deficient subtree has no sibling!");

            if self.nodes.get(sibling).is_red() {
                trace!("erase fixup: red sibling {sibling:?}, rotating at {parent:?}");
                self.rotate(parent, side);
                self.swap_colors(parent, sibling);
                continue;
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());

            if let Some(far) = far.filter(|&far| self.nodes.get(far).is_red()) {
                trace!("erase fixup: red far nephew {far:?}, rotating at {parent:?}");
                self.swap_colors(parent, sibling);
                self.rotate(parent, side);
                self.nodes.get_mut(far).color = Color::Black;
                return;
            }

            if let Some(near) = near.filter(|&near| self.nodes.get(near).is_red()) {
                trace!("erase fixup: red near nephew {near:?}, rotating at {sibling:?}");
                self.rotate(sibling, side.opposite());
                self.swap_colors(sibling, near);
                continue;
            }

            if self.nodes.get(parent).is_red() {
                trace!("erase fixup: black nephews, red parent {parent:?}");
                self.swap_colors(parent, sibling);
                return;
            }

            trace!("erase fixup: black nephews, pushing deficit above {parent:?}");
            self.nodes.get_mut(sibling).color = Color::Red;
            match self.parent(parent) {
                Some(grandparent) => {
                    side = self.dir_of(parent);
                    parent = grandparent;
                }
                None => return,
            }
        }
    }
}

impl<K: Ord, V> RawRBTreeMap<K, V> {
    /// Plain BST descent for `key`.
    fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.child(Dir::Left),
                Ordering::Greater => node.child(Dir::Right),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns true if `key` is stored in the tree.
    pub(crate) fn find<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((&node.key, &node.value))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Links a new entry and rebalances. Returns false, dropping `key` and
    /// `value`, if an equal key is already stored.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool {
        let Some(mut current) = self.root else {
            let mut node = Node::new(key, value);
            node.color = Color::Black;
            self.root = Some(self.nodes.insert(node));
            return true;
        };

        let dir = loop {
            let dir = match key.cmp(&self.nodes.get(current).key) {
                Ordering::Less => Dir::Left,
                Ordering::Greater => Dir::Right,
                Ordering::Equal => return false,
            };
            match self.child(current, dir) {
                Some(next) => current = next,
                None => break dir,
            }
        };

        let handle = self.nodes.insert(Node::new(key, value));
        self.set_child(current, dir, Some(handle));
        self.set_parent(handle, Some(current));
        self.insert_fixup(handle);
        true
    }

    /// Unlinks the entry for `key`, rebalances, and hands the entry back.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.search(key)?;

        // With two children the in-order successor is unlinked instead and
        // the two payloads trade places afterwards.
        let node = self.nodes.get(target);
        let removed = match (node.child(Dir::Left), node.child(Dir::Right)) {
            (Some(_), Some(right)) => self.leftmost(right),
            _ => target,
        };

        let node = self.nodes.get(removed);
        let child = node.children.single();
        let parent = node.parent;
        let side = node.slot.dir();
        let color = node.color;

        self.transplant(removed, child);
        let mut entry = self.nodes.remove(removed);
        if removed != target {
            let kept = self.nodes.get_mut(target);
            mem::swap(&mut kept.key, &mut entry.key);
            mem::swap(&mut kept.value, &mut entry.value);
        }

        if color == Color::Black {
            if let Some(child) = child.filter(|&child| self.nodes.get(child).is_red()) {
                self.nodes.get_mut(child).color = Color::Black;
            } else if let (Some(parent), Some(side)) = (parent, side) {
                self.erase_fixup(parent, side);
            }
        }

        Some((entry.key, entry.value))
    }

    /// Returns whether `key` was present, dropping its entry.
    pub(crate) fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).is_some()
    }
}
