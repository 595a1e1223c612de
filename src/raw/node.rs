use core::ops::{Index, IndexMut};

use super::handle::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    /// The other color.
    #[inline]
    pub(crate) const fn flipped(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Side of a parent a child hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Position a node currently occupies: under its parent, or as the root.
///
/// Redundant with the parent's child links; cached so fixups can ask "which
/// side am I on" without comparing handles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    Left,
    Right,
    Root,
}

impl Slot {
    /// The side this slot names, or `None` for the root.
    #[inline]
    pub(crate) const fn dir(self) -> Option<Dir> {
        match self {
            Slot::Left => Some(Dir::Left),
            Slot::Right => Some(Dir::Right),
            Slot::Root => None,
        }
    }
}

impl From<Dir> for Slot {
    fn from(dir: Dir) -> Self {
        match dir {
            Dir::Left => Slot::Left,
            Dir::Right => Slot::Right,
        }
    }
}

/// Both child links of a node, indexed by [`Dir`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Children([Option<Handle>; 2]);

impl Index<Dir> for Children {
    type Output = Option<Handle>;

    #[inline]
    fn index(&self, dir: Dir) -> &Option<Handle> {
        &self.0[dir as usize]
    }
}

impl IndexMut<Dir> for Children {
    #[inline]
    fn index_mut(&mut self, dir: Dir) -> &mut Option<Handle> {
        &mut self.0[dir as usize]
    }
}

impl Children {
    /// The only child, if there is at most one.
    pub(crate) fn single(&self) -> Option<Handle> {
        debug_assert!(self.0[0].is_none() || self.0[1].is_none(), "`Children::single()` - node has two children!");
        self.0[0].or(self.0[1])
    }
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) children: Children,
    /// Back link; never owns.
    pub(crate) parent: Option<Handle>,
    pub(crate) color: Color,
    pub(crate) slot: Slot,
}

impl<K, V> Node<K, V> {
    /// A detached node: red, childless, and in the root slot until attached.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            children: Children::default(),
            parent: None,
            color: Color::Red,
            slot: Slot::Root,
        }
    }

    #[inline]
    pub(crate) fn child(&self, dir: Dir) -> Option<Handle> {
        self.children[dir]
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub(crate) fn flip_color(&mut self) {
        self.color = self.color.flipped();
    }
}
