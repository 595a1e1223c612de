use core::fmt;
use core::num::NonZero;

// Narrow in tests so the arena limit is cheap to hit.
#[cfg(test)]
type Repr = u16;
#[cfg(not(test))]
type Repr = u32;

/// Names one node slot in the arena.
///
/// A tree link is an `Option<Handle>`. The slot number is kept shifted up by
/// one, so zero is free to encode `None` and a link is no wider than `Repr`.
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Repr>);

impl Handle {
    /// Highest slot number a handle can address.
    pub(crate) const MAX: usize = Repr::MAX as usize - 1;

    #[inline]
    pub(crate) const fn new(slot: usize) -> Self {
        assert!(slot <= Self::MAX, "`Handle::new()` - `slot` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        let shifted = slot as Repr + 1;
        match NonZero::new(shifted) {
            Some(shifted) => Self(shifted),
            None => unreachable!(),
        }
    }

    /// Slot number in the arena's entry vector.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
