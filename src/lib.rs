//! Red-black tree collections for Rust.
//!
//! This crate provides [`RBTreeMap`] and [`RBTreeSet`], ordered containers with
//! unique keys built on a self-balancing binary search tree:
//!
//! - [`find`](RBTreeMap::find) - O(log n) membership test
//! - [`insert`](RBTreeMap::insert) - O(log n); inserting an existing key is a no-op
//! - [`erase`](RBTreeMap::erase) - O(log n); reports whether the key was present
//!
//! # Example
//!
//! ```
//! use frbtree::{RBTreeMap, RBTreeSet};
//!
//! let mut fields = RBTreeMap::new();
//! fields.insert("name", "frbtree");
//! fields.insert("kind", "library");
//! assert_eq!(fields.get(&"kind"), Some(&"library"));
//!
//! let mut ids: RBTreeSet<u64> = (1..=1_000).collect();
//! assert!(ids.erase(&500));
//! assert!(!ids.find(&500));
//! assert!(ids.height() <= 20);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No `Clone` bound on keys** - Removing a node with two children moves entries, never copies them
//! - **Guaranteed height** - At most `2 * log2(n + 1)` levels for `n` entries
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their children and parent through
//! handles instead of pointers, so the crate needs no `unsafe` code. Each node
//! also caches which side of its parent it hangs from; the rebalancing code
//! is written once against a left/right direction parameter and mirrored by
//! flipping it.
//!
//! Rebalancing decisions are reported through the [`log`] facade at `trace`
//! level.
//!
//! The containers are not internally synchronized. Share one between threads
//! by wrapping the whole container in a lock.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod rbtree_map;
pub mod rbtree_set;

pub use rbtree_map::RBTreeMap;
pub use rbtree_set::RBTreeSet;
