//! Slab-backed text queue with in-place reversal and stable merge sort.
//!
//! This crate provides [`Queue`], a singly-linked FIFO of owned strings.
//! The key insight, shared with the rest of the workspace: separate storage
//! from structure.
//!
//! # Design Philosophy
//!
//! A pointer-chained list owns each node through its predecessor, which
//! makes structural surgery (reversal, merge sort) a fight with the
//! borrow checker or a descent into raw pointers. This crate inverts the
//! model:
//!
//! ```text
//! Slab        - owns node memory, provides stable keys
//! Queue       - coordinates keys: head, tail, per-node successor
//! ```
//!
//! Benefits:
//! - **No dangling links**: a key either resolves to an occupied slot or
//!   is the reserved `NIL` sentinel; freed slots are unreachable from the
//!   chain by invariant
//! - **Relink, don't reallocate**: `reverse` and `sort` rewrite successor
//!   keys only — no node or string is allocated, freed, or copied
//! - **Slot reuse**: steady-state churn (push/pop) recycles slab slots
//!   instead of growing the arena
//!
//! # Quick Start
//!
//! ```
//! use twine_queue::Queue;
//!
//! let mut q = Queue::new();
//! q.push_back("c");
//! q.push_back("a");
//! q.push_back("b");
//!
//! q.sort();
//! assert_eq!(q.pop_front().as_deref(), Some("a"));
//! assert_eq!(q.pop_front().as_deref(), Some("b"));
//! assert_eq!(q.pop_front().as_deref(), Some("c"));
//! ```
//!
//! # Concurrency
//!
//! None. Every mutating operation takes `&mut self`, so exclusive access
//! to one queue is enforced by the type system; distinct queues share
//! nothing.

#![warn(missing_docs)]

pub mod queue;

pub use queue::{Iter, Queue};
