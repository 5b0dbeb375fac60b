//! A simple implementation of a Bloom filter, a space-efficient probabilistic
//! data structure.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! The provided implementation sizes the filter from the approximate number of
//! items expected to be inserted and a target false positive probability: the
//! optimal bit vector length `m` and probe count `k` are derived with the
//! textbook formulas `m = ceil(-n ln p / ln(2)^2)` and `k = ceil((m/n) ln 2)`.
//! Both parameters are fixed at construction.
//!
//! # Domain-Separated Hashing
//!
//! Each of the `k` bit positions for an item is derived with one keyed
//! SipHash-1-3 invocation over the probe index followed by the item bytes.
//! Prefixing the probe index domain-separates the digests, so a single hash
//! primitive yields `k` independent-looking positions without any shared
//! mutable hasher state between calls.
//!
//! # Example
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 0.05)?;
//!
//! filter.insert(b"foo");
//! filter.insert(b"bar");
//!
//! filter.contains(b"foo"); // true
//! filter.contains(b"bar"); // true
//! filter.contains(b"baz"); // false
//! # Ok::<(), bloomset::Error>(())
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;

pub use bloom::{BloomFilter, Error};
