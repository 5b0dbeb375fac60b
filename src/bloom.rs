// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A simple implementation of a Bloom filter using domain-separated SipHash probes.

use std::f64;
use std::hash::Hasher;

use siphasher::sip::SipHasher13;
use thiserror::Error;

use crate::bitvec::BitVec;

/// `ln` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// Seed used for SipHash.
const HASHER_SEED: [u8; 16] = [
    136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
];

/// Error returned when a filter is constructed with degenerate parameters.
///
/// Construction is the only fallible operation; [`BloomFilter::insert`] and
/// [`BloomFilter::contains`] accept any byte sequence and cannot fail.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The expected item capacity was zero.
    #[error("expected item capacity must be greater than zero")]
    ZeroCapacity,
    /// The false positive rate was outside the open interval `(0, 1)`.
    #[error("false positive rate {0} is outside the open interval (0, 1)")]
    RateOutOfRange(f64),
}

/// A Bloom filter over byte-sequence items.
///
/// Bits are only ever set, never cleared: a positive answer from
/// [`BloomFilter::contains`] stays positive for the life of the filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    bits: BitVec,
    nhashes: usize,
}

impl BloomFilter {
    /// Return a new Bloom filter with a given approximate item capacity
    /// and a desired false positive rate.
    ///
    /// The bit vector size and the number of hash probes are derived from the
    /// two parameters via [`optimal_bits`] and [`optimal_hashes`]. The false
    /// positive rate only holds while the number of inserted items stays near
    /// the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is zero, and
    /// [`Error::RateOutOfRange`] if `fp_rate` is not strictly between
    /// 0 and 1.
    pub fn new(capacity: usize, fp_rate: f64) -> Result<BloomFilter, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        if !(fp_rate > 0.0 && fp_rate < 1.0) {
            return Err(Error::RateOutOfRange(fp_rate));
        }
        let nbits = optimal_bits(capacity, fp_rate);
        let nhashes = optimal_hashes(nbits, capacity);

        Ok(BloomFilter {
            bits: BitVec::new(nbits),
            nhashes,
        })
    }

    /// Set an item in the Bloom filter. This operation is idempotent with
    /// regards to each unique item.
    pub fn insert(&mut self, item: &[u8]) {
        for probe in 0..self.nhashes as u64 {
            let index = self.position(probe, item);
            self.bits.set(index);
        }
    }

    /// Return whether or not a given item is likely in the Bloom filter. There
    /// is a possibility of a false positive with the probability being under
    /// the filter's `fp_rate` value, but a false negative will never occur for
    /// an item previously inserted.
    pub fn contains(&self, item: &[u8]) -> bool {
        for probe in 0..self.nhashes as u64 {
            let index = self.position(probe, item);
            if !self.bits.is_set(index) {
                return false;
            }
        }
        true
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash probes per item (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// Map an item to a bit position for the given probe.
    ///
    /// Each probe is a pure function of `(probe, item)`: a keyed SipHash
    /// digest over the probe index followed by the item bytes, reduced modulo
    /// the bit vector length. The probe prefix domain-separates the hashes so
    /// the positions behave as independent samples. Reduction by modulo is
    /// slightly biased when the length does not divide the hash space evenly;
    /// this is accepted.
    fn position(&self, probe: u64, item: &[u8]) -> usize {
        let mut hasher = SipHasher13::new_with_key(&HASHER_SEED);
        hasher.write_u64(probe);
        hasher.write(item);

        (hasher.finish() % self.bits.len() as u64) as usize
    }
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// set size and a desired false positive rate.
///
/// Computes `ceil(-capacity * ln(fp_rate) / ln(2)^2)`, clamped to a minimum
/// of one bit so that extreme inputs still yield a usable vector. The domain
/// (`capacity >= 1`, `fp_rate` in `(0, 1)`) is enforced by
/// [`BloomFilter::new`], not here.
pub fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    let nbits = (-((fp_rate.ln() * (capacity as f64)) / LN_SQR)).ceil() as usize;
    nbits.max(1)
}

/// Return the optimal number of hash probes for a Bloom filter given a bit
/// vector size and an approximate set size.
///
/// Computes `ceil((nbits / capacity) * ln 2)`, clamped to a minimum of one
/// probe. Also called `k`.
pub fn optimal_hashes(nbits: usize, capacity: usize) -> usize {
    let nhashes = ((nbits as f64 / capacity as f64) * f64::consts::LN_2).ceil() as usize;
    nhashes.max(1)
}
