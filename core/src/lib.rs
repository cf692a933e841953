//! paydash-core: deterministic synthetic dataset generation for a
//! payment-performance dashboard.
//!
//! Everything is derived from a (business profile, date range)
//! selection: the pair resolves to an integer seed, the seed drives
//! a reproducible pseudo-random stream, and the stream feeds every
//! synthesized series in a fixed order. No wall clock, no platform
//! RNG, no I/O outside the ledger's key-value store.

pub mod dataset;
pub mod error;
pub mod generator;
pub mod ledger;
pub mod profile;
pub mod rng;
pub mod series;
pub mod store;
pub mod timeframe;
