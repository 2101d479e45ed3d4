//! Record identifiers.
//!
//! Identifiers are random (version 4) UUIDs rendered as
//! `<urn:uuid:xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx>`. Randomness comes from
//! a [`RandomSource`], so tests can swap in a seeded generator.

use parking_lot::Mutex;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use uuid::{Builder, Uuid};

/// Source of random bytes. Implementations must be safe to share across
/// threads.
pub trait RandomSource: Send + Sync {
    /// Fill `buf` with random bytes.
    fn fill(&self, buf: &mut [u8]);
}

/// Operating system randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Deterministic source for tests and reproducible fixtures.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill(&self, buf: &mut [u8]) {
        self.rng.lock().fill_bytes(buf);
    }
}

/// Generate a fresh record identifier from OS randomness.
pub fn new_record_id() -> String {
    record_id_from(&OsRandom)
}

/// Generate a record identifier from the given source.
pub fn record_id_from(source: &dyn RandomSource) -> String {
    format_record_id(&new_uuid(source))
}

/// Generate a version 4 UUID from the given source.
pub fn new_uuid(source: &dyn RandomSource) -> Uuid {
    let mut bytes = [0u8; 16];
    source.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

/// Render a UUID as a record identifier.
pub fn format_record_id(uuid: &Uuid) -> String {
    format!("<{}>", uuid.urn())
}
