//! Deterministic seeding: string → 32-bit seed → infinite `[0,1)` stream.
//! Not cryptographic; reproducibility across runs and languages is the only goal.

mod fnv;
mod mulberry;

pub use fnv::{fnv1a_32, FNV_OFFSET_BASIS, FNV_PRIME};
pub use mulberry::Mulberry32;

/// Seed string for a country identity: `"{id}:{name}"`, name taken verbatim.
pub fn seed_string(id: i64, name: &str) -> String {
    format!("{}:{}", id, name)
}

/// Generator for a country identity.
pub fn generator_for(id: i64, name: &str) -> Mulberry32 {
    Mulberry32::new(fnv1a_32(&seed_string(id, name)))
}
