pub mod in_memory;
pub mod sieve_trait;
pub mod strata;

// Re-export the core trait, the in-memory impl, and the strata machinery.
pub use in_memory::InMemorySieve;
pub use sieve_trait::Sieve;
pub use strata::{StrataCache, compute_strata};
