//! In-memory repository implementations.

mod culture;

pub use culture::InMemoryCultureRepository;
