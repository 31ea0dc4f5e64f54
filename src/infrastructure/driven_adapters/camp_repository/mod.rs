//! Camp Repository Adapters

mod in_memory;
mod postgres;

pub use in_memory::InMemoryCampRepository;
pub use postgres::PostgresCampRepository;
