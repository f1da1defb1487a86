//! Repository implementations.
pub(crate) mod links;
pub mod memory;
#[cfg(feature = "seaorm")]
pub mod seaorm;

pub use links::Relink;
pub use memory::InMemoryRepository;
