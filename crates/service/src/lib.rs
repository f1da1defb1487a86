//! Entity services for the restaurant platform.
//!
//! Each service resolves foreign keys through narrow repositories, applies the
//! cross-entity consistency rules and hands a single write to storage. Storage is
//! pluggable: [`repo::InMemoryRepository`] for tests and local runs, SeaORM
//! repositories behind the `seaorm` feature.

pub mod dates;
pub mod domain;
pub mod errors;
pub mod images;
pub mod pagination;
pub mod repo;
pub mod repository;
pub mod seed;
pub mod serde_ext;
pub mod services;
pub mod validation;
pub mod wiring;

#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use pagination::{PageRequest, Pagination};
pub use repository::{Entity, Repo, Repository};
pub use seed::{seed_demo_data, SeedSummary};
pub use wiring::{Repositories, Services};
