//! Persistence boundary and engagement services for the ladle catalog.
//!
//! [`store`] defines the abstract store traits and their optimistic
//! concurrency contract, [`memory`] implements them in-process, and
//! [`catalog`] / [`engagement`] build the catalog operations on top.

pub mod catalog;
pub mod engagement;
pub mod memory;
pub mod store;

pub use catalog::Catalog;
pub use engagement::EngagementManager;
pub use memory::MemoryStore;
