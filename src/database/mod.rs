//! Dataset loading and in-memory indices.
//!
//! The loader reads a delimited close-approach source and populates an
//! [`IndexStore`] with two lookup structures:
//!
//! - approach date -> body names, in load order
//! - body name -> the unique [`Body`](crate::models::Body) instance
//!
//! The store is read and destructively consumed by the searcher; see
//! [`IndexStore::take_available`] for the one-shot contract.

mod errors;
mod loader;
mod store;

pub use errors::{DatabaseError, DatabaseResult};
pub use loader::{
    DatasetLoader, COL_APPROACH_DATE, COL_DIAMETER_MIN, COL_HAZARDOUS, COL_ID, COL_MISS_DISTANCE,
    COL_NAME,
};
pub use store::IndexStore;
