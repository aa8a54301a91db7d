//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the command layer knows about
//! persistence. The whole collection is one document: it is read in full before
//! every operation and written back in full after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON file
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "name": "Alice",
//!         "age": 30,
//!         "department": "Eng"
//!     }
//! ]
//! ```
//!
//! A missing, unparsable or non-array file loads as an empty collection.

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

/// Abstract interface for the employee collection.
pub trait DataStore {
    /// Load the full collection, in stored order.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Replace the stored collection with `employees`.
    fn save(&mut self, employees: &[Employee]) -> Result<()>;
}
