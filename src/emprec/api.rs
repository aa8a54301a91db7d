//! # API Facade
//!
//! The single entry point for employee operations, whatever the UI. It turns raw
//! operator text (ids) into typed values and dispatches to `commands/*.rs`.
//!
//! `EmprecApi<S: DataStore>` is generic over the storage backend:
//! - Production: `EmprecApi<FileStore>`
//! - Testing: `EmprecApi<InMemoryStore>`
//!
//! No business logic and no terminal I/O live here.

use crate::commands;
use crate::commands::helpers::parse_id;
use crate::error::Result;
use crate::model::{EmployeeDraft, EmployeeUpdate};
use crate::store::DataStore;

pub struct EmprecApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> EmprecApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_employee(&mut self, draft: &EmployeeDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_employee(&self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::view::run(&self.store, id)
    }

    pub fn update_employee(
        &mut self,
        id: &str,
        update: &EmployeeUpdate,
    ) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_employee(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
