use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::find_employee;

/// Looks up a single employee by id without changing anything.
pub fn run<S: DataStore>(store: &S, id: u64) -> Result<CmdResult> {
    let employees = store.load()?;
    let employee = find_employee(&employees, id)?.clone();
    Ok(CmdResult::default().with_listed_employees(vec![employee]))
}
