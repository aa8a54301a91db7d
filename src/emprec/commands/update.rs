use crate::commands::{CmdMessage, CmdResult};
use crate::error::{EmprecError, Result};
use crate::model::EmployeeUpdate;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, id: u64, update: &EmployeeUpdate) -> Result<CmdResult> {
    let mut employees = store.load()?;

    let employee = employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(EmprecError::EmployeeNotFound(id))?;
    update.apply(employee);
    let updated = employee.clone();

    // Saved even when every field was left blank.
    store.save(&employees)?;
    debug!(id, "employee updated");

    let mut result = CmdResult::default().with_affected_employees(vec![updated]);
    result.add_message(CmdMessage::success("Employee updated."));
    Ok(result)
}
