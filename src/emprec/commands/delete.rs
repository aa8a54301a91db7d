use crate::commands::{CmdMessage, CmdResult};
use crate::error::{EmprecError, Result};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let employees = store.load()?;
    let (removed, kept): (Vec<_>, Vec<_>) = employees.into_iter().partition(|e| e.id == id);

    if removed.is_empty() {
        return Err(EmprecError::EmployeeNotFound(id));
    }

    store.save(&kept)?;
    debug!(id, "employee deleted");

    let mut result = CmdResult::default().with_affected_employees(removed);
    result.add_message(CmdMessage::success("Employee deleted."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::EmployeeDraft;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_matching_employee() {
        let mut fixture = StoreFixture::new().with_employees(3);
        let result = run(&mut fixture.store, 2).unwrap();

        let ids: Vec<_> = fixture.store.load().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(result.affected_employees[0].id, 2);
        assert_eq!(result.messages[0].content, "Employee deleted.");
        assert_eq!(fixture.store.save_count(), 1);
    }

    #[test]
    fn unknown_id_does_not_write() {
        let mut fixture = StoreFixture::new().with_employees(2);
        let err = run(&mut fixture.store, 5).unwrap_err();
        assert!(matches!(err, EmprecError::EmployeeNotFound(5)));
        assert_eq!(fixture.store.save_count(), 0);
        assert_eq!(fixture.store.load().unwrap().len(), 2);
    }

    #[test]
    fn freed_ids_below_the_max_are_not_reused() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &EmployeeDraft::new("Alice", "30", "Eng")).unwrap();
        add::run(&mut store, &EmployeeDraft::new("Bob", "41", "Sales")).unwrap();
        run(&mut store, 1).unwrap();
        add::run(&mut store, &EmployeeDraft::new("Carol", "28", "Ops")).unwrap();

        let ids: Vec<_> = store.load().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
