use crate::commands::{CmdMessage, CmdResult};
use crate::error::{EmprecError, Result};
use crate::model::{parse_digits, Employee, EmployeeDraft};
use crate::store::DataStore;
use tracing::debug;

use super::helpers::next_id;

pub fn run<S: DataStore>(store: &mut S, draft: &EmployeeDraft) -> Result<CmdResult> {
    let mut employees = store.load()?;

    if draft.name.is_empty() {
        return Err(EmprecError::InvalidInput("name cannot be empty".into()));
    }
    let age = parse_digits::<u32>(&draft.age).ok_or_else(|| {
        EmprecError::InvalidInput(format!("age must be a whole number, got '{}'", draft.age))
    })?;
    if draft.department.is_empty() {
        return Err(EmprecError::InvalidInput("department cannot be empty".into()));
    }

    let employee = Employee::new(
        next_id(&employees)?,
        draft.name.clone(),
        age,
        draft.department.clone(),
    );
    employees.push(employee.clone());
    store.save(&employees)?;
    debug!(id = employee.id, "employee added");

    let mut result = CmdResult::default().with_affected_employees(vec![employee]);
    result.add_message(CmdMessage::success("Employee added."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_first_employee_with_id_one() {
        let mut store = InMemoryStore::new();
        run(&mut store, &EmployeeDraft::new("Alice", "30", "Eng")).unwrap();

        assert_eq!(
            store.load().unwrap(),
            vec![Employee::new(1, "Alice", 30, "Eng")]
        );
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn ids_strictly_increase() {
        let mut store = InMemoryStore::new();
        for name in ["A", "B", "C", "D"] {
            run(&mut store, &EmployeeDraft::new(name, "20", "Eng")).unwrap();
        }

        let ids: Vec<_> = store.load().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn rejects_empty_name() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &EmployeeDraft::new("", "30", "Eng")).unwrap_err();
        assert!(matches!(err, EmprecError::InvalidInput(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn rejects_empty_department() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &EmployeeDraft::new("Alice", "30", "")).unwrap_err();
        assert!(matches!(err, EmprecError::InvalidInput(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn rejects_non_numeric_age() {
        let mut store = InMemoryStore::new();
        for age in ["", "thirty", "-5", "3.5"] {
            let err = run(&mut store, &EmployeeDraft::new("Alice", age, "Eng")).unwrap_err();
            assert!(matches!(err, EmprecError::InvalidInput(_)), "{age:?}");
        }
        assert_eq!(store.save_count(), 0);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn max_stored_id_fails_without_writing() {
        let mut fixture = StoreFixture::new().with_employee(Employee::new(u64::MAX, "A", 1, "X"));
        let err = run(&mut fixture.store, &EmployeeDraft::new("B", "2", "Y")).unwrap_err();

        assert!(matches!(err, EmprecError::IdsExhausted(u64::MAX)));
        assert!(!err.is_recoverable());
        assert_eq!(fixture.store.save_count(), 0);
        assert_eq!(fixture.store.load().unwrap().len(), 1);
    }

    #[test]
    fn reports_success_message() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &EmployeeDraft::new("Alice", "30", "Eng")).unwrap();
        assert_eq!(result.messages[0].content, "Employee added.");
        assert_eq!(result.affected_employees[0].id, 1);
    }
}
