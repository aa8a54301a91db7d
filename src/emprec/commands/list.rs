use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let employees = store.load()?;

    if employees.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("No employees found."));
        return Ok(result);
    }

    Ok(CmdResult::default().with_listed_employees(employees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, delete};
    use crate::model::EmployeeDraft;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_reports_no_employees() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_employees.is_empty());
        assert_eq!(result.messages[0].content, "No employees found.");
    }

    #[test]
    fn lists_in_stored_order() {
        let fixture = StoreFixture::new().with_employees(3);
        let result = run(&fixture.store).unwrap();
        let ids: Vec<_> = result.listed_employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn ids_survive_deletion_without_renumbering() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, &EmployeeDraft::new("Alice", "30", "Eng")).unwrap();
        add::run(&mut store, &EmployeeDraft::new("Bob", "41", "Sales")).unwrap();
        delete::run(&mut store, 1).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed_employees.len(), 1);
        assert_eq!(result.listed_employees[0].id, 2);
        assert_eq!(result.listed_employees[0].name, "Bob");
    }
}
