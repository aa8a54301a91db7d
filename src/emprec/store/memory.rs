use super::DataStore;
use crate::error::Result;
use crate::model::Employee;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the collection has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        self.employees = employees.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds `count` employees with ids 1..=count. Does not count as a save.
        pub fn with_employees(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = i as u64 + 1;
                self.store.employees.push(Employee::new(
                    n,
                    format!("Employee {}", n),
                    20 + n as u32,
                    "Eng",
                ));
            }
            self
        }

        pub fn with_employee(mut self, employee: Employee) -> Self {
            self.store.employees.push(employee);
            self
        }
    }
}
