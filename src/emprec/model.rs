use serde::{Deserialize, Serialize};

/// One employee record. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub department: String,
}

impl Employee {
    pub fn new(id: u64, name: impl Into<String>, age: u32, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            department: department.into(),
        }
    }
}

/// Raw operator input for a new employee, before validation.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDraft {
    pub name: String,
    pub age: String,
    pub department: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            department: department.into(),
        }
    }
}

/// Replacement values for an existing employee. Blank fields keep the old value.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: String,
    pub age: String,
    pub department: String,
}

impl EmployeeUpdate {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            department: department.into(),
        }
    }

    pub fn apply(&self, employee: &mut Employee) {
        if !self.name.is_empty() {
            employee.name = self.name.clone();
        }
        if let Some(age) = parse_digits::<u32>(&self.age) {
            employee.age = age;
        }
        if !self.department.is_empty() {
            employee.department = self.department.clone();
        }
    }
}

/// Parses text made only of ASCII digits. Signs, spaces and overflow are rejected.
pub fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
