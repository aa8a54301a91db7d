use crate::error::{EmprecError, Result};
use crate::model::{parse_digits, Employee};

/// Next id to hand out: one past the largest id ever kept, or 1 for an empty collection.
pub fn next_id(employees: &[Employee]) -> Result<u64> {
    match employees.iter().map(|e| e.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(EmprecError::IdsExhausted(max)),
    }
}

/// Parses an operator-typed id. Only plain digit strings are accepted.
pub fn parse_id(input: &str) -> Result<u64> {
    parse_digits(input).ok_or_else(|| EmprecError::InvalidId(input.to_string()))
}

pub fn find_employee(employees: &[Employee], id: u64) -> Result<&Employee> {
    employees
        .iter()
        .find(|e| e.id == id)
        .ok_or(EmprecError::EmployeeNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_is_one_past_max() {
        let employees = vec![
            Employee::new(4, "A", 1, "X"),
            Employee::new(9, "B", 1, "X"),
            Employee::new(2, "C", 1, "X"),
        ];
        assert_eq!(next_id(&employees).unwrap(), 10);
    }

    #[test]
    fn next_id_does_not_fill_gaps() {
        let employees = vec![Employee::new(1, "A", 1, "X"), Employee::new(5, "B", 1, "X")];
        assert_eq!(next_id(&employees).unwrap(), 6);
    }

    #[test]
    fn next_id_refuses_to_overflow() {
        let employees = vec![Employee::new(u64::MAX, "A", 1, "X")];
        assert!(matches!(
            next_id(&employees),
            Err(EmprecError::IdsExhausted(u64::MAX))
        ));
    }

    #[test]
    fn parse_id_accepts_digits() {
        assert_eq!(parse_id("12").unwrap(), 12);
    }

    #[test]
    fn parse_id_rejects_other_text() {
        for bad in ["", "abc", "-1", "1.5", " 3"] {
            assert!(matches!(parse_id(bad), Err(EmprecError::InvalidId(_))), "{bad:?}");
        }
    }

    #[test]
    fn find_employee_reports_missing_id() {
        let employees = vec![Employee::new(1, "A", 1, "X")];
        assert_eq!(find_employee(&employees, 1).unwrap().name, "A");
        assert!(matches!(
            find_employee(&employees, 2),
            Err(EmprecError::EmployeeNotFound(2))
        ));
    }
}
