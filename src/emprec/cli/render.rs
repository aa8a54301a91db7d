use colored::Colorize;
use emprec::api::{CmdMessage, MessageLevel};
use emprec::error::EmprecError;
use emprec::model::Employee;
use std::io::{self, Write};

use super::menu::MenuChoice;

pub(super) fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=== Employee Record System ===".bold())?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    Ok(())
}

pub(super) fn render_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("--- {} ---", title).bold())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    writeln!(out)
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &EmprecError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(error.to_string())])
}

pub(super) fn render_employee_list<W: Write>(out: &mut W, employees: &[Employee]) -> io::Result<()> {
    render_header(out, "Employee List")?;
    for emp in employees {
        writeln!(out, "{}", format_employee(emp))?;
    }
    Ok(())
}

fn format_employee(emp: &Employee) -> String {
    format!(
        "ID: {} | Name: {} | Age: {} | Department: {}",
        emp.id, emp.name, emp.age, emp.department
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn formats_all_four_fields() {
        let emp = Employee::new(3, "Carol", 28, "Ops");
        assert_eq!(
            format_employee(&emp),
            "ID: 3 | Name: Carol | Age: 28 | Department: Ops"
        );
    }

    #[test]
    fn menu_lists_five_numbered_options() {
        let out = rendered(|buf| render_menu(buf));
        assert!(out.starts_with("=== Employee Record System ===\n"));
        assert!(out.contains("1. Add Employee\n"));
        assert!(out.contains("2. List Employees\n"));
        assert!(out.contains("3. Update Employee\n"));
        assert!(out.contains("4. Delete Employee\n"));
        assert!(out.contains("5. Exit\n"));
    }

    #[test]
    fn list_keeps_stored_order() {
        let employees = vec![
            Employee::new(2, "Bob", 41, "Sales"),
            Employee::new(1, "Alice", 30, "Eng"),
        ];
        let out = rendered(|buf| render_employee_list(buf, &employees));
        let bob = out.find("Name: Bob").unwrap();
        let alice = out.find("Name: Alice").unwrap();
        assert!(out.contains("--- Employee List ---"));
        assert!(bob < alice);
    }

    #[test]
    fn messages_end_with_blank_line() {
        let out = rendered(|buf| print_messages(buf, &[CmdMessage::success("Employee added.")]));
        assert_eq!(out, "Employee added.\n\n");
    }

    #[test]
    fn errors_render_their_display_text() {
        let out = rendered(|buf| print_error(buf, &EmprecError::EmployeeNotFound(4)));
        assert_eq!(out, "Employee not found: 4\n\n");
    }
}
