use emprec::api::{CmdMessage, EmprecApi};
use emprec::error::{EmprecError, Result};
use emprec::model::{EmployeeDraft, EmployeeUpdate};
use emprec::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

use super::render::{
    print_error, print_messages, render_employee_list, render_header, render_menu,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::List => "2",
            MenuChoice::Update => "3",
            MenuChoice::Delete => "4",
            MenuChoice::Exit => "5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Employee",
            MenuChoice::List => "List Employees",
            MenuChoice::Update => "Update Employee",
            MenuChoice::Delete => "Delete Employee",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

/// What the loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

type Handler<S, R, W> = fn(&mut Menu<S, R, W>) -> Result<Flow>;

/// The interactive session: one state, awaiting a menu choice.
pub struct Menu<S: DataStore, R: BufRead, W: Write> {
    api: EmprecApi<S>,
    input: R,
    output: W,
}

impl<S: DataStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(api: EmprecApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Indexed by `MenuChoice as usize`.
    const HANDLERS: [(MenuChoice, Handler<S, R, W>); 5] = [
        (MenuChoice::Add, Self::handle_add),
        (MenuChoice::List, Self::handle_list),
        (MenuChoice::Update, Self::handle_update),
        (MenuChoice::Delete, Self::handle_delete),
        (MenuChoice::Exit, Self::handle_exit),
    ];

    /// Runs until the operator exits or input ends. Only fatal errors escape.
    pub fn run(&mut self) -> Result<()> {
        loop {
            render_menu(&mut self.output)?;
            let line = match self.prompt("Choose an option (1-5): ") {
                Ok(line) => line,
                Err(EmprecError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };

            let outcome = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice),
                None => {
                    print_messages(
                        &mut self.output,
                        &[CmdMessage::error("Invalid option. Try again.")],
                    )?;
                    Ok(Flow::Continue)
                }
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(EmprecError::InputClosed) => return Ok(()),
                Err(e) if e.is_recoverable() => print_error(&mut self.output, &e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu choice");
        let (_, handler) = Self::HANDLERS[choice as usize];
        handler(self)
    }

    /// Writes `text`, then reads one trimmed line.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EmprecError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn handle_add(&mut self) -> Result<Flow> {
        render_header(&mut self.output, "Add Employee")?;
        let name = self.prompt("Enter name: ")?;
        let age = self.prompt("Enter age: ")?;
        let department = self.prompt("Enter department: ")?;

        let result = self
            .api
            .add_employee(&EmployeeDraft::new(name, age, department))?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_list(&mut self) -> Result<Flow> {
        let result = self.api.list_employees()?;
        if !result.listed_employees.is_empty() {
            render_employee_list(&mut self.output, &result.listed_employees)?;
        }
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_update(&mut self) -> Result<Flow> {
        let id = self.prompt("Enter employee ID to update: ")?;
        let current = self.api.view_employee(&id)?;
        let Some(employee) = current.listed_employees.into_iter().next() else {
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Editing employee: {}", employee.name)?;
        let name = self.prompt(&format!(
            "New name (leave blank to keep '{}'): ",
            employee.name
        ))?;
        let age = self.prompt(&format!(
            "New age (leave blank to keep '{}'): ",
            employee.age
        ))?;
        let department = self.prompt(&format!(
            "New department (leave blank to keep '{}'): ",
            employee.department
        ))?;

        let result = self
            .api
            .update_employee(&id, &EmployeeUpdate::new(name, age, department))?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_delete(&mut self) -> Result<Flow> {
        let id = self.prompt("Enter employee ID to delete: ")?;
        let result = self.api.delete_employee(&id)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_exit(&mut self) -> Result<Flow> {
        print_messages(&mut self.output, &[CmdMessage::info("Goodbye!")])?;
        Ok(Flow::Exit)
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        self.api.store()
    }
}
