use std::io::{self, BufRead, Write};

use tally_core::domain::tasks::{Task, TaskList};
use tally_core::{RecordId, Result as TallyResult};

use crate::commands::run_menu;
use crate::console::Console;

const OPTIONS: &[&str] = &["Add task", "List tasks", "Mark as completed", "Delete task"];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    let mut tasks = TaskList::new();

    run_menu(console, "Task manager", OPTIONS, |choice, console| match choice {
        1 => {
            let description = console.prompt_text("Description: ")?;
            let outcome = tasks.add(&description);
            console.show("Add task", &outcome)
        }
        2 => {
            if tasks.is_empty() {
                return console.info("No tasks");
            }
            let all: TallyResult<Vec<&Task>> = Ok(tasks.iter().collect());
            let title = format!("Tasks ({} pending)", tasks.pending());
            console.show(&title, &all)
        }
        3 => {
            let Some(id) = console.prompt_number::<RecordId>("Task ID: ")? else {
                return console.abort("task ID");
            };
            let outcome = tasks.complete(id);
            console.show("Complete task", &outcome)
        }
        _ => {
            let Some(id) = console.prompt_number::<RecordId>("Task ID: ")? else {
                return console.abort("task ID");
            };
            let outcome = tasks.delete(id).map(|t| format!("Deleted '{}'", t.description));
            console.show("Delete task", &outcome)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{console, output};

    #[test]
    fn test_add_complete_list() {
        let mut c = console("1\nWrite report\n1\n  \n3\n1\n2\n4\n5\n0\n");
        run(&mut c).unwrap();
        let out = output(c);
        assert!(out.contains("=== Add task ===\nSUCCESS:\n  [ ] 1. Write report"));
        assert!(out.contains("ERROR: The description must not be blank"));
        assert!(out.contains("=== Tasks (0 pending) ===\nSUCCESS:\n  - [x] 1. Write report"));
        assert!(out.contains("ERROR: No task found with ID 5"));
    }
}
