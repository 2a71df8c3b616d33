use std::io::{self, BufRead, Write};

use tally_core::domain::registration::register;

use crate::console::Console;

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: Option<&str>,
    email: Option<&str>,
    age: Option<i64>,
) -> io::Result<()> {
    let name = match name {
        Some(name) => name.to_string(),
        None => console.prompt_text("Name: ")?,
    };
    let email = match email {
        Some(email) => email.to_string(),
        None => console.prompt_text("Email: ")?,
    };
    let age = match age {
        Some(age) => age,
        None => match console.prompt_number::<i64>("Age: ")? {
            Some(age) => age,
            None => return console.abort("age"),
        },
    };

    console.show("Registration", &register(&name, &email, age))
}
