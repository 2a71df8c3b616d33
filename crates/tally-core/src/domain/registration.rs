//! User registration.

use std::fmt;

use crate::error::Result;
use crate::reportable_display;
use crate::validation::{validate_age, validate_email, validate_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>, {} years old", self.name, self.email, self.age)
    }
}

reportable_display!(User);

/// Validate name, email and age in that order and build the user.
pub fn register(name: &str, email: &str, age: i64) -> Result<User> {
    let name = validate_name(name)?;
    let email = validate_email(email)?;
    let age = validate_age(age)?;
    Ok(User {
        name: name.to_string(),
        email: email.to_string(),
        age,
    })
}
