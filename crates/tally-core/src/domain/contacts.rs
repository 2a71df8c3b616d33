//! Contact book.
//!
//! Every write goes through the name, phone and email validators first; a
//! failed validation returns before the store is touched, so the stored
//! contacts only ever hold valid values.

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::reportable_display;
use crate::store::{Record, RecordId, RecordStore};
use crate::validation::{validate_email, validate_name, validate_phone};

/// A contact entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub favorite: bool,
}

impl Record for Contact {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.favorite { "* " } else { "" };
        write!(
            f,
            "[{}ID: {}] {} | Tel: {} | Email: {}",
            star, self.id, self.name, self.phone, self.email
        )
    }
}

reportable_display!(Contact);

/// Validated field values for a contact.
struct ContactFields<'a> {
    name: &'a str,
    phone: &'a str,
    email: &'a str,
}

fn validate_fields<'a>(name: &'a str, phone: &'a str, email: &'a str) -> Result<ContactFields<'a>> {
    Ok(ContactFields {
        name: validate_name(name)?,
        phone: validate_phone(phone)?,
        email: validate_email(email)?,
    })
}

/// In-memory contact book.
#[derive(Debug, Clone)]
pub struct ContactBook {
    store: RecordStore<Contact>,
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new("contact"),
        }
    }

    /// Book seeded with three sample contacts.
    pub fn with_demo_data() -> Self {
        let mut book = Self::new();
        let samples = [
            ("Ana García", "600111222", "ana@test.com"),
            ("Carlos López", "610333444", "carlos@test.com"),
            ("María Pérez", "620555666", "maria@test.com"),
        ];
        for (name, phone, email) in samples {
            if let Err(err) = book.create(name, phone, email) {
                debug!(error = %err, "sample contact rejected");
            }
        }
        book
    }

    /// Validate every field, then append a new contact.
    pub fn create(&mut self, name: &str, phone: &str, email: &str) -> Result<&Contact> {
        let fields = validate_fields(name, phone, email)?;
        Ok(self.store.insert_with(|id| Contact {
            id,
            name: fields.name.to_string(),
            phone: fields.phone.to_string(),
            email: fields.email.to_string(),
            favorite: false,
        }))
    }

    pub fn get(&self, id: RecordId) -> Option<&Contact> {
        self.store.find(id)
    }

    /// Case-insensitive name search. A blank query returns every contact.
    pub fn search_by_name(&self, query: &str) -> Vec<&Contact> {
        if query.trim().is_empty() {
            return self.store.iter().collect();
        }
        let needle = query.to_lowercase();
        self.store
            .filter(|contact| contact.name.to_lowercase().contains(&needle))
    }

    pub fn favorites(&self) -> Vec<&Contact> {
        self.store.filter(|contact| contact.favorite)
    }

    /// All contacts ordered by name; equal names keep insertion order.
    pub fn sorted_by_name(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.store.iter().collect();
        contacts.sort_by(|a, b| a.name.cmp(&b.name));
        contacts
    }

    /// Flip the favorite flag and return its new value.
    pub fn toggle_favorite(&mut self, id: RecordId) -> Result<bool> {
        let contact = self.store.require_mut(id)?;
        contact.favorite = !contact.favorite;
        debug!(id, favorite = contact.favorite, "favorite toggled");
        Ok(contact.favorite)
    }

    /// Replace name, phone and email.
    ///
    /// Validation runs before the lookup, so invalid input reports a
    /// validation failure even for an unknown id.
    pub fn edit(&mut self, id: RecordId, name: &str, phone: &str, email: &str) -> Result<&Contact> {
        let fields = validate_fields(name, phone, email)?;
        let contact = self.store.require_mut(id)?;
        contact.name = fields.name.to_string();
        contact.phone = fields.phone.to_string();
        contact.email = fields.email.to_string();
        debug!(id, "contact edited");
        Ok(&*contact)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<Contact> {
        self.store.remove(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Human-readable snapshot, one contact per line.
    pub fn export_text(&self) -> String {
        let mut out = String::from("--- CONTACTS ---\n");
        for contact in self.sorted_by_name() {
            out.push_str(&contact.to_string());
            out.push('\n');
        }
        out.push_str(&format!("Total: {}\n", self.len()));
        out
    }
}
