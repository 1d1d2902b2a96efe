//! The session-scoped contact list.

use super::{Contact, ContactId};

/// Ordered in-memory list of contacts for one request.
///
/// Rebuilt from the serialized session value on every request and written
/// back in full after each mutation; there is no partial update path. Any
/// caller that mutates the book and forgets to re-persist loses the change
/// at the next request boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Creates an empty book.
    pub fn empty() -> Self {
        Self { contacts: Vec::new() }
    }

    /// Creates the fixed five-record dummy list used when no valid prior
    /// session state exists.
    pub fn seeded() -> Self {
        let contacts = (1..=5)
            .map(|n| {
                Contact::new(
                    ContactId::new(n),
                    format!("John{}", n),
                    format!("Doe{}", n),
                    20 + n,
                )
            })
            .collect();
        Self { contacts }
    }

    /// Deserializes a book from the stored session string.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let contacts: Vec<Contact> = serde_json::from_str(raw)?;
        Ok(Self { contacts })
    }

    /// Serializes the full list for the session store.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.contacts)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Linear scan, first match.
    pub fn find_by_id(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.contact_id == id)
    }

    /// Linear scan, first match, mutable.
    pub fn find_by_id_mut(&mut self, id: ContactId) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.contact_id == id)
    }

    /// Adds to the end of the list.
    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Removes the first match. A non-existent id is a silent no-op;
    /// returns whether a record was removed.
    pub fn remove_by_id(&mut self, id: ContactId) -> bool {
        match self.contacts.iter().position(|c| c.contact_id == id) {
            Some(pos) => {
                self.contacts.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Next free identifier: one past the highest id in the list, starting
    /// at 1 for an empty list.
    pub fn next_id(&self) -> ContactId {
        let max = self
            .contacts
            .iter()
            .map(|c| c.contact_id.value())
            .max()
            .unwrap_or(0);
        ContactId::new(max + 1)
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::empty()
    }
}
