use crate::error::{AbookError, Result};
use crate::model::Contact;
use std::collections::BTreeMap;
use std::ops::Bound;

/// All contacts, keyed and ordered by name.
///
/// The ordering is what makes [`ContactStore::search_prefix`] a seek plus a
/// short scan instead of a walk over every entry, and it is also the order
/// used for listing and saving.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    contacts: BTreeMap<String, Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by name, returning the contact that was replaced.
    pub fn set(&mut self, contact: Contact) -> Option<Contact> {
        self.contacts.insert(contact.name.clone(), contact)
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        self.contacts.remove(name)
    }

    /// Every contact whose name starts with `prefix`, in name order.
    pub fn search_prefix(&self, prefix: &str) -> Vec<Contact> {
        self.contacts
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(prefix))
            .map(|(_, contact)| contact.clone())
            .collect()
    }

    pub fn all(&self) -> Vec<Contact> {
        self.contacts.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Merge a serialized array of contacts into the store. Later entries
    /// with the same name win.
    pub fn load_from(&mut self, bytes: &[u8]) -> Result<()> {
        let contacts: Vec<Contact> =
            serde_json::from_slice(bytes).map_err(AbookError::MalformedStoreData)?;
        for contact in contacts {
            self.set(contact);
        }
        Ok(())
    }

    pub fn save_to(&self) -> Result<Vec<u8>> {
        let contacts: Vec<&Contact> = self.contacts.values().collect();
        serde_json::to_vec_pretty(&contacts).map_err(|e| AbookError::Execution(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> ContactStore {
        let mut store = ContactStore::new();
        for name in names {
            store.set(Contact::new(*name, "000", format!("{}@x.com", name)));
        }
        store
    }

    fn names(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn set_returns_replaced_contact() {
        let mut store = ContactStore::new();
        assert!(store.set(Contact::new("Ann", "1", "a@x.com")).is_none());

        let old = store.set(Contact::new("Ann", "2", "b@x.com"));
        assert_eq!(old, Some(Contact::new("Ann", "1", "a@x.com")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Ann"), Some(&Contact::new("Ann", "2", "b@x.com")));
    }

    #[test]
    fn remove_returns_prior_value() {
        let mut store = store_with(&["Ann", "Bob"]);
        assert_eq!(store.remove("Ann").map(|c| c.name), Some("Ann".to_string()));
        assert!(store.remove("Ann").is_none());
        assert_eq!(names(&store.all()), vec!["Bob"]);
    }

    #[test]
    fn all_is_sorted_by_name() {
        let store = store_with(&["Bob", "alice", "Alice", "Al"]);
        assert_eq!(names(&store.all()), vec!["Al", "Alice", "Bob", "alice"]);
    }

    #[test]
    fn search_prefix_returns_matches_in_order() {
        let store = store_with(&["Alice", "Alan", "Bob"]);
        assert_eq!(names(&store.search_prefix("Al")), vec!["Alan", "Alice"]);
    }

    #[test]
    fn search_prefix_stops_at_first_non_match() {
        let store = store_with(&["Al", "Alan", "Alb", "Am", "Ala"]);
        assert_eq!(names(&store.search_prefix("Ala")), vec!["Ala", "Alan"]);
        assert!(store.search_prefix("Zed").is_empty());
        assert!(store.search_prefix("Ab").is_empty());
    }

    #[test]
    fn search_prefix_matches_filter_over_all() {
        let store = store_with(&["Mara", "Mary", "Mary Ann", "Marc", "Ma", "mary", "Nick"]);
        for prefix in ["M", "Ma", "Mar", "Mary", "Mary ", "m", "N", "Z", ""] {
            let expected: Vec<Contact> = store
                .all()
                .into_iter()
                .filter(|c| c.name.starts_with(prefix))
                .collect();
            assert_eq!(store.search_prefix(prefix), expected, "prefix {:?}", prefix);
        }
    }

    #[test]
    fn save_and_load_preserve_contacts_and_order() {
        let store = store_with(&["Zoe", "Adam", "Mia"]);
        let bytes = store.save_to().unwrap();

        let mut loaded = ContactStore::new();
        loaded.load_from(&bytes).unwrap();
        assert_eq!(loaded.all(), store.all());
    }

    #[test]
    fn load_lets_later_duplicates_win() {
        let json = r#"[
            {"name": "Ann", "phone": "1", "email": "old@x.com"},
            {"name": "Ann", "phone": "2", "email": "new@x.com"}
        ]"#;
        let mut store = ContactStore::new();
        store.load_from(json.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Ann").map(|c| c.email.as_str()), Some("new@x.com"));
    }

    #[test]
    fn load_rejects_malformed_data() {
        let mut store = ContactStore::new();
        for bad in [
            "not json",
            r#"{"name": "Ann"}"#,
            r#"[{"Name": "Ann", "Phone": "1", "Email": "a"}]"#,
        ] {
            let err = store.load_from(bad.as_bytes()).unwrap_err();
            assert!(matches!(err, AbookError::MalformedStoreData(_)), "{}", bad);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn saves_in_name_order() {
        let store = store_with(&["b", "a"]);
        let parsed: Vec<Contact> = serde_json::from_slice(&store.save_to().unwrap()).unwrap();
        assert_eq!(names(&parsed), vec!["a", "b"]);
    }
}
