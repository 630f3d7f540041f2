use crate::error::Result;
use crate::model::{Contact, Record};
use crate::store::DataStore;
use log::info;

/// Validates the input and appends it as the last record.
///
/// Returns the record as stored (name trimmed).
pub fn run<S: DataStore>(store: &mut S, name: &str, phone: &str, comment: &str) -> Result<Record> {
    let record = Contact::new(name, phone, Some(comment))?.to_record();

    let mut records = store.load_records()?;
    records.push(record.clone());
    store.save_records(&records)?;

    info!("created contact #{}", records.len() - 1);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::model::ValidationError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_record() {
        let mut store = InMemoryStore::new();
        run(&mut store, "user name", "123456789", "comment").unwrap();
        assert_eq!(
            store.load_records().unwrap(),
            vec![Record::new("user name", "123456789", "comment")]
        );
    }

    #[test]
    fn stores_trimmed_name() {
        let mut store = InMemoryStore::new();
        let record = run(&mut store, "  Alice ", "+123456789012", "").unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(store.load_records().unwrap()[0].name, "Alice");
    }

    #[test]
    fn allows_duplicates() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Alice", "123456789", "").unwrap();
        run(&mut store, "Alice", "123456789", "").unwrap();
        assert_eq!(store.load_records().unwrap().len(), 2);
    }

    #[test]
    fn rejects_invalid_phones_without_touching_store() {
        let mut store = InMemoryStore::with_records(vec![Record::new("A", "123456789", "")]);
        for phone in ["asd", "12345678", "1234567891011"] {
            let err = run(&mut store, "user", phone, "").unwrap_err();
            assert!(matches!(
                err,
                PhonebookError::Validation(ValidationError::InvalidPhone(_))
            ));
        }
        assert_eq!(store.load_records().unwrap().len(), 1);
    }

    #[test]
    fn rejects_empty_name() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, " ", "123456789", "").unwrap_err();
        assert!(matches!(
            err,
            PhonebookError::Validation(ValidationError::EmptyName)
        ));
        assert!(!store.is_initialized());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = InMemoryStore::with_records(Vec::new());
        store.set_simulate_write_error(true);
        assert!(matches!(
            run(&mut store, "Alice", "123456789", ""),
            Err(PhonebookError::Io(_))
        ));
        assert!(store.load_records().unwrap().is_empty());
    }
}
