use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use log::info;

use super::helpers::check_index;

/// Removes the record at `index` and returns it. Later records shift down.
pub fn run<S: DataStore>(store: &mut S, index: usize) -> Result<Record> {
    let mut records = store.load_records()?;
    check_index(&records, index)?;

    let removed = records.remove(index);
    store.save_records(&records)?;

    info!("deleted contact #{}", index);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::store::memory::InMemoryStore;

    fn fixture() -> Vec<Record> {
        vec![
            Record::new("user name 1", "111111111", "comment 1"),
            Record::new("user name 2", "222222222", "comment 2"),
            Record::new("user name 3", "333333333", "comment 3"),
        ]
    }

    #[test]
    fn removes_and_shifts() {
        let contacts = fixture();
        let mut store = InMemoryStore::with_records(contacts.clone());

        assert!(matches!(
            run(&mut store, 3),
            Err(PhonebookError::IndexOutOfRange { index: 3, len: 3 })
        ));

        let removed = run(&mut store, 0).unwrap();
        assert_eq!(removed, contacts[0]);
        assert_eq!(store.load_records().unwrap(), contacts[1..]);

        run(&mut store, 1).unwrap();
        assert_eq!(store.load_records().unwrap(), contacts[1..2]);

        run(&mut store, 0).unwrap();
        assert!(store.load_records().unwrap().is_empty());
    }

    #[test]
    fn empty_store_fails() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, 0),
            Err(PhonebookError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn write_failure_keeps_record() {
        let mut store = InMemoryStore::with_records(fixture());
        store.set_simulate_write_error(true);
        assert!(run(&mut store, 0).is_err());
        assert_eq!(store.load_records().unwrap(), fixture());
    }
}
