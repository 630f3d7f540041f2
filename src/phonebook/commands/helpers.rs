use crate::error::{PhonebookError, Result};
use crate::model::Record;

/// Fails with `IndexOutOfRange` unless `index` addresses a loaded record.
pub fn check_index(records: &[Record], index: usize) -> Result<()> {
    if index >= records.len() {
        return Err(PhonebookError::IndexOutOfRange {
            index,
            len: records.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_has_no_valid_index() {
        assert!(matches!(
            check_index(&[], 0),
            Err(PhonebookError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn last_index_is_valid() {
        let records = vec![Record::new("a", "123456789", ""); 2];
        assert!(check_index(&records, 1).is_ok());
        assert!(check_index(&records, 2).is_err());
    }
}
