use crate::error::Result;
use crate::model::{ContactField, Record};
use crate::store::DataStore;
use log::info;

use super::helpers::check_index;

/// Replaces one field of the record at `index`.
///
/// The index is checked before the value is validated; either failure leaves
/// the store untouched. Only the targeted field changes. Returns the updated
/// record.
pub fn run<S: DataStore>(
    store: &mut S,
    index: usize,
    field: ContactField,
    value: &str,
) -> Result<Record> {
    let mut records = store.load_records()?;
    check_index(&records, index)?;
    let value = field.validate(value)?;

    let record = &mut records[index];
    match field {
        ContactField::Name => record.name = value,
        ContactField::Phone => record.phone = value,
        ContactField::Comment => record.comment = value,
    }
    let updated = record.clone();
    store.save_records(&records)?;

    info!("updated {} of contact #{}", field, index);
    Ok(updated)
}
