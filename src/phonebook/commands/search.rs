use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// Records where `query` occurs in any field, ignoring case.
///
/// Storage order is preserved. An empty query matches everything.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<Vec<Record>> {
    let query = query.to_lowercase();
    let records = store.load_records()?;

    Ok(records
        .into_iter()
        .filter(|record| {
            record
                .fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect())
}
