use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<Vec<Record>> {
    store.load_records()
}
