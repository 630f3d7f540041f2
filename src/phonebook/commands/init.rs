use crate::error::Result;
use crate::store::DataStore;
use log::info;

/// Outcome of [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyInitialized,
}

pub fn run<S: DataStore>(store: &mut S) -> Result<InitOutcome> {
    if store.is_initialized() {
        return Ok(InitOutcome::AlreadyInitialized);
    }
    store.save_records(&[])?;
    info!("initialized phonebook at {}", store.location().display());
    Ok(InitOutcome::Created)
}
