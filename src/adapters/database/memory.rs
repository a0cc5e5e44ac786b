use crate::{
    domain::Receipt,
    ports::database::{DatabasePort, Error},
};
use std::{
    collections::{hash_map::Entry, HashMap},
    sync::{Arc, Mutex, PoisonError},
};
use uuid::Uuid;

/// In-memory receipt store
///
/// Clones share the same underlying map. Receipts live for as long as one clone does.
#[derive(Clone, Debug)]
pub struct MemoryDatabase {
    receipts: Arc<Mutex<HashMap<Uuid, Receipt>>>,
}

#[async_trait::async_trait]
impl DatabasePort for MemoryDatabase {
    async fn put_receipt(&self, receipt: Receipt) -> Result<Uuid, Error> {
        let mut receipts = self.receipts.lock()?;
        loop {
            let receipt_id = Uuid::new_v4();
            // Never overwrite a stored receipt, even on a v4 collision
            if let Entry::Vacant(entry) = receipts.entry(receipt_id) {
                entry.insert(receipt);
                return Ok(receipt_id);
            }
        }
    }

    async fn get_receipt(&self, receipt_id: Uuid) -> Result<Receipt, Error> {
        self.receipts
            .lock()?
            .get(&receipt_id)
            .cloned()
            .ok_or(Error::ReceiptNotFound(receipt_id))
    }
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self {
            receipts: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not send. Thus we erase the error
/// and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}
