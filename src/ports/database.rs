use uuid::Uuid;

use crate::domain::Receipt;

#[mockall::automock]
#[async_trait::async_trait]
pub trait DatabasePort {
    /// Store a receipt under a freshly generated identifier and return that identifier
    async fn put_receipt(&self, receipt: Receipt) -> Result<Uuid, Error>;
    async fn get_receipt(&self, receipt_id: Uuid) -> Result<Receipt, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Domain-level error when no receipt is stored under the requested identifier
    #[error("receipt {0} does not exist")]
    ReceiptNotFound(Uuid),

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as connectivity, configuration, or permission errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
