use std::sync::Arc;

pub mod get_points;
pub mod process_receipt;

pub use get_points::{GetPointsRequest, GetPointsResponse};
pub use process_receipt::{ProcessReceiptRequest, ProcessReceiptResponse};

pub struct DomainLogic<D> {
    database: Arc<D>,
}

impl<D> DomainLogic<D> {
    pub fn new(database: D) -> Self {
        Self {
            database: Arc::new(database),
        }
    }
}

impl<D> Clone for DomainLogic<D> {
    fn clone(&self) -> Self {
        Self {
            database: self.database.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("database port error: {0:?}")]
    Database(#[from] crate::ports::database::Error),
}
