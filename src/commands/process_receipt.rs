use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{domain::Receipt, ports::database::DatabasePort};
use tower::Service;
use uuid::Uuid;

use super::{DomainLogic, Error};

pub struct ProcessReceiptRequest {
    pub receipt: Receipt,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProcessReceiptResponse {
    /// Identifier under which the receipt was stored
    pub receipt_id: Uuid,
}

impl<D> Service<ProcessReceiptRequest> for DomainLogic<D>
where
    D: DatabasePort + Send + Sync + 'static,
{
    type Response = ProcessReceiptResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ProcessReceiptRequest) -> Self::Future {
        let database = self.database.clone();
        Box::pin(async move {
            tracing::debug!(receipt = ?req.receipt, "received receipt");

            let receipt_id = database.put_receipt(req.receipt).await?;
            tracing::info!(%receipt_id, "stored receipt");

            Ok(ProcessReceiptResponse { receipt_id })
        })
    }
}
