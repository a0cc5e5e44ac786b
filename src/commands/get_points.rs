use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{calculate_points, Points},
    ports::database::DatabasePort,
};
use tower::Service;
use uuid::Uuid;

use super::{DomainLogic, Error};

pub struct GetPointsRequest {
    pub receipt_id: Uuid,
}

#[derive(Debug, PartialEq, Eq)]
pub struct GetPointsResponse {
    pub receipt_id: Uuid,
    /// Points awarded to the receipt, broken down by rule
    pub points: Points,
}

impl<D> Service<GetPointsRequest> for DomainLogic<D>
where
    D: DatabasePort + Send + Sync + 'static,
{
    type Response = GetPointsResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: GetPointsRequest) -> Self::Future {
        let database = self.database.clone();
        Box::pin(async move {
            let receipt = database.get_receipt(req.receipt_id).await?;

            let points = calculate_points(&receipt);
            tracing::debug!(
                receipt_id = %req.receipt_id,
                retailer_name = points.retailer_name,
                round_dollar_total = points.round_dollar_total,
                quarter_multiple_total = points.quarter_multiple_total,
                item_pairs = points.item_pairs,
                item_descriptions = points.item_descriptions,
                odd_purchase_day = points.odd_purchase_day,
                afternoon_purchase = points.afternoon_purchase,
                total = points.total(),
                "calculated points"
            );

            Ok(GetPointsResponse {
                receipt_id: req.receipt_id,
                points,
            })
        })
    }
}
