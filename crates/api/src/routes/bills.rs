//! Billing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use domain::{Bill, BillItem, BillRequest};
use serde::Serialize;
use serde_json::Value;
use store::PosStore;

use super::AppState;
use crate::error::ApiError;

// -- Request types --

/// Decodes the body of `POST /bill`.
///
/// Accepts either a bare array of items or an object that also names the
/// customer. Field errors from either shape are reported as they are.
pub fn parse_bill_body(body: Value) -> Result<BillRequest, ApiError> {
    let parsed = match body {
        Value::Array(_) => serde_json::from_value::<Vec<BillItem>>(body).map(BillRequest::new),
        Value::Object(_) => serde_json::from_value::<BillRequest>(body),
        _ => {
            return Err(invalid_bill_body(
                "expected a list of items or an object with an `items` field",
            ));
        }
    };
    parsed.map_err(invalid_bill_body)
}

fn invalid_bill_body(reason: impl std::fmt::Display) -> ApiError {
    ApiError::Rejected {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: format!("Invalid bill body: {reason}"),
    }
}

// -- Response types --

#[derive(Serialize)]
pub struct BillCreatedResponse {
    pub success: bool,
    pub bill: Bill,
}

// -- Handlers --

/// POST /bill — price the items, take them out of stock and record the bill.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BillCreatedResponse>), ApiError> {
    let Json(body) = body?;
    let request = parse_bill_body(body)?;
    let bill = state.store.create_bill(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(BillCreatedResponse {
            success: true,
            bill,
        }),
    ))
}

/// GET /bills — every bill in the ledger, oldest first.
#[tracing::instrument(skip(state))]
pub async fn list<S: PosStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<Vec<Bill>> {
    Json(state.store.list_bills().await)
}

#[cfg(test)]
mod tests {
    use domain::{CustomerId, ProductId};
    use serde_json::json;

    use super::*;

    fn rejection_message(body: Value) -> String {
        match parse_bill_body(body).unwrap_err() {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                message
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn accepts_item_list_and_request_object() {
        let request = parse_bill_body(json!([{ "product_id": 1, "quantity": 2 }])).unwrap();
        assert_eq!(request.items, vec![BillItem::new(ProductId::new(1), 2)]);
        assert_eq!(request.customer_id, None);

        let request = parse_bill_body(json!({
            "items": [{ "product_id": 1, "quantity": 2 }],
            "customer_id": 3
        }))
        .unwrap();
        assert_eq!(request.customer_id, Some(CustomerId::new(3)));
    }

    #[test]
    fn reports_the_offending_field() {
        let message = rejection_message(json!([{ "product_id": 1, "quantity": -1 }]));
        assert!(message.contains("-1"), "{message}");

        let message = rejection_message(json!({ "items": [{ "product_id": 1 }], "customer_id": 3 }));
        assert!(message.contains("missing field `quantity`"), "{message}");

        let message = rejection_message(json!("two pens"));
        assert!(message.contains("list of items"), "{message}");
    }
}
