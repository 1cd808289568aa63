use actix_web::{post, web, Responder};
use log::{error, info};
use nutriplan_planner::{chat, PlanError};
use serde_json::Value;

use crate::{error::ApiError, SharedPlanner};

/// Decodes a request body; empty, malformed or `{}` bodies count as no data.
fn decode_body(body: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .filter(|value| match value {
            Value::Null => false,
            Value::Object(object) => !object.is_empty(),
            _ => true,
        })
}

#[post("/diet-plan")]
async fn create_diet_plan(
    planner: web::Data<SharedPlanner>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let input = decode_body(&body).ok_or(ApiError::NoData)?;
    info!("Received diet plan request: {}", input);

    let plan = planner.plan_request(&input).map_err(|e| {
        if !matches!(e, PlanError::Validation(_)) {
            error!("Error in diet plan generation: {}", e);
        }
        ApiError::from(e)
    })?;
    info!("Successfully generated diet plan");
    Ok(web::Json(plan))
}

#[post("/chat")]
async fn create_chat_reply(body: web::Bytes) -> Result<impl Responder, ApiError> {
    let input = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    Ok(web::Json(chat::reply_to_request(&input)?))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_diet_plan).service(create_chat_reply);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_body_treats_empty_input_as_missing() {
        let test_data: [(&[u8], Option<Value>); 6] = [
            (b"", None),
            (b"not json", None),
            (b"null", None),
            (b"{}", None),
            (b"{\"age\": 30}", Some(json!({"age": 30}))),
            (b"[1]", Some(json!([1]))),
        ];

        for (i, (body, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(decode_body(body), expected, "Test case #{}", i);
        }
    }
}
