//! JSON calls to the betting site. Every state-changing request carries the
//! page's CSRF token in `X-CSRFToken`.

use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ValidationError};
use crate::model::BetDraft;
use crate::payout;

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const BET_PLACED: &str = "Ставка успешно размещена!";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BetRequest {
    pub race_id: u64,
    pub horse_id: u64,
    pub amount: f64,
}

impl BetRequest {
    /// Assembles the request from the modal's hidden fields. A draft without
    /// a horse id never leaves the browser.
    pub fn from_draft(draft: &BetDraft) -> Result<Self, ValidationError> {
        let horse_id = draft.horse_id.ok_or(ValidationError::DraftWithoutHorse)?;
        Ok(Self {
            race_id: draft.race_id,
            horse_id,
            amount: payout::parse_amount(&draft.amount),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecoveryRequest<'a> {
    pub email: &'a str,
}

/// Envelope shared by the site's JSON endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub new_balance: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BetReceipt {
    /// Missing when the server accepted the bet but did not echo a balance;
    /// the displayed balance is then left alone.
    pub new_balance: Option<f64>,
}

impl ApiResponse {
    /// Decodes a response body. The status code is only used for the error
    /// text; `{success: false}` bodies are read on any status.
    pub fn decode(status: u16, body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body)
            .map_err(|e| ApiError::MalformedResponse(format!("HTTP {}: {}", status, e)))
    }

    pub fn into_receipt(self) -> Result<BetReceipt, ApiError> {
        if self.success {
            Ok(BetReceipt { new_balance: self.new_balance })
        } else {
            Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| "неизвестная ошибка".to_string()),
            ))
        }
    }
}

async fn post_json<B: Serialize>(url: &str, csrf_token: &str, body: &B) -> Result<ApiResponse, ApiError> {
    let response = Request::post(url)
        .header(CSRF_HEADER, csrf_token)
        .json(body)
        .map_err(ApiError::Network)?
        .send()
        .await
        .map_err(ApiError::Network)?;
    let status = response.status();
    let text = response.text().await.map_err(ApiError::Network)?;
    ApiResponse::decode(status, &text)
}

pub async fn place_bet(endpoint: &str, csrf_token: &str, bet: &BetRequest) -> Result<BetReceipt, ApiError> {
    post_json(endpoint, csrf_token, bet).await?.into_receipt()
}

pub async fn request_recovery(endpoint: &str, csrf_token: &str, email: &str) -> Result<(), ApiError> {
    post_json(endpoint, csrf_token, &RecoveryRequest { email })
        .await?
        .into_receipt()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_request_wire_shape() {
        let body = serde_json::to_value(BetRequest { race_id: 5, horse_id: 2, amount: 150.0 }).unwrap();
        assert_eq!(body, serde_json::json!({"race_id": 5, "horse_id": 2, "amount": 150.0}));
    }

    #[test]
    fn draft_without_horse_is_refused_locally() {
        let draft = BetDraft { race_id: 5, horse_id: None, amount: "100".into() };
        assert_eq!(BetRequest::from_draft(&draft), Err(ValidationError::DraftWithoutHorse));
        let draft = BetDraft { horse_id: Some(2), ..draft };
        assert_eq!(
            BetRequest::from_draft(&draft),
            Ok(BetRequest { race_id: 5, horse_id: 2, amount: 100.0 })
        );
    }

    #[test]
    fn draft_amount_keeps_exponent() {
        let draft = BetDraft { race_id: 5, horse_id: Some(2), amount: "1.5e3".into() };
        assert_eq!(BetRequest::from_draft(&draft).unwrap().amount, 1_500.0);
    }

    #[test]
    fn success_carries_new_balance() {
        let resp = ApiResponse::decode(200, r#"{"success": true, "new_balance": 850.5}"#).unwrap();
        assert_eq!(resp.into_receipt().unwrap(), BetReceipt { new_balance: Some(850.5) });
    }

    #[test]
    fn rejection_surfaces_server_error() {
        let resp = ApiResponse::decode(400, r#"{"success": false, "error": "X"}"#).unwrap();
        let err = resp.into_receipt().unwrap_err();
        assert_eq!(err.to_string(), "Ошибка: X");
    }

    #[test]
    fn rejection_without_text_still_reads() {
        let resp = ApiResponse::decode(200, r#"{"success": false}"#).unwrap();
        assert_eq!(resp.into_receipt().unwrap_err().to_string(), "Ошибка: неизвестная ошибка");
    }

    #[test]
    fn html_error_page_is_a_network_failure() {
        let err = ApiResponse::decode(500, "<html>Server Error</html>").unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
        assert!(err.to_string().starts_with("Ошибка сети: "));
    }
}
