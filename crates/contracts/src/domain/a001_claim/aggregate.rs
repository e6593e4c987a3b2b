use crate::enums::ClaimStatus;
use serde::{Deserialize, Serialize};

/// Claim record as served by the claims backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub claim_id: String,
    pub claim_status: ClaimStatus,
    /// Not every claim has been routed to a payer yet
    #[serde(default)]
    pub payer_name: Option<String>,
    pub total_amount: f64,
    pub provider_name: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// ISO-8601 date or timestamp
    pub filing_date: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// One billable procedure within a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: i64,
    pub procedure_code: String,
    pub description: String,
    /// ISO-8601 date or timestamp
    pub service_date: String,
    pub amount: f64,
    pub discount: f64,
    /// Back-reference to the owning claim
    #[serde(default)]
    pub claim_id: Option<String>,
}
