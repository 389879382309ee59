use marketdesk_upstream::{FmpQuote, Nullable};
use serde::Serialize;
use serde_json::Number;

const NOT_AVAILABLE: &str = "N/A";

/// Client-facing financial summary for one ticker.
///
/// Relayed fields keep the upstream's shape: a field FMP sent as `null` is
/// written as `null`, a field it did not send is left out.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Nullable<Number>,
    pub changes_percentage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Nullable<Number>,
    pub day_range: String,
    pub year_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Nullable<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_avg50: Nullable<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_avg200: Nullable<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Nullable<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_volume: Nullable<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Nullable<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Nullable<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Nullable<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Nullable<Number>,
    pub earnings_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_outstanding: Nullable<Number>,
}

impl From<&FmpQuote> for FinancialSummary {
    fn from(quote: &FmpQuote) -> Self {
        Self {
            price: quote.price.clone(),
            changes_percentage: quote
                .changes_percentage
                .as_ref()
                .and_then(Option::as_ref)
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            change: quote.change.clone(),
            day_range: range(&quote.day_low, &quote.day_high),
            year_range: range(&quote.year_low, &quote.year_high),
            market_cap: quote.market_cap.clone(),
            price_avg50: quote.price_avg50.clone(),
            price_avg200: quote.price_avg200.clone(),
            exchange: quote.exchange.clone(),
            volume: quote.volume.clone(),
            avg_volume: quote.avg_volume.clone(),
            open: quote.open.clone(),
            previous_close: quote.previous_close.clone(),
            eps: quote.eps.clone(),
            pe_ratio: quote.pe.clone(),
            earnings_date: quote
                .earnings_announcement
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            shares_outstanding: quote.shares_outstanding.clone(),
        }
    }
}

fn range(low: &Nullable<Number>, high: &Nullable<Number>) -> String {
    let show = |n: &Nullable<Number>| {
        n.as_ref()
            .and_then(Option::as_ref)
            .map(|n| n.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };
    format!("{} - {}", show(low), show(high))
}

/// Body of a successful chat response.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
}
