//! Financial Modeling Prep quote schema.

use serde::Deserialize;
use serde_json::{Number, Value};
use serde_with::rust::double_option;

/// A field that distinguishes "sent as `null`" (`Some(None)`) from "not
/// sent at all" (`None`).
pub type Nullable<T> = Option<Option<T>>;

/// One element of the `/api/v3/quote/{ticker}` list.
///
/// Numeric fields stay as [`Number`] so integers (volume, market cap) and
/// decimals are re-emitted exactly as the provider sent them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FmpQuote {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(default, with = "double_option")]
    pub price: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub changes_percentage: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub change: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub day_low: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub day_high: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub year_high: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub year_low: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub market_cap: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub price_avg50: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub price_avg200: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub exchange: Nullable<String>,
    #[serde(default, with = "double_option")]
    pub volume: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub avg_volume: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub open: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub previous_close: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub eps: Nullable<Number>,
    #[serde(default, with = "double_option")]
    pub pe: Nullable<Number>,
    pub earnings_announcement: Option<String>,
    #[serde(default, with = "double_option")]
    pub shares_outstanding: Nullable<Number>,
    pub timestamp: Option<i64>,
}

/// Response of the quote endpoint.
///
/// FMP answers a list on success, but reports some failures (bad API key,
/// exhausted plan) as a JSON object with a 200 status. Those land in
/// [`QuoteListResponse::Unrecognized`]. Only the head of the list is ever
/// used, so only the head is decoded.
#[derive(Clone, Debug, PartialEq)]
pub enum QuoteListResponse {
    /// A list body; `None` when it is empty or its first element is `null`.
    Listed(Option<FmpQuote>),
    Unrecognized(Value),
}

impl QuoteListResponse {
    /// Classify a decoded body. Fails only when the first list element is
    /// present but does not match [`FmpQuote`]; later elements are ignored.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => match items.into_iter().next() {
                None | Some(Value::Null) => Ok(Self::Listed(None)),
                Some(head) => Ok(Self::Listed(Some(serde_json::from_value(head)?))),
            },
            other => Ok(Self::Unrecognized(other)),
        }
    }

    /// First quote of the list, if any.
    pub fn first(&self) -> Option<&FmpQuote> {
        match self {
            Self::Listed(quote) => quote.as_ref(),
            Self::Unrecognized(_) => None,
        }
    }
}
