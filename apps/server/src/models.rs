use fxconvert_core::conversion::{ConversionBatch, ConversionResult};
use fxconvert_core::Currency;
use serde::{Deserialize, Serialize};

/// Form fields posted by the HTML converter page.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConvertForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency1: String,
    #[serde(default)]
    pub currency2: String,
    #[serde(default)]
    pub all_currencies: Option<String>,
}

impl ConvertForm {
    /// Batch mode is selected only by the exact value `all`.
    pub fn wants_all(&self) -> bool {
        self.all_currencies.as_deref() == Some("all")
    }
}

/// JSON body for `POST /api/v1/conversions`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequestBody {
    #[serde(default)]
    pub amount: Option<String>,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub all_currencies: bool,
}

#[derive(Serialize, Debug)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ConversionResponse {
    Single(ConversionResult),
    Batch(ConversionBatch),
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MainCurrenciesResponse {
    pub currencies: Vec<Currency>,
}
