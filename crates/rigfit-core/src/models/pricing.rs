use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PricingConfig {
    pub plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_monthly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_yearly: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_promoted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_discount: Option<f64>,
}

impl PricingConfig {
    /// Monthly price after the active promotion discount (percent)
    pub fn effective_monthly(&self) -> Option<f64> {
        let price = self.price_monthly?;
        match (self.is_promoted, self.promotion_discount) {
            (Some(true), Some(discount)) => Some(price * (100.0 - discount) / 100.0),
            _ => Some(price),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PromotionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_discount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_monthly() {
        let mut plan: PricingConfig = serde_json::from_str(
            r#"{"plan": "pro", "price_monthly": 20.0, "features": ["coach"], "is_promoted": true, "promotion_discount": 25}"#,
        )
        .unwrap();
        assert_eq!(plan.effective_monthly(), Some(15.0));

        plan.is_promoted = Some(false);
        assert_eq!(plan.effective_monthly(), Some(20.0));

        plan.price_monthly = None;
        assert_eq!(plan.effective_monthly(), None);
    }
}
