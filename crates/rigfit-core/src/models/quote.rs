use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum QuoteType {
        Motivational => "motivational",
        Inspirational => "inspirational",
        Humorous => "humorous",
        Educational => "educational",
    }
}

wire_enum! {
    pub enum QuoteCategory {
        Fitness => "fitness",
        Health => "health",
        Mindset => "mindset",
        Trucking => "trucking",
        General => "general",
    }
}

wire_enum! {
    pub enum MentalState {
        Positive => "positive",
        Neutral => "neutral",
        Negative => "negative",
        Anxious => "anxious",
        Tired => "tired",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Quote {
    pub id: String,
    pub quote_text: String,
    pub quote_type: QuoteType,
    pub category: QuoteCategory,
    #[serde(default)]
    pub mental_states: Vec<MentalState>,
    pub energy_level_min: u8,
    pub energy_level_max: u8,
    pub is_active: bool,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Quote {
    pub fn matches_energy(&self, level: u8) -> bool {
        (self.energy_level_min..=self.energy_level_max).contains(&level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct QuoteRequest {
    pub quote_text: String,
    pub quote_type: QuoteType,
    pub category: QuoteCategory,
    #[serde(default)]
    pub mental_states: Vec<MentalState>,
    pub energy_level_min: u8,
    pub energy_level_max: u8,
    pub is_active: bool,
    #[serde(default)]
    pub priority: i32,
}
