use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tags::Tier;
use crate::api::Query;

wire_enum! {
    pub enum TipCategory {
        Nutrition => "nutrition",
        Exercise => "exercise",
        MentalHealth => "mental_health",
        Sleep => "sleep",
        DrivingPosture => "driving_posture",
        Hydration => "hydration",
        Stretching => "stretching",
        GeneralWellness => "general_wellness",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Tip {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub category: TipCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Scheduled publication date (`YYYY-MM-DD`)
    pub date: String,
    pub min_tier: Tier,
    pub is_active: bool,
    #[serde(default)]
    pub is_ai_generated: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TipRequest {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub category: TipCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    pub date: NaiveDate,
    pub min_tier: Tier,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipListParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<TipCategory>,
    pub scheduled_date: Option<NaiveDate>,
    pub is_ai_generated: Option<bool>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl TipListParams {
    pub fn to_query(&self) -> Query {
        Query::new()
            .push_opt("skip", self.skip)
            .push_opt("limit", self.limit)
            .push_opt("category", self.category)
            .push_opt("scheduled_date", self.scheduled_date)
            .push_opt("is_ai_generated", self.is_ai_generated)
            .push_opt("is_active", self.is_active)
            .push_opt("search", self.search.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TipGenerateRequest {
    pub dates: Vec<NaiveDate>,
    pub categories: Vec<TipCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TipMediaRequest {
    pub media_type: String,
    pub media_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TipValidation {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TipTemplate {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<TipCategory>,
    #[serde(default)]
    pub template_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TipTemplateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<TipCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_text: Option<String>,
}
