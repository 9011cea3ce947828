use serde::{Deserialize, Serialize};

use super::tags::{LocationTag, PlanTier, TimingTag};
use crate::api::Query;

wire_enum! {
    pub enum ResetCategory {
        NeckShoulders => "neck_shoulders",
        LowerBack => "lower_back",
        FullBody => "full_body",
        Legs => "legs",
        Arms => "arms",
        Core => "core",
        Breathing => "breathing",
        QuickStretch => "quick_stretch",
    }
}

wire_enum! {
    pub enum ResetDifficulty {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ResetExercise {
    pub exercise_id: String,
    pub order: u32,
    pub duration_seconds: u32,
    pub rest_after_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PresetReset {
    pub id: String,
    pub name: String,
    pub duration_seconds: u32,
    pub category: ResetCategory,
    pub difficulty: ResetDifficulty,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_areas: Vec<String>,
    #[serde(default)]
    pub location_tags: Vec<LocationTag>,
    #[serde(default)]
    pub timing_tags: Vec<TimingTag>,
    pub user_tier: PlanTier,
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub exercises: Vec<ResetExercise>,
    #[serde(rename = "created_at", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at", default)]
    pub updated_at: Option<String>,
}

impl PresetReset {
    /// Seconds of exercise plus rest across all steps
    pub fn exercise_seconds(&self) -> u32 {
        self.exercises
            .iter()
            .map(|e| e.duration_seconds + e.rest_after_seconds)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PresetResetRequest {
    pub name: String,
    pub duration_seconds: u32,
    pub category: ResetCategory,
    pub difficulty: ResetDifficulty,
    pub description: String,
    #[serde(default)]
    pub target_areas: Vec<String>,
    #[serde(default)]
    pub location_tags: Vec<LocationTag>,
    #[serde(default)]
    pub timing_tags: Vec<TimingTag>,
    pub user_tier: PlanTier,
    pub is_active: bool,
    #[serde(default)]
    pub exercises: Vec<ResetExercise>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetListParams {
    pub category: Option<ResetCategory>,
    pub difficulty: Option<ResetDifficulty>,
    pub is_active: Option<bool>,
}

impl ResetListParams {
    pub fn to_query(&self) -> Query {
        Query::new()
            .push_opt("category", self.category)
            .push_opt("difficulty", self.difficulty)
            .push_opt("is_active", self.is_active)
    }
}
