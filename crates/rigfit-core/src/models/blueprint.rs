use serde::{Deserialize, Serialize};

use super::tags::{BodyFocusTag, DifficultyLevel, LocationTag, PainAreaTag, PositionTag, TimingTag};
use crate::api::Query;

wire_enum! {
    pub enum WorkoutType {
        Ignite => "ignite",
        Reset => "reset",
        Unwind => "unwind",
    }
}

wire_enum! {
    pub enum BlueprintCategory {
        Main => "main",
        MiddayStretch => "midday_stretch",
        EveningRecovery => "evening_recovery",
    }
}

wire_enum! {
    pub enum FocusType {
        Strength => "strength",
        Cardio => "cardio",
        Mobility => "mobility",
        Flexibility => "flexibility",
        Mixed => "mixed",
    }
}

wire_enum! {
    pub enum ExerciseType {
        Timer => "timer",
        Reps => "reps",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BlueprintExercise {
    pub exercise_id: String,
    pub order: u32,
    #[serde(rename = "type")]
    pub kind: ExerciseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    pub rest_after_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub category: BlueprintCategory,
    pub focus: FocusType,
    pub difficulty: DifficultyLevel,
    pub equipment: String,
    pub estimated_seconds_per_round: u32,
    pub min_rounds: u32,
    pub max_rounds: u32,
    pub default_rounds: u32,
    #[serde(default)]
    pub position_tags: Vec<PositionTag>,
    #[serde(default)]
    pub location_tags: Vec<LocationTag>,
    #[serde(default)]
    pub timing_tags: Vec<TimingTag>,
    #[serde(default)]
    pub body_focus_tags: Vec<BodyFocusTag>,
    #[serde(default)]
    pub pain_area_tags: Vec<PainAreaTag>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub exercises: Vec<BlueprintExercise>,
    #[serde(rename = "created_at", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at", default)]
    pub updated_at: Option<String>,
}

impl Blueprint {
    /// Estimated duration at the default round count
    pub fn default_duration_seconds(&self) -> u32 {
        self.estimated_seconds_per_round.saturating_mul(self.default_rounds)
    }
}

/// Body for creating or fully replacing a blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BlueprintRequest {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub category: BlueprintCategory,
    pub focus: FocusType,
    pub difficulty: DifficultyLevel,
    pub equipment: String,
    pub estimated_seconds_per_round: u32,
    pub min_rounds: u32,
    pub max_rounds: u32,
    pub default_rounds: u32,
    #[serde(default)]
    pub position_tags: Vec<PositionTag>,
    #[serde(default)]
    pub location_tags: Vec<LocationTag>,
    #[serde(default)]
    pub timing_tags: Vec<TimingTag>,
    #[serde(default)]
    pub body_focus_tags: Vec<BodyFocusTag>,
    #[serde(default)]
    pub pain_area_tags: Vec<PainAreaTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub exercises: Vec<BlueprintExercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BlueprintCoverageItem {
    pub workout_type: WorkoutType,
    pub active: u32,
    pub inactive: u32,
    pub total: u32,
    pub ready: bool,
    pub threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BlueprintCoverage {
    pub coverage: Vec<BlueprintCoverageItem>,
    pub total_active: u32,
    pub total_inactive: u32,
}

impl BlueprintCoverage {
    /// Workout types whose active count is still below threshold
    pub fn missing(&self) -> impl Iterator<Item = &BlueprintCoverageItem> {
        self.coverage.iter().filter(|c| !c.ready)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlueprintListParams {
    pub workout_type: Option<WorkoutType>,
    pub category: Option<BlueprintCategory>,
    pub focus: Option<FocusType>,
    pub difficulty: Option<DifficultyLevel>,
    pub position_tag: Option<PositionTag>,
    pub location_tag: Option<LocationTag>,
    pub is_active: Option<bool>,
    pub user_tier: Option<String>,
    pub source: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl BlueprintListParams {
    pub fn to_query(&self) -> Query {
        Query::new()
            .push_opt("type", self.workout_type)
            .push_opt("category", self.category)
            .push_opt("focus", self.focus)
            .push_opt("difficulty", self.difficulty)
            .push_opt("positionTag", self.position_tag)
            .push_opt("locationTag", self.location_tag)
            .push_opt("isActive", self.is_active)
            .push_opt("userTier", self.user_tier.as_deref())
            .push_opt("source", self.source.as_deref())
            .push_opt("search", self.search.as_deref())
            .push_opt("page", self.page)
            .push_opt("pageSize", self.page_size)
    }
}
