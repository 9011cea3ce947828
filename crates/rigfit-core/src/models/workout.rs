use serde::{Deserialize, Serialize};

use super::blueprint::WorkoutType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ExerciseAlternative {
    pub id: String,
    pub primary_exercise_id: String,
    pub alternate_exercise_id: String,
    pub alternate_order: u32,
    pub reason: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AlternativeRequest {
    pub primary_exercise_id: String,
    pub alternate_exercise_id: String,
    pub alternate_order: u32,
    pub reason: String,
}

/// Body for `/admin/workouts/generate-immediate`. Both fields are optional;
/// an empty body generates for every eligible user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct GenerateImmediateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<WorkoutType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_immediate_body() {
        let empty = serde_json::to_value(GenerateImmediateRequest::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));

        let body = serde_json::to_value(GenerateImmediateRequest {
            user_id: Some("u-7".into()),
            workout_type: Some(WorkoutType::Reset),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"user_id": "u-7", "type": "reset"}));
    }
}
