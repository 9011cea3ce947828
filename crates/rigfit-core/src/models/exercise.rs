use serde::{Deserialize, Serialize};

use super::tags::DifficultyLevel;
use crate::api::Query;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct VideoUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub is_bodyweight: bool,
    pub difficulty: DifficultyLevel,
    pub default_reps: Option<u32>,
    pub default_duration: Option<u32>,
    pub external_video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_urls: Option<VideoUrls>,
}

impl Exercise {
    /// Preferred playable video, mp4 first
    pub fn video_url(&self) -> Option<&str> {
        self.video_urls
            .as_ref()
            .and_then(|v| v.mp4.as_deref().or(v.webm.as_deref()))
            .or(self.external_video_url.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<DifficultyLevel>,
    pub is_bodyweight: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ExerciseListParams {
    pub fn to_query(&self) -> Query {
        Query::new()
            .push_opt("search", self.search.as_deref())
            .push_opt("category", self.category.as_deref())
            .push_opt("difficulty", self.difficulty)
            .push_opt("is_bodyweight", self.is_bodyweight)
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset)
    }
}
