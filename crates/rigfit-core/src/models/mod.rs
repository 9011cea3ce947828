//! Data models for RigFit admin entities.
//!
//! This module contains the wire types exchanged with the RigFit backend:
//!
//! - Auth types: `User`, `TokenPair`, `AuthResponse`, login requests
//! - Content: `Blueprint`, `Exercise`, `ExerciseAlternative`, `Tip`,
//!   `PresetReset`, `Quote`, help-center articles
//! - Business: `CorporateAccount`, `AdminUser`, `PricingConfig`, `ApiKey`
//! - Envelopes: `ListResponse` and `Paginated` normalize the different list
//!   shapes the backend returns
//!
//! Enumerations use the backend's snake_case wire names.

/// Declares a string enumeration with fixed wire names.
///
/// Generates serde impls, `as_str`, `Display`, `FromStr` and an `ALL` table.
/// Values the backend adds later deserialize as `Unknown` instead of failing
/// the whole response; `Unknown` is not in `ALL` and `FromStr` rejects it.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
        pub enum $name {
            $( #[serde(rename = $wire)] $variant, )+
            #[serde(rename = "unknown", other)]
            Unknown,
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown => "unknown",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(format!(
                        "unknown {} '{}', expected one of: {}",
                        stringify!($name),
                        other,
                        [$( $wire ),+].join(", ")
                    )),
                }
            }
        }
    };
}

pub mod api_key;
pub mod auth;
pub mod blueprint;
pub mod common;
pub mod corporate;
pub mod exercise;
pub mod help;
pub mod pricing;
pub mod quote;
pub mod reset;
pub mod tags;
pub mod tip;
pub mod user;
pub mod workout;

pub use api_key::{ApiKey, ApiKeyCreateRequest, ApiKeyScope};
pub use auth::{
    AuthResponse, LoginRequest, OAuthLoginRequest, OAuthProvider, RefreshRequest, Role, TokenPair,
    User,
};
pub use blueprint::{
    Blueprint, BlueprintCategory, BlueprintCoverage, BlueprintCoverageItem, BlueprintExercise,
    BlueprintListParams, BlueprintRequest, ExerciseType, FocusType, WorkoutType,
};
pub use common::{ListResponse, MessageResponse, Paginated, Stats};
pub use corporate::{AddCorporateUsersRequest, CorporateAccount, CorporateAccountRequest, CorporateUser};
pub use exercise::{Exercise, ExerciseListParams, VideoUrls};
pub use help::{HelpArticle, HelpArticleRequest, HelpCategory, HelpCategoryRequest};
pub use pricing::{PricingConfig, PromotionRequest};
pub use quote::{MentalState, Quote, QuoteCategory, QuoteRequest, QuoteType};
pub use reset::{
    PresetReset, PresetResetRequest, ResetCategory, ResetDifficulty, ResetExercise, ResetListParams,
};
pub use tags::{BodyFocusTag, DifficultyLevel, LocationTag, PainAreaTag, PlanTier, PositionTag, Tier, TimingTag};
pub use tip::{
    Tip, TipCategory, TipGenerateRequest, TipListParams, TipMediaRequest, TipRequest, TipTemplate,
    TipTemplateRequest, TipValidation,
};
pub use user::{
    AdminUser, PromoteDemoteResponse, SearchUser, SearchUsersParams, SoftDeletedUser,
    TransferSuperAdminResponse,
};
pub use workout::{AlternativeRequest, ExerciseAlternative, GenerateImmediateRequest};
