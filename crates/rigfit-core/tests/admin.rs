//! Integration tests for [`AdminApi`] routing, query encoding and list
//! normalization.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rigfit_core::admin::AdminApi;
use rigfit_core::api::ApiClient;
use rigfit_core::auth::MemoryTokenStore;
use rigfit_core::models::{
    BlueprintListParams, SearchUsersParams, Tier, TipCategory, TipListParams, WorkoutType,
};

fn admin_at(server: &MockServer) -> AdminApi {
    let client = ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::new())).unwrap();
    client.set_tokens("access-1", "refresh-1");
    AdminApi::new(client)
}

fn blueprint_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Cab Reset Circuit",
        "slug": "cab-reset-circuit",
        "type": "reset",
        "category": "midday_stretch",
        "focus": "mobility",
        "difficulty": "beginner",
        "equipment": "none",
        "estimatedSecondsPerRound": 90,
        "minRounds": 1,
        "maxRounds": 3,
        "defaultRounds": 2,
        "positionTags": ["sitting"],
        "isActive": true,
        "exercises": []
    })
}

#[tokio::test]
async fn blueprint_list_sends_filters_and_reads_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/blueprints"))
        .and(query_param("type", "reset"))
        .and(query_param("isActive", "true"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [blueprint_json("bp-3")],
            "total": 21,
            "page": 2,
            "pageSize": 20,
            "totalPages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let admin = admin_at(&server);
    let params = BlueprintListParams {
        workout_type: Some(WorkoutType::Reset),
        is_active: Some(true),
        page: Some(2),
        ..Default::default()
    };
    let page = admin.list_blueprints(&params).await.unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.total, 21);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.data[0].id, "bp-3");
    assert_eq!(page.data[0].default_duration_seconds(), 180);
}

#[tokio::test]
async fn blueprint_list_accepts_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/blueprints"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([blueprint_json("bp-1"), blueprint_json("bp-2")])),
        )
        .mount(&server)
        .await;

    let page = admin_at(&server)
        .list_blueprints(&BlueprintListParams::default())
        .await
        .unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn user_search_unwraps_users_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/users/search"))
        .and(query_param("email", "driver@rigfit.io"))
        .and(query_param("tier", "pro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"user_id": "u-9", "email": "driver@rigfit.io", "tier": "pro"}],
            "total": 1
        })))
        .mount(&server)
        .await;

    let params = SearchUsersParams {
        email: Some("driver@rigfit.io".into()),
        tier: Some(Tier::Pro),
        ..Default::default()
    };
    let users = admin_at(&server).search_users(&params).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "u-9");
}

#[tokio::test]
async fn lookup_lists_unwrap_items_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/exercises/categories"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"items": ["stretching", "strength"]})),
        )
        .mount(&server)
        .await;

    let categories = admin_at(&server).exercise_categories().await.unwrap();
    assert_eq!(categories, vec!["stretching", "strength"]);
}

#[tokio::test]
async fn unrecognized_list_shape_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/tips"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .mount(&server)
        .await;

    let params = TipListParams {
        limit: Some(5),
        ..Default::default()
    };
    let tips = admin_at(&server).list_tips(&params).await.unwrap();
    assert!(tips.is_empty());
}

fn tip_json(id: &str, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Stay hydrated",
        "content": "Keep a bottle within reach of the cab.",
        "category": category,
        "date": "2026-03-01",
        "min_tier": "free",
        "is_active": true
    })
}

#[tokio::test]
async fn tip_list_keeps_tips_with_new_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/tips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            tip_json("t-1", "hydration"),
            tip_json("t-2", "brand_new_category")
        ])))
        .mount(&server)
        .await;

    let tips = admin_at(&server)
        .list_tips(&TipListParams::default())
        .await
        .unwrap();
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0].category, TipCategory::Hydration);
    assert_eq!(tips[1].category, TipCategory::Unknown);
}

#[tokio::test]
async fn hard_delete_requires_confirmation_flag() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/users/hard-delete/u-4"))
        .and(query_param("confirm", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    admin_at(&server).hard_delete_user("u-4").await.unwrap();
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/quotes/q-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Quote deleted"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/api-keys/k-1/revoke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Key revoked"})))
        .expect(1)
        .mount(&server)
        .await;

    let admin = admin_at(&server);
    admin.delete_quote("q-1").await.unwrap();
    admin.revoke_api_key("k-1").await.unwrap();
}

#[tokio::test]
async fn quote_update_is_a_partial_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/admin/quotes/q-7"))
        .and(body_json(json!({"is_active": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "q-7",
            "quote_text": "Miles are earned one stretch at a time.",
            "quote_type": "motivational",
            "category": "trucking",
            "energy_level_min": 1,
            "energy_level_max": 5,
            "is_active": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let quote = admin_at(&server)
        .update_quote("q-7", &json!({"is_active": false}))
        .await
        .unwrap();
    assert!(!quote.is_active);
    assert!(quote.matches_energy(3));
}

#[tokio::test]
async fn corporate_user_removal_and_analytics() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/corporate/accounts/c-1/users/u-2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/corporate/accounts/c-1/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"active_seats": 12})))
        .mount(&server)
        .await;

    let admin = admin_at(&server);
    admin.remove_corporate_user("c-1", "u-2").await.unwrap();
    let stats = admin.corporate_analytics("c-1").await.unwrap();
    assert_eq!(stats["active_seats"], 12);
}
