//! HTTP tests for the camp endpoints
//!
//! Drive the full router (middleware included) over the in-memory
//! repository.

mod common;

use axum::http::{header, Method, StatusCode};

use code_camp_api::domain::gateways::CampRepository;

use common::{
    camp_body, failing_router, parse, send, CampResponse, CampsEnvelopeResponse, ErrorResponse, TestApp,
};

// ============================================================================
// GET /api/camps - List Camps
// ============================================================================

#[tokio::test]
async fn test_list_camps_empty_store() {
    let app = TestApp::empty();

    let (status, _, body) = app.get("/api/camps").await;

    assert_eq!(status, StatusCode::OK);
    let envelope: CampsEnvelopeResponse = parse(body);
    assert_eq!(envelope.count, 0);
    assert!(envelope.items.is_empty());
}

#[tokio::test]
async fn test_list_camps_without_talks_by_default() {
    let app = TestApp::seeded();

    let (status, _, body) = app.get("/api/camps").await;

    assert_eq!(status, StatusCode::OK);
    let envelope: CampsEnvelopeResponse = parse(body);
    assert_eq!(envelope.count, 1);
    assert_eq!(envelope.items[0].moniker, "ATL2018");
    assert!(envelope.items[0].talks.is_empty());
}

#[tokio::test]
async fn test_list_camps_include_talks() {
    let app = TestApp::seeded();

    let (status, _, body) = app.get("/api/camps?includeTalks=true").await;

    assert_eq!(status, StatusCode::OK);
    let envelope: CampsEnvelopeResponse = parse(body);
    assert_eq!(envelope.items[0].talks.len(), 2);
}

#[tokio::test]
async fn test_list_camps_newest_first() {
    let app = TestApp::seeded();
    app.send(Method::POST, "/api/camps", Some(camp_body("ATL2024"))).await;

    let (_, _, body) = app.get("/api/camps").await;

    let envelope: CampsEnvelopeResponse = parse(body);
    let monikers: Vec<&str> = envelope.items.iter().map(|c| c.moniker.as_str()).collect();
    assert_eq!(monikers, vec!["ATL2024", "ATL2018"]);
}

#[tokio::test]
async fn test_list_camps_rejects_malformed_flag() {
    let app = TestApp::seeded();

    let (status, _, body) = app.get("/api/camps?includeTalks=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(body);
    assert_eq!(error.error.code, "BAD_REQUEST");
}

// ============================================================================
// GET /api/camps/:moniker - Get Camp
// ============================================================================

#[tokio::test]
async fn test_get_camp_includes_talks() {
    let app = TestApp::seeded();

    let (status, _, body) = app.get("/api/camps/ATL2018").await;

    assert_eq!(status, StatusCode::OK);
    let camp: CampResponse = parse(body);
    assert_eq!(camp.name, "Atlanta Code Camp");
    assert_eq!(camp.venue.as_deref(), Some("Atlanta Convention Center"));
    assert_eq!(camp.location_city_town.as_deref(), Some("Atlanta"));
    assert_eq!(camp.talks.len(), 2);
    assert!(camp.talks.iter().all(|t| t.camp_moniker == "ATL2018"));
}

#[tokio::test]
async fn test_get_camp_does_not_expose_numeric_id() {
    let app = TestApp::seeded();

    let (_, _, body) = app.get("/api/camps/ATL2018").await;

    assert!(body.get("id").is_none());
    assert!(body.get("campId").is_none());
}

#[tokio::test]
async fn test_get_unknown_camp_returns_not_found() {
    let app = TestApp::seeded();

    let (status, _, body) = app.get("/api/camps/NOPE").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = parse(body);
    assert_eq!(error.error.code, "NOT_FOUND");
}

// ============================================================================
// GET /api/camps/search - Search By Date
// ============================================================================

#[tokio::test]
async fn test_search_by_date_finds_camp() {
    let app = TestApp::seeded();

    let (status, _, body) = app.get("/api/camps/search?theDate=2018-10-18").await;

    assert_eq!(status, StatusCode::OK);
    let camps: Vec<CampResponse> = parse(body);
    assert_eq!(camps.len(), 1);
    assert_eq!(camps[0].moniker, "ATL2018");
    assert!(camps[0].talks.is_empty());
}

#[tokio::test]
async fn test_search_by_date_include_talks() {
    let app = TestApp::seeded();

    let (status, _, body) = app
        .get("/api/camps/search?theDate=2018-10-18&includeTalks=true")
        .await;

    assert_eq!(status, StatusCode::OK);
    let camps: Vec<CampResponse> = parse(body);
    assert_eq!(camps[0].talks.len(), 2);
}

#[tokio::test]
async fn test_search_by_date_without_match_returns_not_found() {
    let app = TestApp::seeded();

    let (status, _, _) = app.get("/api/camps/search?theDate=2001-01-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_by_date_malformed_date_returns_bad_request() {
    let app = TestApp::seeded();

    let (status, _, _) = app.get("/api/camps/search?theDate=not-a-date").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = app.get("/api/camps/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// POST /api/camps - Create Camp
// ============================================================================

#[tokio::test]
async fn test_create_camp_success() {
    let app = TestApp::empty();

    let (status, headers, body) = app.send(Method::POST, "/api/camps", Some(camp_body("ATL2024"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers.get(header::LOCATION).unwrap(), "/api/camps/ATL2024");

    let camp: CampResponse = parse(body);
    assert_eq!(camp.moniker, "ATL2024");
    assert_eq!(camp.length, 1);
    assert_eq!(camp.capacity, None);

    let (status, _, _) = app.get("/api/camps/ATL2024").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_camp_with_location() {
    let app = TestApp::empty();

    let mut body = camp_body("ATL2024");
    body["length"] = serde_json::json!(2);
    body["venue"] = serde_json::json!("Georgia Tech");
    body["locationCityTown"] = serde_json::json!("Atlanta");

    let (status, _, body) = app.send(Method::POST, "/api/camps", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    let camp: CampResponse = parse(body);
    assert_eq!(camp.length, 2);
    assert_eq!(camp.venue.as_deref(), Some("Georgia Tech"));
    assert_eq!(camp.location_city_town.as_deref(), Some("Atlanta"));
}

#[tokio::test]
async fn test_create_camp_missing_required_fields_persists_nothing() {
    let app = TestApp::empty();

    for missing in ["moniker", "name", "eventDate"] {
        let mut body = camp_body("ATL2024");
        body.as_object_mut().unwrap().remove(missing);

        let (status, _, body) = app.send(Method::POST, "/api/camps", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {missing}");
        let error: ErrorResponse = parse(body);
        assert_eq!(error.error.code, "VALIDATION_ERROR");
    }

    assert!(app.repository.get_all_camps(false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_camp_invalid_fields() {
    let app = TestApp::empty();

    let mut bad_moniker = camp_body("ATL 2024");
    bad_moniker["moniker"] = serde_json::json!("ATL 2024");
    let (status, _, _) = app.send(Method::POST, "/api/camps", Some(bad_moniker)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_length = camp_body("ATL2024");
    bad_length["length"] = serde_json::json!(0);
    let (status, _, _) = app.send(Method::POST, "/api/camps", Some(bad_length)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut empty_name = camp_body("ATL2024");
    empty_name["name"] = serde_json::json!("");
    let (status, _, _) = app.send(Method::POST, "/api/camps", Some(empty_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(app.repository.get_all_camps(false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_camp_malformed_json() {
    let app = TestApp::empty();

    let (status, _, body) = app
        .send(Method::POST, "/api/camps", Some(serde_json::json!({"moniker": 42})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(body);
    assert_eq!(error.error.code, "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_camp_duplicate_moniker_is_save_failure() {
    let app = TestApp::seeded();

    let (status, _, body) = app.send(Method::POST, "/api/camps", Some(camp_body("ATL2018"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(body);
    assert_eq!(error.error.code, "SAVE_FAILED");
    assert_eq!(error.error.message, "Database Failure");
}

// ============================================================================
// PUT /api/camps/:moniker - Update Camp
// ============================================================================

#[tokio::test]
async fn test_update_camp_changes_only_provided_fields() {
    let app = TestApp::empty();
    app.send(Method::POST, "/api/camps", Some(camp_body("ATL2024"))).await;

    let (status, _, body) = app
        .send(
            Method::PUT,
            "/api/camps/ATL2024",
            Some(serde_json::json!({"name": "Atlanta Code Camp 2024"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let camp: CampResponse = parse(body);
    assert_eq!(camp.name, "Atlanta Code Camp 2024");
    assert_eq!(camp.moniker, "ATL2024");
    assert_eq!(camp.event_date.to_string(), "2024-09-01");
    assert_eq!(camp.length, 1);

    let (_, _, body) = app.get("/api/camps/ATL2024").await;
    let stored: CampResponse = parse(body);
    assert_eq!(stored.name, "Atlanta Code Camp 2024");
}

#[tokio::test]
async fn test_update_camp_rename_moves_talks() {
    let app = TestApp::seeded();

    let (status, _, body) = app
        .send(
            Method::PUT,
            "/api/camps/ATL2018",
            Some(serde_json::json!({"moniker": "ATL-2018"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let camp: CampResponse = parse(body);
    assert_eq!(camp.moniker, "ATL-2018");

    let (status, _, _) = app.get("/api/camps/ATL2018").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = app.get("/api/camps/ATL-2018/talks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_camp_invalid_field_is_rejected() {
    let app = TestApp::seeded();

    let (status, _, _) = app
        .send(Method::PUT, "/api/camps/ATL2018", Some(serde_json::json!({"length": 500})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _, body) = app.get("/api/camps/ATL2018").await;
    let camp: CampResponse = parse(body);
    assert_eq!(camp.length, 1);
}

#[tokio::test]
async fn test_update_camp_to_taken_moniker_is_save_failure() {
    let app = TestApp::seeded();
    app.send(Method::POST, "/api/camps", Some(camp_body("ATL2024"))).await;

    let (status, _, body) = app
        .send(
            Method::PUT,
            "/api/camps/ATL2024",
            Some(serde_json::json!({"moniker": "ATL2018"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(body);
    assert_eq!(error.error.code, "SAVE_FAILED");
}

#[tokio::test]
async fn test_update_unknown_camp_returns_not_found() {
    let app = TestApp::empty();

    let (status, _, _) = app
        .send(Method::PUT, "/api/camps/NOPE", Some(serde_json::json!({"name": "x"})))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// DELETE /api/camps/:moniker - Delete Camp
// ============================================================================

#[tokio::test]
async fn test_delete_camp_success() {
    let app = TestApp::seeded();

    let (status, _, body) = app.send(Method::DELETE, "/api/camps/ATL2018", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, _, _) = app.get("/api/camps/ATL2018").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = app.get("/api/camps/ATL2018/talks").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_camp_returns_not_found() {
    let app = TestApp::seeded();

    let (status, _, _) = app.send(Method::DELETE, "/api/camps/unknown-moniker", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Storage faults
// ============================================================================

#[tokio::test]
async fn test_storage_fault_is_internal_error_with_fixed_message() {
    let router = failing_router();

    let requests = [
        (Method::GET, "/api/camps", None),
        (Method::GET, "/api/camps/ATL2018", None),
        (Method::GET, "/api/camps/search?theDate=2018-10-18", None),
        (Method::POST, "/api/camps", Some(camp_body("ATL2024"))),
        (Method::PUT, "/api/camps/ATL2018", Some(serde_json::json!({"name": "x"}))),
        (Method::DELETE, "/api/camps/ATL2018", None),
    ];

    for (method, uri, body) in requests {
        let (status, _, body) = send(&router, method.clone(), uri, body, &[]).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        let error: ErrorResponse = parse(body);
        assert_eq!(error.error.code, "STORAGE_FAILURE");
        assert_eq!(error.error.message, "Database Failure");
    }
}

#[tokio::test]
async fn test_validation_precedes_storage() {
    let router = failing_router();

    let (status, _, _) = send(
        &router,
        Method::POST,
        "/api/camps",
        Some(serde_json::json!({"name": "No moniker"})),
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
