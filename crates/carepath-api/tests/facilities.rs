mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use carepath_api::routes::facilities::seed_directory;
use carepath_core::models::facility::Facility;
use carepath_storage::memory::MemoryStore;
use common::{get, post_json, put_json, request, send, test_state, token_for};

fn seeded(name: &str, facility_type: &str, hours: &str, verified: bool) -> Facility {
    Facility {
        id: Uuid::new_v4(),
        name: name.to_string(),
        facility_type: facility_type.to_string(),
        address: "Kenyatta Ave".to_string(),
        phone: Some("020 000 000".to_string()),
        hours: hours.to_string(),
        verified,
        premium: false,
        rating: Some(4.5),
        reviews: 10,
        services: vec!["Emergency".to_string()],
        location: None,
        owner_handle: None,
    }
}

async fn seed_sample(store: &MemoryStore) -> Vec<Facility> {
    let facilities = vec![
        seeded("City Hospital", "Hospital", "24/7", true),
        seeded("Corner Pharmacy", "Pharmacy", "8am-8pm", false),
        seeded("Avenue Clinic", "Clinic", "24/7", false),
    ];
    assert_eq!(seed_directory(store, &facilities).await.unwrap(), 3);
    facilities
}

fn names(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect()
}

fn draft(name: &str) -> Value {
    json!({
        "name": name,
        "type": "Clinic",
        "address": "Moi Ave",
        "hours": "Mon-Sat 8-17",
        "services": ["General Practice"],
    })
}

#[tokio::test]
async fn directory_is_public_and_sorted_by_name() {
    let (state, store) = test_state();
    seed_sample(&store).await;

    let (status, list) = send(carepath_api::router(state), get("/api/facilities", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&list), vec!["Avenue Clinic", "City Hospital", "Corner Pharmacy"]);
    assert_eq!(list[1]["type"], "Hospital");
}

#[tokio::test]
async fn directory_filters_combine() {
    let (state, store) = test_state();
    seed_sample(&store).await;
    let app = carepath_api::router(state);

    let (_, list) = send(app.clone(), get("/api/facilities?type=Pharmacy", None)).await;
    assert_eq!(names(&list), vec!["Corner Pharmacy"]);

    let (_, list) = send(app.clone(), get("/api/facilities?type=All&twentyFourHour=true", None)).await;
    assert_eq!(names(&list), vec!["Avenue Clinic", "City Hospital"]);

    let (_, list) = send(app.clone(), get("/api/facilities?verifiedOnly=true&twentyFourHour=true", None)).await;
    assert_eq!(names(&list), vec!["City Hospital"]);

    let (status, body) = send(app, get("/api/facilities?verifiedOnly=maybe", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("verifiedOnly"));
}

#[tokio::test]
async fn seeding_skips_a_populated_directory() {
    let store = MemoryStore::new();
    seed_sample(&store).await;
    let again = [seeded("Late Arrival", "Clinic", "9-5", true)];
    assert_eq!(seed_directory(&store, &again).await.unwrap(), 0);
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn single_facility_lookup() {
    let (state, store) = test_state();
    let facilities = seed_sample(&store).await;
    let app = carepath_api::router(state);

    let (status, facility) = send(app.clone(), get(&format!("/api/facilities/{}", facilities[0].id), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(facility["name"], "City Hospital");

    let (status, body) = send(app, get(&format!("/api/facilities/{}", Uuid::new_v4()), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Facility not found");
}

#[tokio::test]
async fn registering_requires_a_token_and_required_fields() {
    let (state, _) = test_state();
    let app = carepath_api::router(state);

    let (status, _) = send(app.clone(), post_json("/api/facilities", draft("Moi Clinic"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = token_for("owner_1");
    let (status, body) = send(
        app,
        post_json("/api/facilities", json!({ "name": "No Address", "type": "Clinic", "hours": "9-5" }), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing required field: address");
}

#[tokio::test]
async fn owner_can_update_and_delete_their_facility() {
    let (state, store) = test_state();
    let app = carepath_api::router(state);
    let owner = token_for("owner_1");

    let (status, created) = send(app.clone(), post_json("/api/facilities", draft("Moi Clinic"), Some(&owner))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["verified"], false);
    assert_eq!(created["ownerHandle"], "owner_1");
    let path = format!("/api/facilities/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(app.clone(), put_json(&path, draft("Moi Family Clinic"), Some(&owner))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Moi Family Clinic");
    assert_eq!(updated["id"], created["id"]);

    let intruder = token_for("someone_else");
    let (status, body) = send(app.clone(), put_json(&path, draft("Hijacked"), Some(&intruder))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");
    let (status, _) = send(app.clone(), request("DELETE", &path, None, Some(&intruder))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(app.clone(), request("DELETE", &path, None, Some(&owner))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(store.is_empty().await);

    let (status, _) = send(app, get(&path, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_facilities_cannot_be_edited_through_the_api() {
    let (state, store) = test_state();
    let facilities = seed_sample(&store).await;
    let token = token_for("owner_1");
    let path = format!("/api/facilities/{}", facilities[0].id);

    let (status, _) = send(carepath_api::router(state), put_json(&path, draft("Renamed"), Some(&token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
