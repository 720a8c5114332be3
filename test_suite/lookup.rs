use reqwest::StatusCode;

use domain::models::{ItemType, ItemTypeDetail};

use crate::helpers::{ResponseParts, load_app_settings_for_testing, split_response};
use crate::test_case::{EnableTracing, TestCase};

#[tokio::test]
async fn user_can_list_item_types() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, EnableTracing::No).await;

    let response = test_case.item_type_list(None).await;
    let ResponseParts { status_code, body } = split_response(response).await;
    assert_eq!(
        status_code,
        StatusCode::OK,
        "Item type list request failed: {}",
        status_code
    );
    let details = serde_json::from_str::<Vec<ItemTypeDetail>>(&body).unwrap();
    let codes = details.iter().map(|d| d.code).collect::<Vec<_>>();
    assert_eq!(
        codes,
        vec![ItemType::Room, ItemType::Facility, ItemType::Appliance]
    );

    test_case.end().await;
}

#[tokio::test]
async fn user_can_filter_item_types_by_codes() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, EnableTracing::No).await;

    let response = test_case.item_type_list(Some("3,1")).await;
    let ResponseParts { status_code, body } = split_response(response).await;
    assert_eq!(status_code, StatusCode::OK);
    let details = serde_json::from_str::<Vec<ItemTypeDetail>>(&body).unwrap();
    let codes = details.iter().map(|d| d.code).collect::<Vec<_>>();
    assert_eq!(codes, vec![ItemType::Room, ItemType::Appliance]);

    test_case.end().await;
}

#[tokio::test]
async fn user_can_not_filter_item_types_by_unknown_code() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, EnableTracing::No).await;

    let response = test_case.item_type_list(Some("1,99")).await;
    let ResponseParts { status_code, body } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_REQUEST);
    assert!(body.contains("99"), "Unexpected body: {}", body);

    test_case.end().await;
}

#[tokio::test]
async fn user_can_get_an_item_type_by_code() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, EnableTracing::No).await;

    let response = test_case.item_type_by_code("%EF%BC%93").await;
    let ResponseParts { status_code, body } = split_response(response).await;
    assert_eq!(status_code, StatusCode::OK, "Fullwidth code was rejected: {}", body);
    let detail = serde_json::from_str::<ItemTypeDetail>(&body).unwrap();
    assert_eq!(detail.code, ItemType::Appliance);

    for expected in [ItemType::Room, ItemType::Facility, ItemType::Appliance] {
        let response = test_case
            .item_type_by_code(&(expected as i32).to_string())
            .await;
        let ResponseParts { status_code, body } = split_response(response).await;
        assert_eq!(status_code, StatusCode::OK);
        let detail = serde_json::from_str::<ItemTypeDetail>(&body).unwrap();
        assert_eq!(detail.code, expected);
    }

    test_case.end().await;
}

#[tokio::test]
async fn user_can_not_get_an_item_type_by_unknown_code() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, EnableTracing::No).await;

    let response = test_case.item_type_by_code("99").await;
    let ResponseParts { status_code, body } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_REQUEST);
    let body = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert_eq!(body, serde_json::json!({ "messages": ["code:99 is invalid"] }));

    test_case.end().await;
}

#[tokio::test]
async fn user_can_not_get_an_item_type_by_malformed_code() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, EnableTracing::No).await;

    let response = test_case.item_type_by_code("abc").await;
    let ResponseParts { status_code, body } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_REQUEST);
    let body = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "messages": ["code:abc is not a valid integer"] })
    );

    test_case.end().await;
}
