use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState,
    http::{ApiError, ApiResult},
};

pub mod item_type {
    use serde::Deserialize;

    use domain::models::{ItemType, ItemTypeDetail};
    use use_case::lookup::{ItemTypeUseCase, LookupUseCase};
    use utils::serde::deserialize_option_split_comma;

    use super::*;
    use crate::{
        http::{extract::CodedPath, extract::convert_codes, not_found},
        repositories::StaticItemTypeRepository,
    };

    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct ItemTypeListQueryParams {
        /// 物件項目の種類コード（カンマ区切り）
        #[serde(default, deserialize_with = "deserialize_option_split_comma")]
        pub codes: Option<Vec<String>>,
    }

    fn item_type_use_case() -> ItemTypeUseCase<StaticItemTypeRepository> {
        ItemTypeUseCase {
            repo: StaticItemTypeRepository,
        }
    }

    #[tracing::instrument(skip(app_state))]
    pub async fn list(
        State(app_state): State<AppState>,
        Query(params): Query<ItemTypeListQueryParams>,
    ) -> ApiResult<Json<Vec<ItemTypeDetail>>> {
        let use_case = item_type_use_case();
        let details = match params.codes {
            Some(codes) => {
                let codes = convert_codes::<ItemType>(&app_state.converters, &codes)?;
                use_case.list_by_codes(&codes).await
            }
            None => use_case.list().await,
        };
        Ok(Json(details.map_err(ApiError::from)?))
    }

    #[tracing::instrument()]
    pub async fn by_code(
        CodedPath(code): CodedPath<ItemType>,
    ) -> ApiResult<Json<ItemTypeDetail>> {
        let detail = item_type_use_case()
            .by_code(code)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| not_found("item type"))?;
        Ok(Json(detail))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt as _;

    use domain::{
        convert::ConverterRegistry,
        models::{ItemType, ItemTypeDetail},
    };
    use settings::{AppSettings, HttpProtocol, HttpSettings, LogSettings};

    use super::*;

    fn app_settings() -> AppSettings {
        AppSettings {
            http: HttpSettings {
                protocol: HttpProtocol::Http,
                host: String::from("127.0.0.1"),
                port: 0,
            },
            log: LogSettings {
                level: log::Level::Info,
            },
        }
    }

    fn router(app_state: AppState) -> Router {
        Router::new()
            .route("/item-types", get(item_type::list))
            .route("/item-types/{code}", get(item_type::by_code))
            .with_state(app_state)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status_code = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status_code, serde_json::from_slice(&body).unwrap())
    }

    #[rstest::rstest]
    #[case("/item-types/1", ItemType::Room)]
    #[case("/item-types/2", ItemType::Facility)]
    #[case("/item-types/3", ItemType::Appliance)]
    #[case("/item-types/%EF%BC%92", ItemType::Facility)]
    #[tokio::test]
    async fn by_code_returns_item_type(#[case] uri: &str, #[case] expected: ItemType) {
        let (status_code, body) = get_json(router(AppState::new(app_settings())), uri).await;
        assert_eq!(status_code, StatusCode::OK);
        let detail = serde_json::from_value::<ItemTypeDetail>(body).unwrap();
        assert_eq!(detail.code, expected);
    }

    #[rstest::rstest]
    #[case("/item-types/99", "code:99 is invalid")]
    #[case("/item-types/abc", "code:abc is not a valid integer")]
    #[case("/item-types/-3", "code:-3 is invalid")]
    #[tokio::test]
    async fn by_code_rejects_bad_code(#[case] uri: &str, #[case] expected: &str) {
        let (status_code, body) = get_json(router(AppState::new(app_settings())), uri).await;
        assert_eq!(status_code, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "messages": [expected] }));
    }

    #[tokio::test]
    async fn by_code_without_converter_is_server_error() {
        let app_state = AppState {
            app_settings: app_settings(),
            converters: Arc::new(ConverterRegistry::new()),
        };
        let (status_code, _) = get_json(router(app_state), "/item-types/1").await;
        assert_eq!(status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest::rstest]
    #[case("/item-types", vec![1, 2, 3])]
    #[case("/item-types?codes=", vec![1, 2, 3])]
    #[case("/item-types?codes=3,1", vec![1, 3])]
    #[case("/item-types?codes=2", vec![2])]
    #[tokio::test]
    async fn list_returns_item_types(#[case] uri: &str, #[case] expected: Vec<i32>) {
        let (status_code, body) = get_json(router(AppState::new(app_settings())), uri).await;
        assert_eq!(status_code, StatusCode::OK);
        let details = serde_json::from_value::<Vec<ItemTypeDetail>>(body).unwrap();
        let codes = details.iter().map(|d| d.code as i32).collect::<Vec<_>>();
        assert_eq!(codes, expected);
    }

    #[rstest::rstest]
    #[case("/item-types?codes=1,99", "code:99 is invalid")]
    #[case("/item-types?codes=x", "code:x is not a valid integer")]
    #[tokio::test]
    async fn list_rejects_bad_codes(#[case] uri: &str, #[case] expected: &str) {
        let (status_code, body) = get_json(router(AppState::new(app_settings())), uri).await;
        assert_eq!(status_code, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "messages": [expected] }));
    }
}
