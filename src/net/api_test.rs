use super::*;

const BASE: &str = "http://localhost:8000/api/v1/assets";

#[test]
fn collection_url_strips_trailing_slash() {
    assert_eq!(collection_url("http://localhost:8000/api/v1/assets/"), BASE);
    assert_eq!(collection_url(BASE), BASE);
}

#[test]
fn asset_url_appends_id_segment() {
    assert_eq!(asset_url(BASE, &AssetId::from(1)), "http://localhost:8000/api/v1/assets/1");
}

#[test]
fn asset_url_encodes_untrusted_ids() {
    let id = AssetId::new("a/b?c='x'");
    assert_eq!(asset_url(BASE, &id), "http://localhost:8000/api/v1/assets/a%2Fb%3Fc%3D%27x%27");
}

#[test]
fn search_url_without_filters_has_no_query() {
    assert_eq!(search_url(BASE, &SearchQuery::default()), "http://localhost:8000/api/v1/assets/search");
}

#[test]
fn search_url_includes_populated_filters_in_order() {
    let query = SearchQuery { name: "Solar Panel".into(), status: String::new(), year: "2023".into() };
    assert_eq!(search_url(BASE, &query), "http://localhost:8000/api/v1/assets/search?name=Solar%20Panel&year=2023");
}

#[test]
fn decode_asset_list_rejects_non_array() {
    assert!(matches!(decode_asset_list(r#"{"message":"boom"}"#), Err(ApiError::Decode(_))));
    assert!(matches!(decode_asset_list("<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn decode_asset_list_accepts_empty_array() {
    assert_eq!(decode_asset_list("[]").unwrap(), Vec::<Asset>::new());
}

#[test]
fn ack_success_range() {
    assert!(Ack { status: 201, body: String::new() }.is_success());
    assert!(Ack { status: 204, body: String::new() }.is_success());
    assert!(!Ack { status: 404, body: String::new() }.is_success());
    assert!(!Ack::default().is_success());
}

#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpAssetApi::new(BASE);
    let result = futures::executor::block_on(api.list());
    assert_eq!(result, Err(ApiError::Unavailable));
}
