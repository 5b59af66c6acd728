use super::*;

#[test]
fn asset_decodes_camel_case_fields() {
    let json = serde_json::json!({
        "assetId": "a-1",
        "assetName": "Laptop",
        "status": "Active",
        "health": "Good",
        "installedDate": "2023-01-01",
        "location": "HQ"
    });
    let asset: Asset = serde_json::from_value(json).unwrap();
    assert_eq!(asset.asset_id, Some(AssetId::new("a-1")));
    assert_eq!(asset.asset_name, "Laptop");
    assert_eq!(asset.status, "Active");
    assert_eq!(asset.health, "Good");
    assert_eq!(asset.installed_date, "2023-01-01");
    assert_eq!(asset.location, "HQ");
}

#[test]
fn asset_id_accepts_numbers() {
    let asset: Asset = serde_json::from_str(r#"{"assetId":1,"assetName":"Laptop"}"#).unwrap();
    assert_eq!(asset.asset_id, Some(AssetId::from(1)));
    assert_eq!(asset.asset_id.unwrap().to_string(), "1");
}

#[test]
fn asset_tolerates_nulls_and_missing_fields() {
    let asset: Asset = serde_json::from_str(r#"{"assetName":"Pump","status":null,"extra":true}"#).unwrap();
    assert_eq!(asset.asset_id, None);
    assert_eq!(asset.asset_name, "Pump");
    assert_eq!(asset.status, "");
    assert_eq!(asset.health, "");
    assert_eq!(asset.installed_date, "");
}

#[test]
fn asset_list_keeps_server_order() {
    let list: Vec<Asset> = serde_json::from_str(r#"[{"assetId":"b"},{"assetId":"a"},{"assetId":"c"}]"#).unwrap();
    let ids: Vec<String> = list.into_iter().filter_map(|a| a.asset_id).map(|id| id.to_string()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn new_asset_serializes_exact_field_names() {
    let body = NewAsset {
        asset_name: " Turbine 7 ".to_owned(),
        status: "ACTIVE".to_owned(),
        health: "GOOD".to_owned(),
        installed_date: "2024-05-06".to_owned(),
        location: "Site B".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "assetName": " Turbine 7 ",
            "status": "ACTIVE",
            "health": "GOOD",
            "installedDate": "2024-05-06",
            "location": "Site B"
        })
    );
}

#[test]
fn created_asset_flattens_asset_and_age() {
    let created: CreatedAsset = serde_json::from_str(
        r#"{"assetId":"u-9","assetName":"Inverter","status":"ACTIVE","health":"GOOD","installedDate":"2022-02-02","location":"Roof","age":"Not Available"}"#,
    )
    .unwrap();
    assert_eq!(created.asset.asset_id, Some(AssetId::new("u-9")));
    assert_eq!(created.asset.asset_name, "Inverter");
    assert_eq!(created.age.as_deref(), Some("Not Available"));
}

#[test]
fn error_response_summary_prefers_message() {
    let body: ErrorResponse = serde_json::from_str(
        r#"{"message":"Asset with ID:x Not found","status":404,"timestamp":"2024-01-01T00:00:00","error":"Not Found","path":"/api/v1/assets/x"}"#,
    )
    .unwrap();
    assert_eq!(body.status, Some(404));
    assert_eq!(body.summary(), Some("Asset with ID:x Not found"));
}

#[test]
fn error_response_summary_falls_back_to_reason() {
    let body: ErrorResponse = serde_json::from_str(r#"{"message":"","error":"Bad Request"}"#).unwrap();
    assert_eq!(body.summary(), Some("Bad Request"));
    assert_eq!(ErrorResponse::default().summary(), None);
}
