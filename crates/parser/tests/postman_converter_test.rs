//! Integration test for Postman collection conversion

use openapi_schema_builder_parser::postman::{
    ConversionEvent, ConversionWarning, PostmanParser, SkipReason,
};
use openapi_schema_builder_parser::{convert_postman_json, ConvertOptions, PlaceholderMap};
use serde_json::json;

fn shop_collection() -> &'static str {
    r##"{
        "info": {
            "name": "Shop API",
            "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
        },
        "item": [
            {
                "name": "Orders",
                "item": [
                    {
                        "name": "List orders",
                        "request": {
                            "method": "GET",
                            "url": {
                                "raw": "https://api.shop.io:8443/orders?page=1",
                                "host": ["api", "shop", "io"],
                                "path": ["orders"]
                            }
                        }
                    },
                    {
                        "name": "Create order",
                        "request": {
                            "method": "POST",
                            "url": {
                                "raw": "{{base_url}}/orders",
                                "host": ["{{base_url}}"],
                                "path": ["orders"]
                            },
                            "body": {
                                "mode": "raw",
                                "raw": "{\"sku\": \"<string>\", \"quantity\": 2, \"gift\": \"<boolean>\", \"lines\": [{\"id\": \"<uuid>\", \"price\": 9.5}], \"tags\": []}"
                            }
                        }
                    },
                    {
                        "name": "Line items",
                        "item": [
                            {
                                "name": "Update line",
                                "request": {
                                    "method": "PATCH",
                                    "url": {
                                        "raw": "{{host}}/orders/:orderId/lines/{{lineId}}",
                                        "host": ["{{host}}"],
                                        "path": ["orders", ":orderId", "lines", "{{lineId}}"]
                                    },
                                    "body": {"mode": "raw", "raw": "not json"}
                                }
                            }
                        ]
                    }
                ]
            },
            {
                "name": "Broken url",
                "request": {"method": "GET", "url": 42}
            },
            {
                "name": "Relative url",
                "request": {"method": "GET", "url": "{{unknown}}/health"}
            },
            {
                "name": "No url",
                "request": {"method": "GET"}
            }
        ]
    }"##
}

#[test]
fn test_convert_shop_collection() {
    let conversion = PostmanParser::from_json(shop_collection())
        .unwrap()
        .convert()
        .unwrap();

    assert_eq!(conversion.base_url, "https://api.shop.io:8443");

    let doc = serde_json::to_value(&conversion.document).unwrap();
    assert_eq!(doc["openapi"], "3.0.0");
    assert_eq!(doc["info"], json!({"title": "Shop API", "version": "1.0.0"}));
    assert_eq!(doc["servers"], json!([{"url": "https://api.shop.io:8443"}]));

    assert_eq!(doc["paths"]["/orders"]["get"]["summary"], "List orders");
    assert_eq!(
        doc["paths"]["/orders"]["get"]["responses"]["200"]["description"],
        "Successful operation"
    );
    assert!(doc["paths"]["/orders"]["get"].get("requestBody").is_none());

    assert_eq!(
        doc["paths"]["/orders"]["post"]["requestBody"]["content"]["application/json"]["schema"],
        json!({
            "type": "object",
            "properties": {
                "sku": {"type": "string"},
                "quantity": {"type": "integer"},
                "gift": {"type": "boolean"},
                "lines": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "string"},
                            "price": {"type": "number"}
                        }
                    }
                },
                "tags": {"type": "array", "items": {"type": "object"}}
            }
        })
    );

    let patch = &doc["paths"]["/orders/:orderId/lines/{{lineId}}"]["patch"];
    assert_eq!(patch["summary"], "Update line");
    assert!(patch.get("requestBody").is_none());

    let report = &conversion.report;
    assert_eq!(report.processed_count(), 3);
    assert_eq!(report.skipped_count(), 2);
    assert_eq!(report.skipped_names(), vec!["Broken url", "Relative url"]);

    let reasons: Vec<&SkipReason> = report.skipped().map(|s| &s.reason).collect();
    assert_eq!(reasons[0], &SkipReason::UnsupportedUrl { kind: "number" });
    assert!(matches!(reasons[1], SkipReason::RelativePath { path } if path == "{{unknown}}/health"));

    let warnings: Vec<&ConversionWarning> = report.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0],
        ConversionWarning::BodyDecode { name, .. } if name == "Update line"
    ));
}

#[test]
fn test_output_is_stable_across_runs() {
    let first = convert_postman_json(shop_collection(), ConvertOptions::default()).unwrap();
    let second = convert_postman_json(shop_collection(), ConvertOptions::default()).unwrap();

    assert_eq!(
        serde_json::to_string_pretty(&first.document).unwrap(),
        serde_json::to_string_pretty(&second.document).unwrap()
    );
}

#[test]
fn test_base_url_override_and_placeholders() {
    let placeholders = PlaceholderMap::parse(":orderId=1001,{{lineId}}=7").unwrap();
    let conversion = PostmanParser::from_json(shop_collection())
        .unwrap()
        .with_base_url("https://staging.shop.io")
        .with_placeholders(placeholders)
        .convert()
        .unwrap();

    assert_eq!(conversion.base_url, "https://staging.shop.io");
    assert_eq!(
        conversion.document.servers[0].url,
        "https://staging.shop.io"
    );
    assert!(conversion
        .document
        .operation("/orders/1001/lines/7", "patch")
        .is_some());
}

#[test]
fn test_template_tokens_never_survive_in_paths() {
    let json = r##"{
        "info": {"name": "Templates"},
        "item": [
            {"name": "a", "request": {"method": "GET", "url": "{{base_url}}/a"}},
            {"name": "b", "request": {"method": "GET", "url": "{{host}}/b/{{host}}"}},
            {"name": "c", "request": {"method": "GET", "url": {"raw": "{{base_url}}/c", "path": ["c", "{{base_url}}"]}}},
            {"name": "d", "request": {"method": "GET", "url": "http://{{host}}/d"}}
        ]
    }"##;

    let without_override = convert_postman_json(json, ConvertOptions::default()).unwrap();
    let with_override = convert_postman_json(
        json,
        ConvertOptions {
            base_url: Some("https://api.io".to_string()),
            ..ConvertOptions::default()
        },
    )
    .unwrap();

    for conversion in [&without_override, &with_override] {
        for path in conversion.document.paths.keys() {
            assert!(!path.contains("{{base_url}}"), "{}", path);
            assert!(!path.contains("{{host}}"), "{}", path);
        }
    }
    assert!(without_override.document.operation("/d", "get").is_some());
}

#[test]
fn test_templated_base_url_with_host_variable() {
    let json = r##"{
        "info": {"name": "Host variable"},
        "item": [{"name": "x", "request": {"method": "GET", "url": "http://{{host}}/x"}}]
    }"##;

    let conversion = convert_postman_json(json, ConvertOptions::default()).unwrap();
    assert_eq!(conversion.base_url, "http://{{host}}");
    let paths: Vec<&String> = conversion.document.paths.keys().collect();
    assert_eq!(paths, vec!["/x"]);
}

#[test]
fn test_templated_string_urls_need_an_override() {
    let json = r##"{
        "info": {"name": "Templated"},
        "item": [{"name": "users", "request": {"method": "GET", "url": "{{base_url}}/users"}}]
    }"##;

    let discovered = convert_postman_json(json, ConvertOptions::default()).unwrap();
    assert_eq!(discovered.report.skipped_names(), vec!["users"]);

    let overridden = convert_postman_json(
        json,
        ConvertOptions {
            base_url: Some("https://api.io".to_string()),
            ..ConvertOptions::default()
        },
    )
    .unwrap();
    assert!(overridden.document.operation("/users", "get").is_some());
    assert_eq!(overridden.document.servers[0].url, "https://api.io");
}

#[test]
fn test_string_paths_are_taken_as_written() {
    let json = r##"{
        "info": {"name": "Raw paths"},
        "item": [
            {"name": "host only", "request": {"method": "GET", "url": "https://a.io"}},
            {"name": "host and query", "request": {"method": "GET", "url": "https://a.io?x=1"}},
            {"name": "encoded", "request": {"method": "GET", "url": "https://a.io/a%20b"}},
            {"name": "dots", "request": {"method": "GET", "url": "https://a.io/a/../b"}}
        ]
    }"##;

    let conversion = convert_postman_json(json, ConvertOptions::default()).unwrap();
    let paths: Vec<&str> = conversion.document.paths.keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["/a%20b", "/a/../b"]);
    assert_eq!(
        conversion.report.skipped_names(),
        vec!["host only", "host and query"]
    );
}

#[test]
fn test_structured_url_with_non_string_raw_uses_path() {
    let json = r##"{
        "info": {"name": "Loose raw"},
        "item": [{"name": "odd raw", "request": {"method": "GET", "url": {"raw": 5, "path": ["things", "1"]}}}]
    }"##;

    let conversion = convert_postman_json(json, ConvertOptions::default()).unwrap();
    assert!(conversion.document.operation("/things/1", "get").is_some());
    assert_eq!(conversion.report.skipped_count(), 0);
}

#[test]
fn test_same_path_methods_merge_and_duplicates_overwrite() {
    let json = r##"{
        "info": {"name": "Users"},
        "item": [
            {"name": "List users", "request": {"method": "GET", "url": "https://u.io/users"}},
            {"name": "Create user", "request": {"method": "POST", "url": "https://u.io/users"}},
            {"name": "List users again", "request": {"method": "get", "url": "https://u.io/users"}}
        ]
    }"##;

    let conversion = convert_postman_json(json, ConvertOptions::default()).unwrap();
    let doc = &conversion.document;

    assert_eq!(doc.paths.len(), 1);
    assert_eq!(doc.operation_count(), 2);
    assert_eq!(doc.operation("/users", "get").unwrap().summary, "List users again");
    assert_eq!(doc.operation("/users", "post").unwrap().summary, "Create user");

    let duplicate = conversion.report.events.iter().find_map(|event| match event {
        ConversionEvent::Warning(ConversionWarning::DuplicateOperation { replaced, .. }) => {
            Some(replaced.as_str())
        }
        _ => None,
    });
    assert_eq!(duplicate, Some("List users"));
    assert_eq!(conversion.report.processed_count(), 3);
}

#[test]
fn test_every_nested_request_is_registered() {
    let json = r##"{
        "info": {"name": "Deep"},
        "item": [
            {"name": "l1", "item": [
                {"name": "l2", "item": [
                    {"name": "l3", "item": [
                        {"name": "deep", "request": {"method": "DELETE", "url": {"raw": "http://d.io/x/1", "path": ["x", "1"]}}}
                    ]}
                ]},
                {"name": "shallow", "request": {"method": "PUT", "url": {"path": ["x"]}}}
            ]}
        ]
    }"##;

    let conversion = convert_postman_json(json, ConvertOptions::default()).unwrap();
    assert_eq!(conversion.base_url, "http://d.io");
    assert!(conversion.document.operation("/x/1", "delete").is_some());
    assert!(conversion.document.operation("/x", "put").is_some());
    assert_eq!(conversion.report.processed_count(), 2);
    assert_eq!(conversion.report.skipped_count(), 0);
}

#[test]
fn test_missing_method_is_skipped() {
    let json = r##"{
        "info": {"name": "Methods"},
        "item": [{"name": "anonymous", "request": {"url": "https://m.io/a"}}]
    }"##;

    let conversion = convert_postman_json(json, ConvertOptions::default()).unwrap();
    let skipped: Vec<_> = conversion.report.skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].reason, SkipReason::MissingRequestMethod);
}

#[test]
fn test_swagger_with_postman_keys_is_rejected() {
    let json = r##"{"swagger": "2.0", "info": {"name": "x"}, "item": []}"##;
    assert!(PostmanParser::from_json(json).is_err());
}
