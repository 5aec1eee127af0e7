//! Verify service accessors against JSON test vectors stored in `test-vectors/`.
//!
//! Each case names an accessor and its arguments, the request it must send,
//! a simulated network outcome, and whether the caller ends up with live or
//! fallback data. Results are compared as JSON values so field order never
//! matters.

use std::sync::Mutex;

use impacthub_core::fallback;
use impacthub_core::filters::{DonorFilters, EventFilters};
use impacthub_core::types::CampaignStatus;
use impacthub_core::{
    ApiClient, ApiError, HttpMethod, HttpRequest, HttpResponse, ImpactHubApi, NoCredentials, ResilientClient,
    StaticToken, Transport,
};
use serde_json::Value;

/// Replays one outcome and remembers every request it was asked to send.
struct Scripted {
    outcome: Result<HttpResponse, ApiError>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Transport for Scripted {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn outcome(case: &Value) -> Result<HttpResponse, ApiError> {
    if let Some(error) = case.get("simulated_error") {
        return Err(match error.as_str().unwrap() {
            "timeout" => ApiError::Timeout,
            "transport" => ApiError::Transport("connection reset".into()),
            other => panic!("unknown simulated_error: {other}"),
        });
    }
    let sim = &case["simulated_response"];
    Ok(HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    ))
}

fn arg<'a>(args: &'a Value, key: &str) -> &'a str {
    args[key].as_str().unwrap_or_default()
}

fn call(api: &ImpactHubApi<Scripted>, accessor: &str, args: &Value) -> Value {
    let result = match accessor {
        "dashboard" => serde_json::to_value(api.dashboard()),
        "send_receipt" => serde_json::to_value(api.send_receipt(arg(args, "id"))),
        "list_events" => {
            let filters = EventFilters {
                search: arg(args, "search").to_string(),
                status: None,
            };
            serde_json::to_value(api.list_events(&filters))
        }
        "list_donors" => serde_json::to_value(api.list_donors(&DonorFilters::default())),
        "set_campaign_status" => {
            let status: CampaignStatus = serde_json::from_value(args["status"].clone()).unwrap();
            serde_json::to_value(api.set_campaign_status(arg(args, "id"), status))
        }
        "sponsor_cash_donations" => serde_json::to_value(api.sponsor_cash_donations(arg(args, "id"))),
        "delete_item" => serde_json::to_value(api.delete_item(arg(args, "id"))),
        other => panic!("unknown accessor: {other}"),
    };
    result.unwrap()
}

/// The value an accessor resolves to when its call fails.
fn fallback_for(accessor: &str, args: &Value) -> Value {
    let result = match accessor {
        "dashboard" => serde_json::to_value(fallback::dashboard_data()),
        "list_events" => serde_json::to_value(fallback::events()),
        "sponsor_cash_donations" => {
            let id = arg(args, "id");
            let donations: Vec<_> = fallback::cash_donations()
                .into_iter()
                .filter(|d| d.sponsor_id == id)
                .collect();
            serde_json::to_value(donations)
        }
        other => panic!("no fallback known for {other}"),
    };
    result.unwrap()
}

#[test]
fn accessor_test_vectors() {
    let raw = include_str!("../../test-vectors/accessors.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let accessor = case["accessor"].as_str().unwrap();
        let args = &case["args"];

        let client = match case["token"].as_str() {
            Some(token) => ApiClient::new("", StaticToken(token.to_string())),
            None => ApiClient::new("", NoCredentials),
        };
        let transport = Scripted {
            outcome: outcome(case),
            seen: Mutex::new(Vec::new()),
        };
        let api = ImpactHubApi::new(ResilientClient::new(client, transport));

        let result = call(&api, accessor, args);

        // Verify request
        let seen = api.resilient().transport().seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 1, "{name}: exactly one attempt");
        let req = &seen[0];
        let expected_req = &case["expected_request"];
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, expected_req["path"].as_str().unwrap(), "{name}: path");
        assert_eq!(
            req.header("authorization"),
            expected_req["authorization"].as_str(),
            "{name}: authorization"
        );
        match req.body.as_deref() {
            Some(body) => {
                let sent: Value = serde_json::from_str(body).unwrap();
                assert_eq!(sent, expected_req["body"], "{name}: body");
            }
            None => assert!(expected_req["body"].is_null(), "{name}: body should be None"),
        }

        // Verify outcome
        let expected_result = case.get("expected_result");
        match case["expected"].as_str().unwrap() {
            "live" => {
                assert_eq!(Some(&result), expected_result, "{name}: live result");
            }
            "fallback" => {
                let expected = match expected_result {
                    Some(value) => value.clone(),
                    None => fallback_for(accessor, args),
                };
                assert_eq!(result, expected, "{name}: fallback result");
            }
            other => panic!("{name}: unknown expectation {other}"),
        }
    }
}
