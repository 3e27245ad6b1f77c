//! Shared helpers for integration tests

use gymtrack_engine::config::AiConfig;
use gymtrack_engine::{ApiCredential, DelegationGateway};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn credential() -> ApiCredential {
    ApiCredential::new("sk-test-key")
}

/// Gateway pointed at a mock server
pub fn gateway_for(server: &MockServer) -> DelegationGateway {
    let config = AiConfig {
        base_url: server.uri(),
        request_timeout_secs: 5,
        ..AiConfig::default()
    };
    DelegationGateway::new(&config).unwrap()
}

/// Mount a chat-completions mock whose message content is the given JSON
/// payload, serialized to a string the way the service returns it
pub async fn mount_completion(server: &MockServer, content: serde_json::Value) {
    let body = json!({
        "choices": [
            { "message": { "content": content.to_string() } }
        ]
    });
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a chat-completions mock returning the given status with no body
pub async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// A plan payload in the wire shape the generation service produces
pub fn ai_plan_json(title: &str) -> serde_json::Value {
    let day_names = [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ];
    let schedule: Vec<serde_json::Value> = day_names
        .iter()
        .map(|day| json!({ "day": day, "focus": "General", "exercises": ["Push-ups"] }))
        .collect();
    json!({
        "title": title,
        "description": "A plan from the service",
        "bmiCategory": "Normal",
        "exercises": [
            {
                "name": "Push-ups",
                "sets": 3,
                "reps": "10-12",
                "restSeconds": 60,
                "targetMuscle": "Chest",
                "difficulty": "beginner"
            }
        ],
        "tips": ["Warm up first"],
        "weeklySchedule": schedule
    })
}

/// An analysis payload in the wire shape the generation service produces
pub fn ai_analysis_json(score: u8) -> serde_json::Value {
    json!({
        "summary": "A solid day",
        "positives": ["You trained"],
        "improvements": [],
        "recommendations": ["Keep going"],
        "overallScore": score
    })
}
