mod mocks;

use mocks::{client, MockTransport, BASE};
use tooldeck::api::{HttpMethod, Payload, RequestBody, ReviewListing};
use tooldeck::error::ApiError;
use tooldeck::models::{ApprovalStatus, EntityId, NewReview, PricingType, ToolFilter, ToolPatch};

const TOOLS: &str = r#"[
    {"id": 1, "tool_name": "ChatGPT", "use_case": "Chat assistant", "category": "Text", "pricing_type": "FREEMIUM", "avg_rating": 4.5},
    {"id": "2", "tool_name": "Midjourney", "use_case": null, "category": "Image", "pricing_type": "PAID", "avg_rating": null}
]"#;

#[tokio::test]
async fn list_tools_decodes_mixed_ids_and_missing_fields() {
    let transport = MockTransport::new();
    transport.respond(200, TOOLS);
    let api = client(&transport, None);

    let tools = api.list_tools(&ToolFilter::default()).await.unwrap();

    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0].id, EntityId::from(1));
    assert_eq!(tools[1].id, EntityId::from("2"));
    assert_eq!(tools[1].avg_rating, 0.0);
    assert_eq!(tools[1].pricing_type, PricingType::Paid);
    assert_eq!(
        transport.calls(),
        vec![(HttpMethod::Get, format!("{BASE}/admin/tools/search"))]
    );
    assert_eq!(transport.requests()[0].bearer, None);
}

#[tokio::test]
async fn filter_values_are_encoded_in_documented_order() {
    let transport = MockTransport::new();
    transport.respond(200, "[]");
    let api = client(&transport, None);

    let filter = ToolFilter::default()
        .min_rating("3")
        .category("Text & Code")
        .pricing_type("FREE");
    api.list_tools(&filter).await.unwrap();

    assert_eq!(
        transport.requests()[0].url,
        format!("{BASE}/admin/tools/search?category=Text%20%26%20Code&pricing_type=FREE&min_rating=3")
    );
}

#[tokio::test]
async fn stored_token_is_sent_as_bearer() {
    let transport = MockTransport::new();
    transport.respond(
        200,
        r#"{"username": "ada", "email": "ada@example.com", "first_name": "Ada", "last_name": "L", "role": "admin"}"#,
    );
    let api = client(&transport, Some("tok-1"));

    let profile = api.profile().await.unwrap();

    assert!(profile.is_admin());
    let request = &transport.requests()[0];
    assert_eq!(request.url, format!("{BASE}/user/"));
    assert_eq!(request.bearer.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn login_posts_form_and_does_not_store_the_token() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"access_token": "abc", "token_type": "bearer"}"#);
    let api = client(&transport, None);

    let token = api.login("ada lovelace", "p&ss").await.unwrap();

    assert_eq!(token.access_token, "abc");
    assert!(!api.is_logged_in());
    let request = &transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, format!("{BASE}/auth/token"));
    assert_eq!(
        request.body,
        RequestBody::Form("username=ada%20lovelace&password=p%26ss".into())
    );
}

#[tokio::test]
async fn error_status_uses_the_server_detail() {
    let transport = MockTransport::new();
    transport.respond(401, r#"{"detail": "Could not validate user."}"#);
    transport.respond(422, r#"{"detail": [{"msg": "field required"}, {"msg": "too short"}]}"#);
    transport.respond(500, "Internal Server Error");
    let api = client(&transport, Some("stale"));

    let unauthorized = api.profile().await.unwrap_err();
    assert!(unauthorized.is_unauthorized());
    assert_eq!(unauthorized.to_string(), "Could not validate user.");

    let invalid = api.all_reviews().await.unwrap_err();
    assert_eq!(invalid.to_string(), "field required; too short");

    let server = api.pending_reviews().await.unwrap_err();
    assert_eq!(server.status(), Some(500));
    assert_eq!(server.to_string(), "HTTP 500");
}

#[tokio::test]
async fn detail_only_success_body_is_a_rejection() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"detail": "Tool already exists"}"#);
    let api = client(&transport, Some("tok"));

    let review = NewReview {
        tool_id: EntityId::from(1),
        user_rating: 5,
        comment: String::new(),
    };
    let err = api.submit_review(&review).await.unwrap_err();

    assert_eq!(err, ApiError::Rejected("Tool already exists".into()));
}

#[tokio::test]
async fn update_accepts_empty_and_text_bodies() {
    let transport = MockTransport::new();
    transport.respond(200, "");
    transport.respond(200, "updated");
    let api = client(&transport, Some("tok"));
    let patch = ToolPatch {
        tool_name: Some("Renamed".into()),
        ..ToolPatch::default()
    };

    let empty = api.update_tool(&EntityId::from(4), &patch).await.unwrap();
    let text = api.update_tool(&EntityId::from(4), &patch).await.unwrap();

    assert_eq!(empty, Payload::Empty);
    assert_eq!(text, Payload::Text("updated".into()));
    let request = &transport.requests()[0];
    assert_eq!(request.url, format!("{BASE}/admin/Update_tool/4"));
    assert_eq!(request.body, RequestBody::Json(r#"{"tool_name":"Renamed"}"#.into()));
}

#[tokio::test]
async fn review_status_goes_in_the_query() {
    let transport = MockTransport::new();
    transport.respond(
        200,
        r#"{"id": 7, "tool_id": 1, "user_id": 2, "user_rating": 4, "comment": "ok", "approval_status": "REJECTED"}"#,
    );
    let api = client(&transport, Some("tok"));

    let review = api.reject_review(&EntityId::from(7)).await.unwrap();

    assert_eq!(review.approval_status, ApprovalStatus::Rejected);
    assert_eq!(
        transport.calls(),
        vec![(
            HttpMethod::Put,
            format!("{BASE}/admin/approve_review/7?approval_status=REJECTED")
        )]
    );
    assert_eq!(transport.requests()[0].body, RequestBody::Empty);
}

#[tokio::test]
async fn review_listings_hit_their_endpoints() {
    let transport = MockTransport::new();
    transport.respond(200, "[]").respond(200, "[]").respond(200, "[]");
    let api = client(&transport, Some("tok"));

    for listing in [ReviewListing::Pending, ReviewListing::Approved, ReviewListing::All] {
        assert!(api.reviews(listing).await.unwrap().is_empty());
    }

    let urls: Vec<String> = transport.calls().into_iter().map(|(_, url)| url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE}/admin/reviews/pending"),
            format!("{BASE}/admin/reviews/approved"),
            format!("{BASE}/admin/all_reviews"),
        ]
    );
}

#[tokio::test]
async fn transport_failures_pass_through() {
    let transport = MockTransport::new();
    transport.fail(ApiError::Timeout(10_000));
    let api = client(&transport, None);

    let err = api.list_tools(&ToolFilter::default()).await.unwrap_err();

    assert_eq!(err, ApiError::Timeout(10_000));
}

#[tokio::test]
async fn update_accepts_acknowledgements_that_are_not_tools() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"message": "Tool updated"}"#);
    transport.respond(200, r#""Tool updated""#);
    transport.respond(200, r#"{"detail": "Not enough permissions"}"#);
    let api = client(&transport, Some("tok"));
    let patch = ToolPatch::default();

    let ack = api.update_tool(&EntityId::from(4), &patch).await.unwrap();
    assert_eq!(ack, Payload::Json(serde_json::json!({"message": "Tool updated"})));

    let quoted = api.update_tool(&EntityId::from(4), &patch).await.unwrap();
    assert_eq!(quoted, Payload::Json(serde_json::json!("Tool updated")));

    let refused = api.update_tool(&EntityId::from(4), &patch).await.unwrap_err();
    assert_eq!(refused, ApiError::Rejected("Not enough permissions".into()));
}
