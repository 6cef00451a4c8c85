use crate::common::{self, USER_ID};
use httpmock::Method::GET;
use igscout::{IgError, ResolvePreference, resolve};

#[tokio::test]
async fn api_returns_id_and_web_profile() {
    let server = common::setup_server();
    let api = common::mock_web_profile_info(&server, "alice");
    let page = common::mock_profile_page(&server, "alice");

    let client = common::client_for(&server);
    let resolved = resolve::resolve(&client, &common::creds("alice")).await.unwrap();

    api.assert();
    page.assert_calls(0);
    assert_eq!(resolved.user_id, USER_ID);

    let web = resolved.web_profile.expect("web profile");
    assert_eq!(web.text("username").as_deref(), Some("alice"));
    assert_eq!(web.text("biography").as_deref(), Some("café ☕ & code"));
}

#[tokio::test]
async fn api_sends_browser_headers_and_referer() {
    let server = common::setup_server();
    let api = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/users/web_profile_info/")
            .query_param("username", "alice")
            .header("referer", format!("{}/alice/", server.base_url()))
            .header("x-requested-with", "XMLHttpRequest")
            .header("sec-fetch-site", "same-origin")
            .header("x-asbd-id", "129477");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"user":{"id":"42","username":"alice"}}}"#);
    });

    let client = common::client_with(&server, ResolvePreference::ApiOnly);
    let resolved = resolve::resolve(&client, &common::creds("@alice")).await.unwrap();

    api.assert();
    assert_eq!(resolved.user_id, "42");
}

#[tokio::test]
async fn numeric_id_in_api_reply_is_accepted() {
    let server = common::setup_server();
    let api = server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/web_profile_info/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"user":{"id":987,"username":"bob"}}}"#);
    });

    let client = common::client_with(&server, ResolvePreference::ApiOnly);
    let resolved = resolve::resolve(&client, &common::creds("bob")).await.unwrap();

    api.assert();
    assert_eq!(resolved.user_id, "987");
}

#[tokio::test]
async fn api_only_failure_is_a_resolution_error() {
    let server = common::setup_server();
    let api = server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/web_profile_info/");
        then.status(401).body(r#"{"message":"login_required"}"#);
    });
    let page = common::mock_profile_page(&server, "alice");

    let client = common::client_with(&server, ResolvePreference::ApiOnly);
    let err = resolve::resolve(&client, &common::creds("alice")).await.unwrap_err();

    api.assert();
    page.assert_calls(0);
    match err {
        IgError::Resolution(msg) => assert_eq!(msg, "could not determine user id"),
        other => panic!("expected Resolution error, got {other:?}"),
    }
}
