use crate::common::{self, SESSION, USER_ID};
use httpmock::Method::{GET, POST};
use igscout::{Enrichment, IgError, SessionToken, Username, details, lookup};
use std::time::Duration;

const SHORT: Duration = Duration::from_millis(50);
const SLOW: Duration = Duration::from_millis(500);

fn is_timeout(outcome: &Enrichment) -> bool {
    matches!(outcome, Enrichment::Failed(IgError::Http(e)) if e.is_timeout())
}

#[tokio::test]
async fn detail_timeout_degrades_to_failed() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path(format!("/mobile/api/v1/users/{USER_ID}/info/"));
        then.status(200)
            .delay(SLOW)
            .header("content-type", "application/json")
            .body(common::fixture("user_info", USER_ID, "json"));
    });

    let client = common::client_with_timeout(&server, SHORT);
    let session = SessionToken::parse(SESSION).unwrap();
    let outcome = details::fetch_details(&client, USER_ID, &session).await;

    assert!(is_timeout(&outcome), "got {outcome:?}");
    assert!(outcome.into_record().is_empty());
}

#[tokio::test]
async fn lookup_timeout_degrades_to_failed() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/mobile/api/v1/users/lookup/");
        then.status(200)
            .delay(SLOW)
            .header("content-type", "application/json")
            .body(common::fixture("lookup", "alice", "json"));
    });

    let client = common::client_with_timeout(&server, SHORT);
    let username = Username::parse("alice").unwrap();
    let outcome = lookup::lookup(&client, &username).await;

    assert!(is_timeout(&outcome), "got {outcome:?}");
    assert!(outcome.into_record().is_empty());
}
