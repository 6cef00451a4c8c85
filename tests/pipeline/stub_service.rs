use igscout::core::BoxFuture;
use igscout::{
    Credentials, Enrichment, IgError, Investigator, Pacing, ProfileRecord, ProfileService,
    Resolved, Session, SessionToken, Stage, Username, export,
};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::time::Instant;

/// Canned sources standing in for the three upstream calls.
struct Canned {
    resolved: Option<Resolved>,
    details: fn() -> Enrichment,
    lookup: fn() -> Enrichment,
}

impl ProfileService for Canned {
    fn resolve<'a>(&'a self, _creds: &'a Credentials) -> BoxFuture<'a, Result<Resolved, IgError>> {
        let out = self
            .resolved
            .clone()
            .ok_or_else(|| IgError::Resolution("could not determine user id".into()));
        Box::pin(async move { out })
    }

    fn details<'a>(&'a self, _id: &'a str, _s: &'a SessionToken) -> BoxFuture<'a, Enrichment> {
        let out = (self.details)();
        Box::pin(async move { out })
    }

    fn lookup<'a>(&'a self, _u: &'a Username) -> BoxFuture<'a, Enrichment> {
        let out = (self.lookup)();
        Box::pin(async move { out })
    }
}

fn rec(v: Value) -> ProfileRecord {
    ProfileRecord::from_value(v).unwrap()
}

fn alice() -> Credentials {
    Credentials::parse("alice", "sess").unwrap()
}

fn scenario() -> Canned {
    Canned {
        resolved: Some(Resolved {
            user_id: "123".into(),
            web_profile: None,
        }),
        details: || Enrichment::Found(rec(json!({"username": "alice", "follower_count": 10}))),
        lookup: || Enrichment::Found(rec(json!({"is_verified": true}))),
    }
}

#[tokio::test]
async fn merged_record_and_csv_rows_follow_merge_order() {
    let investigator = Investigator::new(scenario()).pacing(Pacing::none());
    let merged = investigator.run(&alice()).await.unwrap();

    assert_eq!(
        Value::Object(merged.clone().into_inner()),
        json!({"userID": "123", "username": "alice", "follower_count": 10, "is_verified": true})
    );

    let mut buf = Vec::new();
    export::write_csv(&merged, &mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(
        rows,
        [
            "field,value",
            "userID,123",
            "username,alice",
            "follower_count,10",
            "is_verified,True",
        ]
    );
}

#[tokio::test]
async fn stages_are_reported_in_order() {
    let investigator = Investigator::new(scenario()).pacing(Pacing::none());
    let mut seen = Vec::new();
    investigator
        .run_with(&alice(), |s| seen.push(s))
        .await
        .unwrap();

    assert_eq!(
        seen,
        [
            Stage::ResolvingId,
            Stage::Resolved {
                user_id: "123".into()
            },
            Stage::FetchingDetails,
            Stage::LookingUp,
        ]
    );
}

#[tokio::test]
async fn enrichment_failures_degrade_to_web_profile() {
    let service = Canned {
        resolved: Some(Resolved {
            user_id: "123".into(),
            web_profile: Some(rec(json!({"id": "123", "username": "alice", "is_private": true}))),
        }),
        details: || Enrichment::Failed(IgError::Data("boom".into())),
        lookup: || Enrichment::Missing,
    };
    let merged = Investigator::new(service)
        .pacing(Pacing::none())
        .run(&alice())
        .await
        .unwrap();

    assert_eq!(merged.text("username").as_deref(), Some("alice"));
    assert_eq!(merged.text("userID").as_deref(), Some("123"));
    assert!(merged.flag("is_private"));
}

#[tokio::test]
async fn resolution_failure_aborts_and_keeps_previous_result() {
    let mut session = Session::new(Investigator::new(scenario()).pacing(Pacing::none()));
    session.investigate(&alice(), |_| {}).await.unwrap();
    let before = session.last().cloned().unwrap();

    let mut failing = Session::new(
        Investigator::new(Canned {
            resolved: None,
            details: || panic!("details must not run after a resolution failure"),
            lookup: || panic!("lookup must not run after a resolution failure"),
        })
        .pacing(Pacing::none()),
    );
    let mut stages = Vec::new();
    let err = failing
        .investigate(&alice(), |s| stages.push(s))
        .await
        .unwrap_err();

    assert!(matches!(err, IgError::Resolution(_)));
    assert_eq!(stages, [Stage::ResolvingId]);
    assert!(failing.last().is_none());
    assert!(matches!(
        failing.export_last(igscout::ExportFormat::Json, None),
        Err(IgError::NoInvestigation)
    ));

    assert_eq!(session.last(), Some(&before));
}

#[tokio::test(start_paused = true)]
async fn default_pacing_pauses_between_calls() {
    let investigator = Investigator::new(scenario());
    assert_eq!(
        Pacing::default(),
        Pacing {
            after_resolve: Duration::from_secs(2),
            after_details: Duration::from_secs(1),
        }
    );

    let start = Instant::now();
    let mut marks = Vec::new();
    investigator
        .run_with(&alice(), |s| marks.push((s, start.elapsed())))
        .await
        .unwrap();
    let total = start.elapsed();

    let at = |stage: &Stage| marks.iter().find(|(s, _)| s == stage).map(|(_, t)| *t).unwrap();
    let resolved = at(&Stage::Resolved { user_id: "123".into() });
    let fetching = at(&Stage::FetchingDetails);
    let looking = at(&Stage::LookingUp);

    assert_eq!(fetching - resolved, Duration::from_secs(2));
    assert_eq!(looking - fetching, Duration::from_secs(1));
    assert_eq!(total, Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn no_pacing_does_not_advance_the_clock() {
    let investigator = Investigator::new(scenario()).pacing(Pacing::none());
    let start = Instant::now();
    investigator.run(&alice()).await.unwrap();
    assert_eq!(start.elapsed(), Duration::ZERO);
}
