use igscout::investigate::tag_user_id;
use igscout::{ProfileRecord, merge};
use serde_json::{Value, json};

fn rec(v: Value) -> ProfileRecord {
    ProfileRecord::from_value(v).unwrap()
}

#[test]
fn lookup_beats_detail_beats_web() {
    let web = rec(json!({"k": "web", "only_web": 1, "shared_wd": "web"}));
    let detail = rec(json!({"k": "detail", "shared_wd": "detail", "only_detail": true}));
    let lookup = rec(json!({"k": "lookup", "only_lookup": null}));

    let merged = merge(web, detail, lookup);

    assert_eq!(merged.get("k"), Some(&json!("lookup")));
    assert_eq!(merged.get("shared_wd"), Some(&json!("detail")));
    assert_eq!(merged.get("only_web"), Some(&json!(1)));
    assert_eq!(merged.get("only_detail"), Some(&json!(true)));
    assert_eq!(merged.get("only_lookup"), Some(&Value::Null));
}

#[test]
fn detail_wins_when_lookup_lacks_the_key() {
    let merged = merge(
        rec(json!({"full_name": "Web Name"})),
        rec(json!({"full_name": "Detail Name"})),
        ProfileRecord::new(),
    );
    assert_eq!(merged.text("full_name").as_deref(), Some("Detail Name"));
}

#[test]
fn web_value_survives_empty_enrichment() {
    let merged = merge(
        rec(json!({"username": "alice"})),
        ProfileRecord::new(),
        ProfileRecord::new(),
    );
    assert_eq!(merged.text("username").as_deref(), Some("alice"));
    assert_eq!(merged.len(), 1);
}

#[test]
fn overridden_keys_keep_first_position() {
    let merged = merge(
        rec(json!({"a": 1, "b": 2})),
        rec(json!({"c": 3, "a": 10})),
        rec(json!({"b": 20, "d": 4})),
    );
    let keys: Vec<&str> = merged.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["a", "b", "c", "d"]);
    assert_eq!(merged.get("a"), Some(&json!(10)));
    assert_eq!(merged.get("b"), Some(&json!(20)));
}

#[test]
fn user_id_tag_leads_and_overrides_echo() {
    let tagged = tag_user_id(rec(json!({"username": "alice", "userID": "stale"})), "123");
    let keys: Vec<&str> = tagged.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["userID", "username"]);
    assert_eq!(tagged.text("userID").as_deref(), Some("123"));

    let bare = tag_user_id(ProfileRecord::new(), "123");
    assert_eq!(bare.len(), 1);
}
