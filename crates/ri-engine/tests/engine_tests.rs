//! End-to-end tests for the RI engine.
//!
//! These exercise the whole surface together over one realistic schema:
//! build → parse round-trips, wildcard matching, ancestor navigation,
//! parameter extraction, and authorization consistency, plus the graceful
//! handling of malformed and hostile input.

use ri_engine::{InvalidRi, MatchOptions, RiEngine, RiPart};
use ri_schema::{ResourceSchema, SchemaNode};

const USER_ID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
const POST_ID: &str = "01BX5ZZKBKACTAV9WEVGEMMVRZ";

/// Schema shared by all tests: users own posts, posts own comments, and
/// reports stand alone at the top level.
fn fixture() -> RiEngine {
    let schema = ResourceSchema::new()
        .resource(
            "user",
            SchemaNode::new()
                .action("read", "View a user profile")
                .action("update", "Edit a user profile")
                .child(
                    "post",
                    SchemaNode::new()
                        .action("read", "View a post")
                        .action("delete", "Delete a post")
                        .child(
                            "comment",
                            SchemaNode::new().action("moderate", "Moderate a comment"),
                        ),
                ),
        )
        .resource(
            "report",
            SchemaNode::new().action("export", "Export a report"),
        );
    RiEngine::new("app", schema).unwrap()
}

#[test]
fn built_ris_parse_back_to_the_same_parts() {
    let engine = fixture();
    let built = engine
        .build()
        .step("user", Some(USER_ID))
        .unwrap()
        .step("post", Some(POST_ID))
        .unwrap()
        .step("comment", None)
        .unwrap();

    let parsed = engine.parse(&built.to_ri()).unwrap();
    assert_eq!(parsed.parts, built.parts());
    assert_eq!(parsed.actions, vec!["moderate"]);
}

#[test]
fn formatting_a_valid_parse_reproduces_the_input() {
    let engine = fixture();
    for ri in [
        "ri:app".to_string(),
        "ri:app:user".to_string(),
        format!("ri:app:user:{USER_ID}"),
        format!("ri:app:user:*:post:{POST_ID}:comment"),
    ] {
        let parsed = engine.parse(&ri).unwrap();
        assert_eq!(engine.format_ri(&parsed.parts), ri);
    }
}

#[test]
fn builder_and_parser_agree_on_actions() {
    let engine = fixture();
    let post = engine
        .build()
        .step("user", Some("*"))
        .unwrap()
        .step("post", None)
        .unwrap();

    let parsed = engine.parse(&post.to_ri()).unwrap();
    assert_eq!(post.actions(), parsed.actions);
}

#[test]
fn wildcard_matching_is_asymmetric() {
    let engine = fixture();
    let concrete = format!("ri:app:user:{USER_ID}");

    assert!(engine.matches("ri:app:user:*", &concrete, MatchOptions::default()));
    assert!(!engine.matches(&concrete, "ri:app:user:*", MatchOptions::default()));
}

#[test]
fn prefix_matching_covers_descendants() {
    let engine = fixture();
    let deep = format!("ri:app:user:{USER_ID}:post:{POST_ID}:comment");

    assert!(!engine.matches("ri:app:user:*", &deep, MatchOptions::default()));
    assert!(engine.matches("ri:app:user:*", &deep, MatchOptions::prefix()));
    assert!(engine.matches(&format!("ri:app:user:{USER_ID}:post"), &deep, MatchOptions::prefix()));
    assert!(!engine.matches("ri:app:report", &deep, MatchOptions::prefix()));
}

#[test]
fn ancestors_are_resource_bearing_prefixes_nearest_first() {
    let engine = fixture();
    let ri = format!("ri:app:user:{USER_ID}:post:{POST_ID}");
    assert_eq!(
        engine.ancestors(&ri),
        vec![format!("ri:app:user:{USER_ID}")]
    );

    let deeper = format!("{ri}:comment");
    assert_eq!(
        engine.ancestors(&deeper),
        vec![ri.clone(), format!("ri:app:user:{USER_ID}")]
    );

    // Every ancestor is itself a valid RI and the parent chain agrees.
    assert_eq!(engine.parent(&deeper).as_deref(), Some(ri.as_str()));
    for ancestor in engine.ancestors(&deeper) {
        assert!(engine.validate(&ancestor), "invalid ancestor: {ancestor}");
    }
}

#[test]
fn params_map_types_to_ids() {
    let engine = fixture();
    let params = engine.extract_params(&format!("ri:app:user:{USER_ID}:post:{POST_ID}:comment"));
    assert_eq!(params.get("user").map(String::as_str), Some(USER_ID));
    assert_eq!(params.get("post").map(String::as_str), Some(POST_ID));
    assert!(params.get("comment").is_none());
}

#[test]
fn authorize_throws_exactly_when_can_is_false() {
    let engine = fixture();
    let ris = [
        "ri:app".to_string(),
        "ri:app:user".to_string(),
        format!("ri:app:user:{USER_ID}"),
        "ri:app:user:*:post".to_string(),
        "ri:app:report".to_string(),
        "ri:app:bogus".to_string(),
        "not an ri at all".to_string(),
    ];
    let actions = ["read", "update", "delete", "moderate", "export", "admin"];

    for ri in &ris {
        for action in actions {
            let can = engine.can(ri, action);
            let authorized = engine.authorize(ri, action);
            assert_eq!(
                authorized.is_ok(),
                can,
                "authorize/can disagree for ({ri}, {action})"
            );
            if let Err(err) = authorized {
                assert_eq!(err.action, action);
                assert_eq!(&err.ri, ri);
            }
        }
    }
}

#[test]
fn invalid_input_is_reported_never_panicking() {
    let engine = fixture();

    let invalid = engine.parse("ri:app:bogus").unwrap_err();
    assert!(!invalid.message.is_empty());
    assert!(invalid.parts.is_empty());

    // Partial recognition: the valid prefix is kept.
    let invalid = engine
        .parse(&format!("ri:app:user:{USER_ID}:bogus"))
        .unwrap_err();
    assert_eq!(invalid.parts, vec![RiPart::with_id("user", USER_ID)]);

    // Hostile inputs just come back invalid.
    let long = "ri:app:user:".repeat(1000);
    for input in [
        "",
        ":::::::",
        "ri:app:user:\u{0}",
        "ri:app:user:01ARZ3NDEKTSV4RRFFQ69G5FAL",
        long.as_str(),
    ] {
        assert!(engine.parse(input).is_err());
        assert!(!engine.validate(input));
        assert!(engine.ancestors(input).is_empty());
        assert!(engine.extract_params(input).is_empty());
        assert_eq!(engine.parent(input), None);
    }
}

#[test]
fn reserved_schema_names_fail_construction() {
    let bad = ResourceSchema::new().resource(
        "user",
        SchemaNode::new().child("getActions", SchemaNode::new()),
    );
    assert!(RiEngine::new("app", bad).is_err());
}

#[test]
fn engine_from_json_schema_behaves_like_coded_schema() {
    let json = r#"{
        "user": {
            "actions": {
                "read": { "name": "read", "description": "View a user profile" }
            },
            "child": {
                "post": {
                    "actions": {
                        "delete": { "name": "delete", "description": "Delete a post" }
                    }
                }
            }
        }
    }"#;
    let schema: ResourceSchema = serde_json::from_str(json).unwrap();
    let engine = RiEngine::new("app", schema).unwrap();

    assert!(engine.can("ri:app:user", "read"));
    assert!(engine.can("ri:app:user:*:post", "delete"));
    assert!(!engine.can("ri:app:post", "delete"));
}

#[test]
fn parse_results_serialize_for_diagnostics() {
    let engine = fixture();

    let parsed = engine.parse("ri:app:user").unwrap();
    let json = serde_json::to_string(&parsed).unwrap();
    assert!(json.contains("\"user\""));

    let invalid: InvalidRi = engine.parse("ri:app:bogus").unwrap_err();
    let json = serde_json::to_string(&invalid).unwrap();
    assert!(json.contains("bogus"));
}

#[test]
fn shared_engine_across_threads() {
    let engine = std::sync::Arc::new(fixture());
    let mut handles = Vec::new();
    for _ in 0..4 {
        let engine = std::sync::Arc::clone(&engine);
        handles.push(std::thread::spawn(move || {
            let ri = engine.build().step("user", Some(USER_ID)).unwrap().to_ri();
            assert!(engine.can(&ri, "read"));
            assert!(engine.matches("ri:app:user:*", &ri, MatchOptions::default()));
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
