//! Integration tests for the public project types.

use stylepeek_core::{StyleProject, timestamp_now, truncate_link_text};

#[test]
fn test_project_serialization_roundtrip() {
    let project = StyleProject {
        title: "apple.com".into(),
        url: "https://apple.com".into(),
        favicon: Some("https://apple.com/favicon.ico".into()),
        colors: vec!["#000000".into(), "#ffffff".into()],
        type_styles: vec![],
        button_styles: vec![],
        link_styles: vec![],
        created_at: timestamp_now(),
    };
    let json = serde_json::to_string(&project).unwrap();
    let parsed: StyleProject = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, project);
    assert!(parsed.created_at_time().is_some());
}

#[test]
fn test_link_text_truncation() {
    assert_eq!(truncate_link_text(""), "");
    assert!(truncate_link_text(&"x".repeat(40)).ends_with("..."));
}
