//! Persistence round-trip and edge case tests.
//!
//! Tests file I/O, the project collection on disk, and settings round-trip.

use std::path::PathBuf;
use tempfile::TempDir;

use stylepeek_core::{
    ButtonStyle, CoreError, LinkStyle, ProjectRepository, StyleProject, TypeStyle, TypeTag,
};
use stylepeek_fetch::ProxyEndpoint;

use crate::error::StoreError;
use crate::persistence::{ensure_dir, load_json, load_json_or_default, save_json};
use crate::project_store::ProjectStore;
use crate::settings_store::{LogLevel, Settings, SettingsStore};

fn project(title: &str, created_at: &str) -> StyleProject {
    StyleProject {
        title: title.to_string(),
        url: format!("https://{}.test", title.to_lowercase()),
        favicon: Some(format!("https://{}.test/favicon.ico", title.to_lowercase())),
        colors: vec!["#0f172a".into(), "rgba(0, 0, 0, 0.5)".into()],
        type_styles: vec![TypeStyle {
            tag: TypeTag::H1,
            text: "Main Heading Text".into(),
            actual_text: format!("Welcome to {title}"),
            font_size: "36px".into(),
            font_family: "system-ui, -apple-system, sans-serif".into(),
            font_weight: "800".into(),
            line_height: "1.1".into(),
            color: "#000000".into(),
            text_transform: "none".into(),
            letter_spacing: "normal".into(),
            text_decoration: "none".into(),
            class_name: Some("hero".into()),
        }],
        button_styles: vec![ButtonStyle {
            text: "Go".into(),
            background_color: "#3b82f6".into(),
            color: "#ffffff".into(),
            border: "none".into(),
            border_radius: "6px".into(),
            padding: "10px 20px".into(),
            font_size: "14px".into(),
            font_family: "system-ui, -apple-system, sans-serif".into(),
            font_weight: "500".into(),
            text_transform: "none".into(),
            box_shadow: "none".into(),
            letter_spacing: "normal".into(),
            cursor: "pointer".into(),
        }],
        link_styles: vec![LinkStyle {
            text: "About".into(),
            color: "#3b82f6".into(),
            text_decoration: "underline".into(),
            font_size: "14px".into(),
            font_weight: "500".into(),
        }],
        created_at: created_at.to_string(),
    }
}

// ============================================================================
// JSON Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("deeply").join("nested").join("test.json");

    save_json(&nested_path, &serde_json::json!({"key": "value"}))
        .await
        .unwrap();
    assert!(nested_path.exists());
    assert!(!nested_path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn test_load_nonexistent_file() {
    let file_path = PathBuf::from("/nonexistent/path/settings.json");
    let result: Result<Settings, _> = load_json(&file_path).await;
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[tokio::test]
async fn test_load_or_default_on_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let settings: Settings = load_json_or_default(&path).await;
    assert_eq!(settings, Settings::default());
}

#[tokio::test]
async fn test_ensure_dir_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let dir_path = temp_dir.path().join("test_dir");

    ensure_dir(&dir_path).await.unwrap();
    ensure_dir(&dir_path).await.unwrap();
    assert!(dir_path.is_dir());
}

// ============================================================================
// Project Store Tests
// ============================================================================

#[tokio::test]
async fn test_missing_file_is_empty_collection() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::load(temp_dir.path().join("projects.json"))
        .await
        .unwrap();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");
    tokio::fs::write(&path, "[{\"title\": 1}]").await.unwrap();

    let result = ProjectStore::load(path).await;
    assert!(matches!(result, Err(StoreError::Serialization(_))));
}

#[tokio::test]
async fn test_insert_prepends_and_persists() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");
    let store = ProjectStore::new(path.clone());

    store.insert(project("Alpha", "2024-01-15T10:00:00.000Z")).await.unwrap();
    store.insert(project("Beta", "2024-01-15T11:00:00.000Z")).await.unwrap();

    let titles: Vec<String> = store.all().await.into_iter().map(|p| p.title).collect();
    assert_eq!(titles, ["Beta", "Alpha"]);

    let reloaded = ProjectStore::load(path).await.unwrap();
    assert_eq!(reloaded.all().await, store.all().await);
}

#[tokio::test]
async fn test_file_roundtrip_is_field_for_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");
    let original = project("Gamma", "2024-02-01T08:30:00.250Z");

    let store = ProjectStore::new(path.clone());
    store.insert(original.clone()).await.unwrap();

    let reloaded = ProjectStore::load(path.clone()).await.unwrap();
    assert_eq!(reloaded.find("2024-02-01T08:30:00.250Z").await, Some(original));

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(raw.contains("\"typeStyles\""));
    assert!(raw.contains("\"createdAt\": \"2024-02-01T08:30:00.250Z\""));
}

#[tokio::test]
async fn test_duplicate_created_at_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path().join("projects.json"));

    store.insert(project("Alpha", "2024-01-15T10:00:00.000Z")).await.unwrap();
    let err = store
        .insert(project("Other", "2024-01-15T10:00:00.000Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateProject(_)));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_delete_by_created_at() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("projects.json");
    let store = ProjectStore::new(path.clone());

    store.insert(project("Alpha", "2024-01-15T10:00:00.000Z")).await.unwrap();
    store.insert(project("Beta", "2024-01-15T11:00:00.000Z")).await.unwrap();

    assert!(store.delete("2024-01-15T10:00:00.000Z").await.unwrap());
    assert!(!store.delete("2024-01-15T10:00:00.000Z").await.unwrap());

    let reloaded = ProjectStore::load(path).await.unwrap();
    let titles: Vec<String> = reloaded.all().await.into_iter().map(|p| p.title).collect();
    assert_eq!(titles, ["Beta"]);
}

#[tokio::test]
async fn test_repository_trait() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProjectStore::new(temp_dir.path().join("projects.json"));

    ProjectRepository::add(&store, project("Alpha", "2024-01-15T10:00:00.000Z"))
        .await
        .unwrap();
    let err = ProjectRepository::add(&store, project("Alpha", "2024-01-15T10:00:00.000Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::DuplicateProject(_)));

    assert_eq!(ProjectRepository::list(&store).await.len(), 1);
    assert!(ProjectRepository::get(&store, "2024-01-15T10:00:00.000Z").await.is_some());
    assert!(ProjectRepository::remove(&store, "2024-01-15T10:00:00.000Z").await.unwrap());
    assert!(ProjectRepository::get(&store, "2024-01-15T10:00:00.000Z").await.is_none());
}

// ============================================================================
// Settings Round-Trip Tests
// ============================================================================

#[tokio::test]
async fn test_settings_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let store = SettingsStore::new(path.clone());
    store
        .update(|s| {
            s.proxies = vec![ProxyEndpoint::named("local", "http://127.0.0.1:9000/?u={url}")];
            s.request_timeout_secs = 3;
            s.log_level = LogLevel::Debug;
            s.auto_save = false;
        })
        .await;
    store.save().await.unwrap();

    let loaded = SettingsStore::load(path).await;
    assert_eq!(loaded.get().await, store.get().await);
}

#[tokio::test]
async fn test_settings_partial_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    tokio::fs::write(&path, r#"{"auto_save": false}"#).await.unwrap();

    let settings = SettingsStore::load(path).await.get().await;
    assert!(!settings.auto_save);
    assert_eq!(settings.proxies.len(), 3);
    assert_eq!(settings.request_timeout_secs, 10);
}

#[tokio::test]
async fn test_settings_invalid_file_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    tokio::fs::write(&path, r#"{"request_timeout_secs": 0}"#).await.unwrap();

    let settings = SettingsStore::load(path).await.get().await;
    assert_eq!(settings, Settings::default());
}
