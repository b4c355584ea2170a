//! Integration tests: service + real adapters.

use lwc_adapters::{LocalFilesystem, MANIFEST_FILE, ManifestExecutor, MemoryExecutor};
use lwc_core::prelude::*;

#[tokio::test]
async fn service_dispatches_exactly_once() {
    let executor = MemoryExecutor::new();
    let service = ScaffoldService::new(Box::new(executor.clone()));

    let raw = RawInput::new()
        .with_name("once")
        .with_type_csv("cordova-android")
        .silent(true);
    service.scaffold(&raw).await.unwrap();

    let received = executor.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name(), "once");
    assert_eq!(received[0].resolved_type(), ResolvedType::Cordova);
}

#[tokio::test]
async fn rejected_input_leaves_executor_untouched() {
    let executor = MemoryExecutor::new();
    let service = ScaffoldService::new(Box::new(executor.clone()));

    let raw = RawInput::new().with_options_csv("yarn");
    let err = service.scaffold(&raw).await.unwrap_err();

    assert!(matches!(
        err,
        LwcError::Validation(ValidationFailure::NoSilentWithOptions)
    ));
    assert!(executor.received().is_empty());
}

#[tokio::test]
async fn executor_error_surfaces_from_dispatch() {
    let executor = MemoryExecutor::failing("generator crashed");
    let service = ScaffoldService::new(Box::new(executor.clone()));

    let request = service.prepare(&RawInput::new()).unwrap();
    let err = service.dispatch(request).await.unwrap_err();

    assert!(err.to_string().contains("generator crashed"));
    assert_eq!(executor.received().len(), 1);
}

#[tokio::test]
async fn manifest_lands_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(ManifestExecutor::new(
        LocalFilesystem::new(),
        dir.path(),
    )));

    let raw = RawInput::new()
        .with_name("disk-app")
        .with_options_csv("typescript,express")
        .with_type_csv("pwa")
        .silent(true);
    service.scaffold(&raw).await.unwrap();

    let manifest = std::fs::read_to_string(dir.path().join("disk-app").join(MANIFEST_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(value["request"]["type"], "pwa");
    assert_eq!(
        value["request"]["options"],
        serde_json::json!(["typescript", "express"])
    );
    assert_eq!(value["request"]["silent"], true);
}
