//! End-to-end resolve flow against a mock releases endpoint.

use mockito::{Matcher, Server};
use tempfile::TempDir;

use release_lens::release::api::SentryApi;
use release_lens::release::resolver::{Resolution, apply_settings, resolve_latest};
use release_lens::settings::store::{
    KEY_FILTER_LATEST, KEY_LATEST_RELEASE_VALUE, KEY_OFFICIAL_PACKAGE_NAME, KEY_SENTRY_API_KEY,
    SettingsStore,
};
use release_lens::settings::update::update_channel;

const PAGE_URL: &str = "https://team-se.sentry.io/explore/releases/?project=123";

fn create_store() -> (TempDir, SettingsStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = SettingsStore::new(&temp_dir.path().join("settings.db")).unwrap();
    (temp_dir, store)
}

#[tokio::test]
async fn resolves_the_latest_official_release_from_the_endpoint() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/0/projects/team-se/123/releases/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"version": "1.0.0", "versionInfo": {"com.example.real": {}}},
                {"version": "2.4.0", "versionInfo": {"cool.supper.app.bogus": {}}},
                {"version": "1.5.0", "versionInfo": {"com.example.real": {}}},
                {"version": "1.5.0-rc.1", "versionInfo": {"com.example.real": {}}}
            ]"#,
        )
        .create_async()
        .await;

    let (_temp_dir, store) = create_store();
    store.set_raw(KEY_OFFICIAL_PACKAGE_NAME, "com.example.real").unwrap();
    store.set_raw(KEY_SENTRY_API_KEY, "token-1").unwrap();

    let api = SentryApi::new(&server.url(), "team-se");
    let resolution = resolve_latest(&api, &store, PAGE_URL).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resolution, Resolution::Latest("1.5.0".to_string()));
}

#[tokio::test]
async fn an_endpoint_failure_degrades_to_fetch_failed() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/0/projects/team-se/123/releases/")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let (_temp_dir, store) = create_store();
    store.set_raw(KEY_SENTRY_API_KEY, "token-1").unwrap();

    let api = SentryApi::new(&server.url(), "team-se");
    let resolution = resolve_latest(&api, &store, PAGE_URL).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resolution, Resolution::FetchFailed);
}

#[tokio::test]
async fn resolved_value_can_be_applied_and_read_back() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/api/0/projects/team-se/123/releases/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"version": "3.1.0", "versionInfo": {"com.example.webviewapp": {}}}]"#)
        .create_async()
        .await;

    let (_temp_dir, store) = create_store();
    store.set_raw(KEY_SENTRY_API_KEY, "token-1").unwrap();

    let api = SentryApi::new(&server.url(), "team-se");
    let Resolution::Latest(version) = resolve_latest(&api, &store, PAGE_URL).await.unwrap() else {
        panic!("expected a resolved version");
    };

    let (updates, mut updates_rx) = update_channel();
    apply_settings(&store, &updates, Some(version), true).unwrap();

    assert_eq!(
        store.get_raw(KEY_LATEST_RELEASE_VALUE).unwrap(),
        Some("3.1.0".to_string())
    );
    assert_eq!(store.get_raw(KEY_FILTER_LATEST).unwrap(), Some("true".to_string()));
    assert!(updates_rx.try_recv().is_ok());
}
