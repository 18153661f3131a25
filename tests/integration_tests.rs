use anyhow::Result;
use giveaway_snapshot::{EtlEngine, EtlError, LocalStorage, SheetConfig, SheetPipeline, Snapshot};
use httpmock::prelude::*;
use tempfile::TempDir;

const SHEET_CSV: &str = "\
Timestamp,Winner Form Link,Winner,Twitch Handle,Discord,Website,Giveaway Item,Giveaway Pictures,Discount Code,Where Item Ships,Shipping Cost
2024-01-01,https://forms.example/1,Alice,alicettv,alice#1234,alice.com,Keyboard,https://img.example/kb.png,SAVE10,USA,5.00
2024-01-02,https://forms.example/2,Bob,bobtv,,bob.dev,,,,,
,,,,,,,,,,
2024-01-03,https://forms.example/3,Carol,,,,\"Mouse, wireless\",,,,
";

fn engine_for(server: &MockServer, temp_dir: &TempDir) -> EtlEngine<SheetPipeline<LocalStorage, SheetConfig>> {
    let config = SheetConfig {
        sheet_id: "test-sheet".to_string(),
        base_url: server.base_url(),
        output_file: "data/giveaways.json".to_string(),
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    EtlEngine::new(SheetPipeline::new(storage, config))
}

#[tokio::test]
async fn test_end_to_end_snapshot_written() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    let export_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/spreadsheets/d/test-sheet/export")
                .query_param("format", "csv");
            then.status(200)
                .header("Content-Type", "text/csv")
                .body(SHEET_CSV);
        })
        .await;

    let output_path = engine_for(&server, &temp_dir).run().await?;
    export_mock.assert_async().await;
    assert_eq!(output_path, "data/giveaways.json");

    let written = std::fs::read_to_string(temp_dir.path().join("data/giveaways.json"))?;
    let value: serde_json::Value = serde_json::from_str(&written)?;
    assert!(value["lastUpdated"].is_string());

    let data = value["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(
        data[0],
        serde_json::json!({
            "winner": "Alice",
            "twitch": "alicettv",
            "discord": "alice#1234",
            "website": "alice.com",
            "giveaway": "Keyboard",
            "discount": "SAVE10",
            "shipsFrom": "USA",
            "shipping": "5.00",
            "pictureUrl": "https://img.example/kb.png"
        })
    );
    assert_eq!(data[1]["winner"], "Carol");
    assert_eq!(data[1]["giveaway"], "Mouse, wireless");
    assert_eq!(data[1]["twitch"], "N/A");

    // indented output
    assert!(written.contains("\n  \"data\": ["));
    Ok(())
}

#[tokio::test]
async fn test_fetch_404_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    let export_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/spreadsheets/d/test-sheet/export");
            then.status(404);
        })
        .await;

    let result = engine_for(&server, &temp_dir).run().await;
    export_mock.assert_async().await;

    assert!(matches!(result, Err(EtlError::FetchError { status: 404 })));
    assert!(!temp_dir.path().join("data").exists());
    Ok(())
}

#[tokio::test]
async fn test_empty_export_keeps_previous_snapshot() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let previous = temp_dir.path().join("data/giveaways.json");
    std::fs::create_dir_all(previous.parent().unwrap())?;
    std::fs::write(&previous, "{\"lastUpdated\":\"old\",\"data\":[]}")?;

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/spreadsheets/d/test-sheet/export");
            then.status(200).body("");
        })
        .await;

    let result = engine_for(&server, &temp_dir).run().await;
    assert!(matches!(result, Err(EtlError::MissingHeaderError)));
    assert_eq!(
        std::fs::read_to_string(&previous)?,
        "{\"lastUpdated\":\"old\",\"data\":[]}"
    );
    Ok(())
}

#[tokio::test]
async fn test_rerun_replaces_prior_snapshot() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    let mut first = server
        .mock_async(|when, then| {
            when.method(GET).path("/spreadsheets/d/test-sheet/export");
            then.status(200).body(SHEET_CSV);
        })
        .await;

    let engine = engine_for(&server, &temp_dir);
    engine.run().await?;
    first.delete_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/spreadsheets/d/test-sheet/export");
            then.status(200).body("Winner,Giveaway\nDana,Webcam\n");
        })
        .await;
    engine.run().await?;

    let written = std::fs::read_to_string(temp_dir.path().join("data/giveaways.json"))?;
    let snapshot: Snapshot = serde_json::from_str(&written)?;
    assert_eq!(snapshot.data.len(), 1);
    assert_eq!(snapshot.data[0].winner, "Dana");
    assert_eq!(snapshot.data[0].shipping, "N/A");
    Ok(())
}

#[tokio::test]
async fn test_preview_does_not_touch_storage() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/spreadsheets/d/test-sheet/export");
            then.status(200).body(SHEET_CSV);
        })
        .await;

    let result = engine_for(&server, &temp_dir).preview().await?;
    assert_eq!(result.records.len(), 2);
    assert!(!temp_dir.path().join("data").exists());
    Ok(())
}
