use ninelevel::cleaner::SentenceRecord;
use ninelevel::export::{self, Format};
use ninelevel::{Client, Error, LessonResult, RetryConfig};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lesson() -> LessonResult {
    LessonResult {
        level_id: "1".to_owned(),
        class_id: "2".to_owned(),
        title: "Mwadringadringay su? 你好嗎？".to_owned(),
        data: vec![
            SentenceRecord {
                order: "1".to_owned(),
                dialect: "Sinsi, mwadringadringay su?".to_owned(),
                chinese_translation: "老師，您好嗎？".to_owned(),
            },
            SentenceRecord {
                order: "2".to_owned(),
                dialect: "Mwadringadringay ako.".to_owned(),
                chinese_translation: "我很好。".to_owned(),
            },
        ],
    }
}

async fn get_client(server: &MockServer) -> Client {
    for class in ["1", "2"] {
        Mock::given(method("GET"))
            .and(path("/ninew/php/getTextNew.php"))
            .and(query_param("l", "1"))
            .and(query_param("c", class))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "title": format!("Title {class}"),
                "titleCh": "標題",
                "sentence": [{"order": "1", "chinese": "一", "word": [{"ab": "isa", "ch": "一"}]}]
            })))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/ninew/php/getTextNew.php"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(10)
        .mount(server)
        .await;

    Client::builder()
        .base_url(Url::parse(&format!("{}/ninew/php/", server.uri())).unwrap())
        .retry(RetryConfig::no_retry())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn to_json_test() {
    let dir = tempfile::tempdir().unwrap();
    let path = export::to_json(&lesson(), dir.path(), "霧台魯凱語").await.unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "霧台魯凱語 - Mwadringadringay su? 你好嗎？ (1階2課).json"
    );
    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<SentenceRecord> = serde_json::from_str(&content).unwrap();
    assert_eq!(records, lesson().data);
    assert!(content.contains("老師，您好嗎？"));
}

#[tokio::test]
async fn to_csv_test() {
    let dir = tempfile::tempdir().unwrap();
    let path = export::to_csv(&lesson(), dir.path(), "霧台魯凱語").await.unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "霧台魯凱語 - Mwadringadringay su? 你好嗎？ (1階2課).csv"
    );
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let content = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "order,dialect,chinese_translation");
    assert_eq!(lines[2], "2,Mwadringadringay ako.,我很好。");
}

#[tokio::test]
async fn write_all_creates_dir_test() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let mut second = lesson();
    second.class_id = "3".to_owned();

    let paths = export::write_all(&[lesson(), second], &out, "邵語", Format::Json)
        .await
        .unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("邵語 - Mwadringadringay su? 你好嗎？ (1階2課).json"));
    assert!(paths[1].ends_with("邵語 - Mwadringadringay su? 你好嗎？ (1階3課).json"));
    assert!(paths.iter().all(|p| p.exists()));
}

#[tokio::test]
async fn nine_level_to_csv_test() {
    let server = MockServer::start().await;
    let client = get_client(&server).await;
    let dir = tempfile::tempdir().unwrap();

    let files = client
        .nine_level()
        .dialect("霧台魯凱語")
        .level(1)
        .class(2)
        .build()
        .to_csv(dir.path())
        .await
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("霧台魯凱語 - Title 2 標題 (1階2課).csv"));
}

#[tokio::test]
async fn failed_batch_writes_nothing_test() {
    let server = MockServer::start().await;
    let client = get_client(&server).await;
    let dir = tempfile::tempdir().unwrap();

    // level 1 只有 class 1、2 可以下载，其余返回404
    let err = client
        .nine_level()
        .dialect("霧台魯凱語")
        .level(1)
        .build()
        .to_json(dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RequestAPIFailed { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
