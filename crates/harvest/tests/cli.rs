// ABOUTME: Integration tests for the parse-names, parse-quotes and parse-words binaries.
// ABOUTME: Serves pages from a mock server through a temporary source catalogue and checks the JSON output.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn bin(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

fn write_catalog(dir: &Path, catalog: Value) -> std::path::PathBuf {
    let path = dir.join("catalog.json");
    fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn html_page<'a>(server: &'a MockServer, path: &str, body: &str) -> httpmock::Mock<'a> {
    let body = body.to_string();
    let path = path.to_string();
    server.mock(move |when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    })
}

#[test]
fn names_are_split_by_gender() {
    let server = MockServer::start();
    let list = html_page(
        &server,
        "/list",
        r#"<html><body>
            <ul class="женские"><li>Анна</li><li>ольга</li></ul>
            <ul class="мужские"><li>Пётр</li><li>Саша</li></ul>
        </body></html>"#,
    );
    let text = html_page(
        &server,
        "/text",
        "<html><body><p>Ещё встречаются Антон и Мария.</p></body></html>",
    );

    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(
        temp.path(),
        json!({"names": {
            "summary": ["Тестовый список"],
            "sources": [
                {"url": server.url("/list"), "label": "test", "strategy": {"type": "name_list"}},
                {"url": server.url("/text"), "label": "test", "strategy": {"type": "name_text"}}
            ]
        }}),
    );
    let out = temp.path().join("data").join("parsed_names.json");

    bin("parse-names")
        .arg("--sources")
        .arg(&catalog)
        .arg("--delay-ms")
        .arg("0")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("total names:"));

    list.assert();
    text.assert();

    let data = read_json(&out);
    let male: Vec<&str> = data["maleNames"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    let female: Vec<&str> = data["femaleNames"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    assert!(male.contains(&"Пётр"));
    assert!(male.contains(&"Саша"));
    assert!(male.contains(&"Антон"));
    assert!(female.contains(&"Анна"));
    assert!(female.contains(&"Ольга"));
    assert!(female.contains(&"Мария"));
    assert_eq!(data["totalNames"], male.len() + female.len());
    assert_eq!(data["sources"], json!(["Тестовый список"]));
    assert_eq!(data["lastUpdated"].as_str().unwrap().len(), 19);
}

#[test]
fn quotes_from_selector_pairs_and_failed_sources_are_skipped() {
    let server = MockServer::start();
    html_page(
        &server,
        "/random",
        r#"<html><body>
            <div class="quote-text">«Не ошибается тот, кто ничего не делает.»</div>
            <div class="quote-author">Народная мудрость</div>
            <div class="quote-text">Не ошибается тот, кто ничего не делает.</div>
            <div class="quote-text">Коротко.</div>
        </body></html>"#,
    );
    let broken = server.mock(|when, then| {
        when.method(GET).path("/down");
        then.status(503);
    });

    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(
        temp.path(),
        json!({"quotes": {
            "summary": ["Открытые источники"],
            "sources": [
                {"url": server.url("/down"), "label": "down", "strategy": {"type": "quote_blocks"}},
                {"url": server.url("/random"), "label": "Открытые источники",
                 "strategy": {"type": "quote_pairs", "quote": ".quote-text", "author": ".quote-author"}}
            ]
        }}),
    );
    let out = temp.path().join("parsed_quotes.json");

    bin("parse-quotes")
        .args(["--delay-ms", "0", "--log-level", "warn"])
        .arg("--sources")
        .arg(&catalog)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("quotes: 1"))
        .stderr(predicate::str::contains("skipping source"));

    broken.assert();

    let data = read_json(&out);
    assert_eq!(data["totalQuotes"], 1);
    assert_eq!(
        data["quotes"][0],
        json!({
            "text": "Не ошибается тот, кто ничего не делает.",
            "author": "Народная мудрость",
            "source": "Открытые источники"
        })
    );
}

#[test]
fn words_without_common_list() {
    let server = MockServer::start();
    html_page(
        &server,
        "/all",
        r#"<html><body>
            <a href="/wiki/%D0%BB%D0%B5%D1%81">Лес</a>
            <span>Хлеб</span>
            <span>Поиск</span>
            <div>два слова</div>
        </body></html>"#,
    );

    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(
        temp.path(),
        json!({"words": {
            "summary": ["Викисловарь"],
            "sources": [
                {"url": server.url("/all"), "strategy": {"type": "word_tokens"}, "delay_ms": 0}
            ]
        }}),
    );
    let out = temp.path().join("parsed_words.json");

    bin("parse-words")
        .arg("--skip-common")
        .arg("--sources")
        .arg(&catalog)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("words: 2"))
        .stdout(predicate::str::contains("categories: 13"));

    let data = read_json(&out);
    assert_eq!(data["words"], json!(["лес", "хлеб"]));
    assert_eq!(data["categorizedWords"]["nature"], json!(["лес"]));
    assert_eq!(data["categorizedWords"]["food"], json!(["хлеб"]));
    let keys: Vec<&String> = data["categorizedWords"].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 13);
}

#[test]
fn words_include_common_list_by_default() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path(), json!({"words": {"summary": [], "sources": []}}));
    let out = temp.path().join("parsed_words.json");

    bin("parse-words")
        .arg("--sources")
        .arg(&catalog)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let data = read_json(&out);
    assert!(data["totalWords"].as_u64().unwrap() > 300);
    assert!(data["words"]
        .as_array()
        .unwrap()
        .contains(&json!("солнце")));
}

#[test]
fn missing_catalog_fails() {
    let temp = TempDir::new().unwrap();
    bin("parse-names")
        .arg("--sources")
        .arg(temp.path().join("nope.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error loading sources"));
}

#[test]
fn unwritable_output_fails() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path(), json!({}));
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    bin("parse-quotes")
        .arg("--sources")
        .arg(&catalog)
        .arg("--output")
        .arg(blocker.join("parsed_quotes.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error writing"));
}

#[test]
fn every_source_failing_still_writes_empty_dataset() {
    let server = MockServer::start();
    let down = server.mock(|when, then| {
        when.method(GET).path("/down");
        then.status(502);
    });

    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(
        temp.path(),
        json!({"names": {
            "summary": ["Недоступный сайт"],
            "sources": [
                {"url": server.url("/down"), "strategy": {"type": "name_list"}}
            ]
        }}),
    );
    let out = temp.path().join("parsed_names.json");

    bin("parse-names")
        .args(["--delay-ms", "0", "--log-level", "warn"])
        .arg("--sources")
        .arg(&catalog)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("total names: 0"))
        .stderr(predicate::str::contains("every source failed"));

    down.assert();
    assert_eq!(read_json(&out)["totalNames"], 0);
}
