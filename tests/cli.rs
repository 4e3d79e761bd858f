use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const DESCRIPTOR: &str = r#"{
    "name": "X",
    "summary": "",
    "description": "",
    "codeSamples": [],
    "tags": [],
    "deprecationMessage": "",
    "items": [
        {"name": "A", "summary": "", "value": 0, "tags": [], "deprecationMessage": ""},
        {"name": "B", "summary": "", "value": 1, "tags": [], "deprecationMessage": ""}
    ]
}"#;

fn enum_dumper() -> Command {
    let mut cmd = Command::cargo_bin("enum-dumper").unwrap();
    cmd.env_remove("ENUM_DUMPER_CONFIG").env("RUST_LOG", "warn");
    cmd
}

#[test]
fn render_rust_from_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.json");
    fs::write(&path, DESCRIPTOR).unwrap();

    enum_dumper()
        .arg("render")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("pub enum X {"))
        .stdout(predicate::str::contains("    A = 0,"))
        .stdout(predicate::str::contains("0 => Ok(Self::A)"))
        .stdout(predicate::str::contains("1 => Ok(Self::B)"));
}

#[test]
fn render_cpp_from_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.json");
    fs::write(&path, DESCRIPTOR).unwrap();

    enum_dumper()
        .args(["render", "--dialect", "cpp"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "enum class X : uint32_t {\n    A = 0,\n    B = 1\n};",
        ))
        .stdout(predicate::str::contains("TryFrom").not());
}

#[test]
fn render_from_saved_page_rewrites_links() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(
        &path,
        r#"<html><body><script id="__NEXT_DATA__" type="application/json">
{"props":{"pageProps":{"data":{"apiReference":{"name":"Linked","summary":"See [docs](/foo).","items":[{"name":"Only","value":5}]}}}}}
</script></body></html>"#,
    )
    .unwrap();

    enum_dumper()
        .args(["render", "--html"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/// See [docs](https://create.roblox.com/docs/foo).",
        ))
        .stdout(predicate::str::contains("    Only = 5\n}"));
}

#[test]
fn render_page_without_data_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, "<html><body></body></html>").unwrap();

    enum_dumper()
        .args(["render", "--html"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("__NEXT_DATA__"));
}

#[test]
fn render_duplicate_values_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    fs::write(
        &path,
        r#"{"name":"Dup","items":[{"name":"A","value":1},{"name":"B","value":1}]}"#,
    )
    .unwrap();

    enum_dumper()
        .arg("render")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dup"));
}

#[test]
fn config_init_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf").join("config.toml");

    enum_dumper()
        .args(["config", "--init", "--config"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("entry_url = \"https://create.roblox.com/docs/reference/engine/enums\""));
    assert!(content.contains("rust_file = \"enums.rs\""));
}
