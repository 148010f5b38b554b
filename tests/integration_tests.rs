use xini::{parse_file, parse_str, value, verify, Config, Error, Value};

const APP_CONFIG: &str = "\
; application configuration
[server]
host = \"example.com\"
ports = [80, 443]
debug = false
workers = 4

[limits]
# shared by both keys
soft, hard = 1024
rate = 2.5

[paths]
data = /var/lib/app
'log file' = /var/log/app.log
";

#[test]
fn test_parse_whole_file() {
    let config = parse_str("app.ini", APP_CONFIG).unwrap();
    assert_eq!(config.len(), 3);

    let server = config.get("server").unwrap();
    assert_eq!(server.get("host"), Some(&value!("example.com")));
    assert_eq!(server.get("ports"), Some(&value!([80, 443])));
    assert_eq!(server.get("debug"), Some(&value!(false)));
    assert_eq!(server.get("workers"), Some(&value!(4)));

    let limits = config.get("limits").unwrap();
    assert_eq!(limits.get("soft"), Some(&value!(1024)));
    assert_eq!(limits.get("hard"), Some(&value!(1024)));
    assert_eq!(limits.get("rate"), Some(&value!(2.5)));

    let paths = config.get("paths").unwrap();
    assert_eq!(paths.get("data"), Some(&value!("/var/lib/app")));
    assert_eq!(paths.get("log file"), Some(&value!("/var/log/app.log")));
}

#[test]
fn test_section_order_matches_file_order() {
    let config = parse_str("app.ini", APP_CONFIG).unwrap();
    let names: Vec<_> = config.sections().cloned().collect();
    assert_eq!(names, vec!["server", "limits", "paths"]);
}

#[test]
fn test_duplicate_section_blocks_last_wins() {
    // Re-opening a section name replaces the earlier block entirely; the
    // blocks are not merged.
    let config = parse_str(
        "dup.ini",
        "[server]\nhost = a\nport = 1\n\n[other]\nx = 1\n\n[server]\nhost = b\n",
    )
    .unwrap();

    let server = config.get("server").unwrap();
    assert_eq!(server.get("host"), Some(&value!("b")));
    assert!(server.get("port").is_none());
    assert_eq!(config.len(), 2);
}

#[test]
fn test_parse_error_aborts_whole_parse() {
    let err = parse_str("bad.ini", "[a]\nx = 1\nnot an assignment\n").unwrap_err();
    match err {
        Error::MissingAssignment { file, line, text } => {
            assert_eq!(file, "bad.ini");
            assert_eq!(line, 3);
            assert_eq!(text, "not an assignment");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_file_and_not_readable() {
    let path = std::env::temp_dir().join("xini_integration_test.ini");
    std::fs::write(&path, APP_CONFIG).unwrap();

    let config = parse_file(&path).unwrap();
    assert!(config.get("server").is_some());
    std::fs::remove_file(&path).unwrap();

    let err = parse_file(&path).unwrap_err();
    match err {
        Error::NotReadable { path: p, .. } => {
            assert!(p.contains("xini_integration_test.ini"))
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = parse_file(std::env::temp_dir()).unwrap_err();
    assert!(matches!(err, Error::NotReadable { .. }));
}

#[test]
fn test_verify_against_schema_file() {
    let path = std::env::temp_dir().join("xini_schema_test.ini");
    std::fs::write(
        &path,
        "[server]\nhost = \"\"\nports = []\ndebug = false\nworkers = 0\n\
         [limits]\nsoft = 0\nhard = 0\nrate = 0\n\
         [paths]\ndata = \"\"\n'log file' = \"\"\n",
    )
    .unwrap();

    let actual = parse_str("app.ini", APP_CONFIG).unwrap();
    let report = xini::verify_file(&actual, &path, true, false).unwrap();
    assert!(report.is_empty());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_verify_mismatch_report_shape() {
    let expected = parse_str(
        "schema",
        "[server]\nhost = \"\"\nports = []\n",
    )
    .unwrap();
    let actual = parse_str(
        "app.ini",
        "[server]\nhost = \"x\"\nports = \"y\"\n[extra]\nz = 1\n",
    )
    .unwrap();

    // Lenient: only the list-vs-non-list disagreement shows up.
    let report = verify(&actual, &expected, false, false).unwrap();
    assert_eq!(report.len(), 1);
    let server = report.get("server").unwrap();
    assert_eq!(server.len(), 1);
    assert_eq!(server.get("ports"), Some(&value!("y")));

    // Strict: the unknown section is reported wholesale too.
    let report = verify(&actual, &expected, true, false).unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report.get("extra").unwrap().get("z"), Some(&value!(1)));

    // Fail fast: the first mismatch comes back as an error instead.
    let err = verify(&actual, &expected, true, true).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch { .. } | Error::UnknownSection { .. }
    ));
}

#[test]
fn test_display_renders_reparsable_text() {
    let config = parse_str("app.ini", APP_CONFIG).unwrap();
    let rendered = config.to_string();
    let reparsed = parse_str("rendered", &rendered).unwrap();
    assert_eq!(config, reparsed);
}

#[test]
fn test_serde_json_bridge() {
    let config = parse_str(
        "app.ini",
        "[server]\nhost = \"example.com\"\nports = [80, 443]\ndebug = false\nextra = null\n",
    )
    .unwrap();

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "server": {
                "host": "example.com",
                "ports": [80, 443],
                "debug": false,
                "extra": null,
            }
        })
    );

    let back: Config = serde_json::from_value(json).unwrap();
    assert_eq!(back.get("server").unwrap().get("ports"), Some(&value!([80, 443])));
    assert_eq!(back.get("server").unwrap().get("extra"), Some(&Value::Null));
}

#[test]
fn test_value_extraction_for_host_code() {
    let config = parse_str(
        "app.ini",
        "[server]\nworkers = 4\nrate = 2.5\ndebug = true\nname = app\n",
    )
    .unwrap();
    let server = config.get("server").unwrap();

    assert_eq!(server.get("workers").and_then(|v| v.as_i64()), Some(4));
    assert_eq!(server.get("workers").and_then(|v| v.as_f64()), Some(4.0));
    assert_eq!(server.get("rate").and_then(|v| v.as_f64()), Some(2.5));
    assert_eq!(server.get("debug").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(server.get("name").and_then(|v| v.as_str()), Some("app"));

    let workers: i64 = server.get("workers").cloned().unwrap().try_into().unwrap();
    assert_eq!(workers, 4);
}
