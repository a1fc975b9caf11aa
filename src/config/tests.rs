// libcat: Console Library Catalog Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::env_var_names;
use super::messages::{MENU_ITEM_COUNT, Messages};
use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::model::{Book, Borrower};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert!(config.seed.enabled);
    assert!(config.seed.books.is_none());
    assert_eq!(config.messages, Messages::default());
    config.validate().unwrap();
}

#[test]
fn test_default_menu_has_ten_items() {
    let messages = Messages::default();
    assert_eq!(messages.menu_items.len(), MENU_ITEM_COUNT);
    let lines = messages.menu_lines();
    insta::assert_snapshot!(lines[0].as_str(), @"1. 添加新圖書");
    insta::assert_snapshot!(lines[9].as_str(), @"10. 退出");
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "logs/libcat.log"

[seed]
enabled = false

[messages]
exit_message = "Bye"

[messages.display_labels]
no_books = "The library has no books."
"#;

    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("logs/libcat.log"))
    );
    assert!(!config.seed.enabled);
    assert_eq!(config.messages.exit_message, "Bye");
    assert_eq!(
        config.messages.display_labels.no_books,
        "The library has no books."
    );
    // Untouched keys keep their defaults
    assert_eq!(config.messages.display_labels.title, "書名");
    assert_eq!(config.messages.menu_items, Messages::default().menu_items);
}

#[test]
fn test_config_parse_seed_lists() {
    let toml = r#"
[[seed.books]]
title = "Dune"
author = "Frank Herbert"
id = "D1965"

[[seed.borrowers]]
name = "Paul"
borrowed_books = ["D1965"]

[[seed.borrowers]]
name = "Jessica"
"#;

    let config = Config::parse(toml).unwrap();
    assert_eq!(
        config.seed.books,
        Some(vec![Book::new("Dune", "Frank Herbert", "D1965")])
    );
    assert_eq!(
        config.seed.borrowers,
        Some(vec![
            Borrower::with_books("Paul", ["D1965"]),
            Borrower::new("Jessica"),
        ])
    );
}

#[test]
fn test_config_rejects_bad_seed_id() {
    let toml = r#"
[[seed.books]]
title = "Bad"
author = "Nobody"
id = "BAD1"
"#;

    let err = Config::parse(toml).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }), "{err}");
    assert!(err.to_string().contains("BAD1"), "{err}");
}

#[test]
fn test_config_rejects_wrong_menu_length() {
    let toml = r#"
[messages]
menu_items = ["one", "two", "three"]
"#;

    let err = Config::parse(toml).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'menu_items' in section '[messages]': expected 10 entries, got 3"
    );
}

#[test]
fn test_config_rejects_unknown_keys() {
    for toml in ["[seed]\nenable = true", "[messages]\nbye = \"x\""] {
        let err = Config::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)), "{toml}: {err}");
    }
}

#[test]
fn test_config_syntax_error_is_parse_error() {
    let err = Config::parse("[seed\nenabled = ").unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert_eq!(path, "<string>"),
        other => panic!("expected ParseError, got {other}"),
    }
}

#[test]
fn test_log_level_bounds() {
    assert!(Config::parse("[global]\noutput_log_level = 6").is_ok());
    assert!(matches!(
        Config::parse("[global]\noutput_log_level = 7"),
        Err(ConfigError::Load(_))
    ));
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[seed]\nenabled = true")
        .set("seed.enabled", "false")
        .unwrap()
        .set("messages.exit_message", "再見")
        .unwrap()
        .build()
        .unwrap();

    assert!(!config.seed.enabled);
    assert_eq!(config.messages.exit_message, "再見");
}

#[test]
fn test_config_loader_set_rejects_malformed_key() {
    let err = ConfigLoader::new().set("seed[", "false").err().unwrap();
    assert!(matches!(err, ConfigError::InvalidKey { ref key, .. } if key == "seed["), "{err}");
}

#[test]
fn test_config_loader_describes_sources_in_order() {
    let loader = ConfigLoader::new()
        .add_toml_str("[seed]\n enabled = true")
        .add_toml_file("/nonexistent/extra.toml")
        .set("global.output_log_level", "3")
        .unwrap();

    assert_eq!(
        loader.describe_sources(),
        [
            "1. [inline] <string>",
            "2. [file] /nonexistent/extra.toml",
            "3. [set] global.output_log_level=3",
        ]
    );
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/libcat.toml");

    assert!(loader.describe_sources().is_empty());
    // Missing optional files do not fail the build
    assert!(loader.build().is_ok());
}

#[test]
fn test_config_loader_optional_file_is_loaded_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libcat.toml");
    std::fs::write(&path, "[messages]\nsort_confirmation = \"Sorted.\"\n").unwrap();

    let loader = ConfigLoader::new().add_toml_file_optional(&path);
    assert_eq!(
        loader.describe_sources(),
        [format!("1. [default] {}", path.display())]
    );
    assert_eq!(loader.build().unwrap().messages.sort_confirmation, "Sorted.");
}

#[test]
fn test_config_loader_missing_required_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let err = ConfigLoader::new().add_toml_file(&missing).build().unwrap_err();
    match err {
        ConfigError::NotFound(path) => assert_eq!(path, missing.display().to_string()),
        other => panic!("expected NotFound, got {other}"),
    }
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var("LIBCATTEST_MESSAGES__EXIT_MESSAGE", "env bye");
    }

    let loader = ConfigLoader::new()
        .add_toml_str("[messages]\nexit_message = \"file bye\"")
        .with_env_prefix("LIBCATTEST");
    assert_eq!(
        loader.describe_sources()[1],
        "2. [env] LIBCATTEST_* (LIBCATTEST_MESSAGES__EXIT_MESSAGE)"
    );
    let config = loader.build().unwrap();

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("LIBCATTEST_MESSAGES__EXIT_MESSAGE");
    }

    assert_eq!(config.messages.exit_message, "env bye");
}

#[test]
fn test_env_var_names_filters_and_sorts() {
    let names = [
        "PATH",
        "LIBCAT_SEED__ENABLED",
        "LIBCATX_IGNORED",
        "LIBCAT_",
        "libcat_global__log_file",
        "LIBCAT_GLOBAL__OUTPUT_LOG_LEVEL",
    ]
    .map(std::ffi::OsString::from);

    assert_eq!(
        env_var_names("LIBCAT", names),
        [
            "LIBCAT_GLOBAL__OUTPUT_LOG_LEVEL",
            "LIBCAT_SEED__ENABLED",
            "libcat_global__log_file",
        ]
    );
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse("[seed]\nenabled = false").unwrap();

    let first = config.format_options();
    let second = config.format_options();
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);

    assert!(first.iter().any(|line| line.starts_with("seed.enabled") && line.ends_with("= false")));
    assert!(first.iter().any(|line| line.starts_with("messages.menu_items.10")));
    // Prompts are quoted so the trailing space is visible
    assert!(first.iter().any(|line| line.ends_with("= \"輸入書名: \"")));
}

#[test]
fn test_display_labels_lines() {
    let labels = Messages::default().display_labels;

    insta::assert_snapshot!(
        labels.book_line(&Book::new("紅樓夢", "曹雪芹", "A1234")),
        @"書名: 紅樓夢, 作者: 曹雪芹, 圖書編號: A1234"
    );
    assert_eq!(
        labels.borrower_line(&Borrower::with_books("小明", ["A1234", "B2345"])),
        "姓名: 小明, 借閱的圖書編號: A1234 B2345 "
    );
    assert_eq!(
        labels.borrower_line(&Borrower::new("小新")),
        "姓名: 小新, 借閱的圖書編號: "
    );
}
