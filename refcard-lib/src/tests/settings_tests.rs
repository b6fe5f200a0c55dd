use super::*;

#[test]
fn test_write_then_read_setting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    write_setting_to(&path, "storage", "database", Some("/tmp/cards.db")).unwrap();
    assert_eq!(
        read_setting_from(&path, "storage", "database").as_deref(),
        Some("/tmp/cards.db")
    );
    assert_eq!(read_setting_from(&path, "import", "default_parser"), None);
}

#[test]
fn test_write_preserves_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[ui]\ntheme = \"dark\"\n\n[import]\ndefault_parser = \"delimited\"\n")
        .unwrap();

    write_setting_to(&path, "storage", "database", Some("cards.db")).unwrap();
    write_setting_to(&path, "import", "default_parser", None).unwrap();

    assert_eq!(read_setting_from(&path, "ui", "theme").as_deref(), Some("dark"));
    assert_eq!(read_setting_from(&path, "storage", "database").as_deref(), Some("cards.db"));
    assert_eq!(read_setting_from(&path, "import", "default_parser"), None);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_write_refuses_unparseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    let err = write_setting_to(&path, "storage", "database", Some("x")).unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "this is = = not toml");
}

#[test]
fn test_section_that_is_not_a_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "storage = \"flat\"\n").unwrap();

    let err = write_setting_to(&path, "storage", "database", Some("x")).unwrap_err();
    assert!(matches!(err, SettingsError::NotATable(s) if s == "storage"));
}

#[test]
fn test_empty_value_reads_as_unset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[storage]\ndatabase = \"\"\n").unwrap();
    assert_eq!(read_setting_from(&path, "storage", "database"), None);
}

#[test]
fn test_parse_setting_name() {
    assert_eq!(parse_setting_name("storage.database").unwrap(), ("storage", "database"));
    assert_eq!(
        parse_setting_name("import.default_parser").unwrap(),
        ("import", "default_parser")
    );
    assert!(parse_setting_name("storage").is_err());
    assert!(parse_setting_name("ui.theme").is_err());
}

#[test]
fn test_cli_override_wins() {
    assert_eq!(
        resolve_database_path(Some(PathBuf::from("/x/y.db"))),
        PathBuf::from("/x/y.db")
    );
    assert_eq!(resolve_parser_key(Some("line-block".to_string())), "line-block");
}
