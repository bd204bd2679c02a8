use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use tempfile::NamedTempFile;
use copyplay::cli::CliArgs;
use copyplay::config::{apply_overrides, load_and_validate, resolve, ConfigFile, RawConfigFile};
use copyplay::errors::CopyplayError;
use copyplay::types::SlotPolicy;

type TestResult = Result<(), Box<dyn Error>>;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn demo_config_loads() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cfg = load_and_validate(manifest.join("demos/Copyplay.toml"))?;

    assert_eq!(cfg.client.slot_policy, SlotPolicy::SkipBusy);
    assert_eq!(cfg.client.max_slots, 50);
    assert_eq!(cfg.session.players, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(cfg.dest_dir(), PathBuf::from("build"));
    assert_eq!(cfg.log_dir(), PathBuf::from("logs"));

    Ok(())
}

#[test]
fn empty_file_matches_builtin_defaults() -> TestResult {
    let file = config_file("");
    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.client.source, "build/client.exe");
    assert_eq!(cfg.client.slot_policy, SlotPolicy::Replace);
    assert_eq!(cfg.session.game, "Chess");
    assert_eq!(cfg.session.server, "r99acm.device.mst.edu");
    assert_eq!(cfg.session.players.len(), 2);
    assert!(cfg.session.extra_args.is_empty());
    assert_eq!(cfg.log_dir(), PathBuf::from("."));

    Ok(())
}

#[test]
fn dest_dir_defaults_to_source_directory() -> TestResult {
    let mut raw = RawConfigFile::default();
    raw.client.source = "client".to_string();
    let cfg = ConfigFile::try_from(raw)?;
    assert_eq!(cfg.dest_dir(), PathBuf::from("."));

    let file = config_file(
        r#"
[client]
source = "out/bin/client.exe"
dest_dir = "copies"
"#,
    );
    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.dest_dir(), PathBuf::from("copies"));

    Ok(())
}

#[test]
fn unknown_slot_policy_is_a_toml_error() {
    let file = config_file(
        r#"
[client]
slot_policy = "overwrite"
"#,
    );

    match load_and_validate(file.path()) {
        Err(CopyplayError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn duplicate_players_are_rejected() {
    let file = config_file(
        r#"
[match]
players = ["a", "b", "a"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(CopyplayError::ConfigError(msg)) => {
            assert!(msg.contains("more than once"));
            assert!(msg.contains("'a'"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        ("[match]\nplayers = []\n", "at least one player"),
        ("[match]\nplayers = [\"logs/a\"]\n", "path separators"),
        ("[match]\nserver = \"  \"\n", "[match].server"),
        ("[client]\nmax_slots = 0\n", "max_slots"),
        ("[client]\nsource = \"\"\n", "[client].source"),
        ("[client]\ndest_dir = \"\"\n", "[client].dest_dir"),
        ("[client]\ndest_dir = \"   \"\n", "[client].dest_dir"),
    ];

    for (toml, needle) in cases {
        let file = config_file(toml);
        match load_and_validate(file.path()) {
            Err(CopyplayError::ConfigError(msg)) => {
                assert!(msg.contains(needle), "{msg:?} should mention {needle:?}");
            }
            other => panic!("Expected ConfigError for {toml:?}, got: {:?}", other),
        }
    }
}

#[test]
fn cli_flags_override_file_values() -> TestResult {
    let file = config_file(
        r#"
[match]
server = "localhost"
players = ["x"]
"#,
    );

    let args = CliArgs {
        config: Some(file.path().display().to_string()),
        server: Some("games.example.org".to_string()),
        players: Some(vec!["north".to_string(), "south".to_string()]),
        slot_policy: Some(SlotPolicy::Fresh),
        ..CliArgs::default()
    };

    let cfg = resolve(&args)?;
    assert_eq!(cfg.session.server, "games.example.org");
    assert_eq!(cfg.session.players, vec!["north".to_string(), "south".to_string()]);
    assert_eq!(cfg.client.slot_policy, SlotPolicy::Fresh);
    assert_eq!(cfg.session.game, "Chess");

    Ok(())
}

#[test]
fn explicit_missing_config_is_an_io_error() {
    let args = CliArgs {
        config: Some("/definitely/not/here/Copyplay.toml".to_string()),
        ..CliArgs::default()
    };

    match resolve(&args) {
        Err(CopyplayError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected IoError, got: {:?}", other),
    }
}

#[test]
fn overrides_are_validated_too() {
    let mut raw = RawConfigFile::default();
    let args = CliArgs {
        game: Some(String::new()),
        ..CliArgs::default()
    };
    apply_overrides(&mut raw, &args);

    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(CopyplayError::ConfigError(_))
    ));
}

#[test]
fn empty_dest_dir_override_is_rejected() {
    let args = CliArgs {
        dest_dir: Some(String::new()),
        ..CliArgs::default()
    };

    match resolve(&args) {
        Err(CopyplayError::ConfigError(msg)) => assert!(msg.contains("dest_dir")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn slot_policy_parses_from_strings() -> TestResult {
    assert_eq!(SlotPolicy::from_str("Replace")?, SlotPolicy::Replace);
    assert_eq!(SlotPolicy::from_str("skip_busy")?, SlotPolicy::SkipBusy);
    assert_eq!(SlotPolicy::from_str(" fresh ")?, SlotPolicy::Fresh);
    assert!(SlotPolicy::from_str("newest").is_err());
    assert_eq!(SlotPolicy::SkipBusy.to_string(), "skip-busy");
    Ok(())
}
