use std::fs;

use tempfile::TempDir;

use parley_core::config::{resolve_with_base, BotSettings, Config};

#[test]
fn defaults_apply_when_sections_are_missing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("parley.toml");
    fs::write(&path, "").unwrap();

    let config = Config::from_path(&path).expect("config");
    assert_eq!(config.bot().unwrap(), BotSettings::default());
    let data = config.data().unwrap();
    assert_eq!(data.qa_corpus, tmp.path().join("data/question_answering.csv"));
}

#[test]
fn relative_paths_resolve_against_config_dir() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("parley.toml");
    fs::write(
        &path,
        "[data]\nintent_corpus = \"corpora/intents.csv\"\nqa_corpus = \"/srv/qa.csv\"\n\n[bot]\nname = \"Ada\"\n",
    )
    .unwrap();

    let config = Config::from_path(&path).expect("config");
    let data = config.data().unwrap();
    assert_eq!(data.intent_corpus, tmp.path().join("corpora/intents.csv"));
    assert_eq!(data.qa_corpus, std::path::PathBuf::from("/srv/qa.csv"));
    let bot = config.bot().unwrap();
    assert_eq!(bot.name, "Ada");
    assert_eq!(bot.max_attempts, 2);
}

#[test]
fn empty_bot_name_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("parley.toml");
    fs::write(&path, "[bot]\nname = \"  \"\n").unwrap();

    let err = Config::from_path(&path).err().expect("invalid config");
    assert!(err.to_string().contains("bot.name"), "{err}");
}

#[test]
fn resolve_keeps_absolute_paths() {
    let base = std::path::Path::new("/base");
    assert_eq!(resolve_with_base(base, "x/y.csv"), std::path::PathBuf::from("/base/x/y.csv"));
    assert_eq!(resolve_with_base(base, "/abs.csv"), std::path::PathBuf::from("/abs.csv"));
}
