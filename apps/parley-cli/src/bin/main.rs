use std::env;
use std::io;

use parley_core::config::Config;
use parley_core::corpus::{CsvCorpus, QaStore};
use parley_dialogue::{NearestNeighbour, Session, SmallTalk};
use parley_hybrid::{IntentRouter, QaRetriever, QaUpdater};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "<chat|match|ask|learn> [args...]";

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() { eprintln!("Usage: {} {}", prog, USAGE); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn required(args: &[String], pos: usize, usage: &str) -> String {
    args.get(pos).cloned().unwrap_or_else(|| { eprintln!("Usage: parley {}", usage); std::process::exit(1) })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let data = config.data()?;
    let (cmd, args) = parse_args();
    tracing::debug!(%cmd, base = %config.base_dir().display(), "starting");
    match cmd.as_str() {
        "chat" => {
            let bot = config.bot()?;
            let stdin = io::stdin();
            let mut session = Session::new(
                stdin.lock(),
                io::stdout(),
                IntentRouter::new(CsvCorpus::new(&data.intent_corpus)),
                SmallTalk::new(NearestNeighbour::new(CsvCorpus::new(&data.small_talk_corpus))),
                QaRetriever::new(QaStore::new(&data.qa_corpus)),
                QaUpdater::new(QaStore::new(&data.qa_corpus)),
            )
            .with_bot(bot.name, bot.max_attempts);
            session.run()?;
        }
        "match" => {
            let utterance = required(&args, 0, "match \"<utterance>\"");
            let outcome = IntentRouter::new(CsvCorpus::new(&data.intent_corpus)).route(&utterance)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        "ask" => {
            let question = required(&args, 0, "ask \"<question>\"");
            let answers = QaRetriever::new(QaStore::new(&data.qa_corpus)).retrieve(&question)?;
            println!("{}", serde_json::to_string_pretty(&answers)?);
        }
        "learn" => {
            let question = required(&args, 0, "learn \"<question>\" \"<answer>\"");
            let answer = required(&args, 1, "learn \"<question>\" \"<answer>\"");
            let outcome = QaUpdater::new(QaStore::new(&data.qa_corpus)).update(&question, &answer)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        _ => { eprintln!("Unknown command: {}", cmd); std::process::exit(1); }
    }
    Ok(())
}
