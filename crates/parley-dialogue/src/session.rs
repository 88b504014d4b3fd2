//! Console dialogue loop.
//!
//! Each turn routes the user's utterance to an intent and runs the matching
//! handler. Input and output are any `BufRead`/`Write` pair so the loop can
//! be driven by a script in tests. Closing the input ends the session.
use std::io::{BufRead, Write};

use parley_core::error::Result;
use parley_core::traits::Classifier;
use parley_hybrid::{QaRetriever, QaUpdater, UpdateOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::choice::parse_choice;
use crate::identity::extract_name;
use crate::small_talk::SmallTalk;

pub const DEFAULT_BOT_NAME: &str = "Sophia";
pub const DEFAULT_MAX_ATTEMPTS: usize = 2;

pub struct Session<R, W, I, T> {
    input: R,
    output: W,
    intents: I,
    small_talk: SmallTalk<T>,
    retriever: QaRetriever,
    updater: QaUpdater,
    bot: String,
    max_attempts: usize,
    rng: StdRng,
    user: Option<String>,
    known_users: Vec<String>,
}

impl<R: BufRead, W: Write, I: Classifier, T: Classifier> Session<R, W, I, T> {
    pub fn new(
        input: R,
        output: W,
        intents: I,
        small_talk: SmallTalk<T>,
        retriever: QaRetriever,
        updater: QaUpdater,
    ) -> Self {
        Self {
            input,
            output,
            intents,
            small_talk,
            retriever,
            updater,
            bot: DEFAULT_BOT_NAME.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng: StdRng::from_entropy(),
            user: None,
            known_users: Vec::new(),
        }
    }

    pub fn with_bot(mut self, name: impl Into<String>, max_attempts: usize) -> Self {
        self.bot = name.into();
        self.max_attempts = max_attempts;
        self
    }

    /// Seed the template picker.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Name the user gave during this session, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Run until the user quits or the input closes.
    pub fn run(&mut self) -> Result<()> {
        let bot = self.bot.clone();
        self.say(&format!("Hello, I am your AI assistant. My name is {bot}."))?;

        let mut attempts = 0;
        let mut retrying = false;
        loop {
            let prompt = if retrying { "Could you please describe it more clearly?" } else { "How can I help you?" };
            if retrying {
                attempts += 1;
            } else {
                attempts = 0;
            }
            retrying = false;

            let Some(mut reply) = self.ask(prompt)? else { break };
            while reply.is_empty() {
                let Some(next) = self.ask("Please input something.")? else { return Ok(()) };
                reply = next;
            }

            let intent = self.intents.classify(&reply)?;
            debug!(%reply, %intent, attempts, "routed utterance");
            match intent.as_str() {
                "identity" => self.identity(&reply)?,
                "talk" => {
                    let answer = self.small_talk.reply(&reply, self.user.as_deref(), &bot, &mut self.rng)?;
                    self.say(&answer)?;
                }
                "answering" => self.answering(&reply)?,
                "transaction" => {
                    if self.confirm("Would you like to book a restaurant table? [y/n]")? {
                        self.say("Sorry, table booking is not available yet.")?;
                    }
                }
                "game" => {
                    if self.confirm("Would you like to play a game? [y/n]")? {
                        self.say("Sorry, games are not available yet.")?;
                    }
                }
                "quit" => {
                    if self.confirm("Do you want to exit the chat? [y/n]")? {
                        self.say("Goodbye.")?;
                        break;
                    }
                }
                _ => {
                    retrying = attempts < self.max_attempts;
                    self.say("Sorry, I am unable to understand your instruction.")?;
                }
            }
        }
        Ok(())
    }

    fn identity(&mut self, reply: &str) -> Result<()> {
        let mut name = extract_name(reply);
        if name.is_empty() || !self.confirm(&format!("Is your name {name}? [y/n]"))? {
            match self.ask("Please tell me your name.")? {
                Some(given) if !given.is_empty() => name = given,
                _ => return Ok(()),
            }
        }
        if self.known_users.contains(&name) {
            self.say(&format!("Hi, {name}. How I miss you."))?;
        } else {
            self.say(&format!("Nice to meet you, {name}."))?;
            self.known_users.push(name.clone());
        }
        info!(user = %name, "user identified");
        self.user = Some(name);
        Ok(())
    }

    fn answering(&mut self, question: &str) -> Result<()> {
        self.say("Let me access my database...")?;
        let answers = self.retriever.retrieve(question)?;
        if answers.is_empty() {
            return self.say("Sorry, I am not yet able to answer this question.");
        }
        let last = answers.len() - 1;
        for (i, answer) in answers.iter().enumerate() {
            self.say(answer)?;
            if self.confirm("Did this answer your question? [y/n]")? {
                if let UpdateOutcome::Inserted { index } = self.updater.update(question, answer)? {
                    debug!(index, "stored confirmed answer");
                }
                return Ok(());
            }
            if i == last {
                self.say("Sorry, I am not yet able to answer this question.")?;
            } else {
                self.say("Let me try again.")?;
            }
        }
        Ok(())
    }

    /// Ask a yes/no question until it is answered. A closed input is "no".
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let mut prompt = question;
        loop {
            let Some(line) = self.ask(prompt)? else { return Ok(false) };
            if let Some(choice) = parse_choice(&line) {
                return Ok(choice);
            }
            prompt = "Please select yes or no.";
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "[{}]: {text}", self.bot)?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line, `None` once input is closed.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "[{}]: {prompt}\n[You]: ", self.bot)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
