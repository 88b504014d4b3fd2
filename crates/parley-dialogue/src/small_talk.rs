//! Templated small-talk replies keyed by sub-intent label.
use parley_core::error::Result;
use parley_core::traits::Classifier;
use rand::seq::SliceRandom;
use rand::Rng;

pub const BASIC_GREETINGS: &str = "basic_greetings";
pub const ADVANCED_GREETINGS: &str = "advanced_greetings";
pub const IDENTITY_USER: &str = "identity_user";
pub const IDENTITY_BOT: &str = "identity_bot";
pub const WEATHER: &str = "weather";

const GREETING_INTROS: &[&str] = &["Hi", "Hello"];
const WELLBEING_INTROS: &[&str] = &["Not bad", "Pretty good", "I'm doing well"];
const WELLBEING_OUTROS: &[&str] = &[", thanks", ", thank you", ", cheers", ""];
const USER_NAME_INTROS: &[&str] = &["You are", "Your name is"];
const BOT_NAME_INTROS: &[&str] = &["I am", "My name is", "Call me"];
const WEATHER_INTROS: &[&str] = &["I guess", "I suppose"];
const WEATHER_GUESSES: &[&str] = &["sunny", "rainy", "cloudy", "windy"];

/// Classifies a small-talk sentence and answers it from a template.
pub struct SmallTalk<C> {
    classifier: C,
}

impl<C: Classifier> SmallTalk<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn reply<R: Rng + ?Sized>(&self, sentence: &str, user: Option<&str>, bot: &str, rng: &mut R) -> Result<String> {
        let label = self.classifier.classify(sentence)?;
        Ok(compose(&label, user, bot, rng))
    }
}

/// Reply text for `label`. Unknown labels get a polite fallback.
pub fn compose<R: Rng + ?Sized>(label: &str, user: Option<&str>, bot: &str, rng: &mut R) -> String {
    match (label, user) {
        (BASIC_GREETINGS, Some(user)) => format!("{} {user}!", pick(GREETING_INTROS, rng)),
        (BASIC_GREETINGS, None) => format!("{}!", pick(GREETING_INTROS, rng)),
        (ADVANCED_GREETINGS, _) => format!("{}{}.", pick(WELLBEING_INTROS, rng), pick(WELLBEING_OUTROS, rng)),
        (IDENTITY_USER, Some(user)) => format!("{} {user}.", pick(USER_NAME_INTROS, rng)),
        (IDENTITY_USER, None) => "Sorry, I don't know your name.".to_string(),
        (IDENTITY_BOT, _) => format!("{} {bot}.", pick(BOT_NAME_INTROS, rng)),
        (WEATHER, _) => {
            format!("I don't know, but {} it's {}.", pick(WEATHER_INTROS, rng), pick(WEATHER_GUESSES, rng))
        }
        _ => "Sorry, I did not get your point.".to_string(),
    }
}

fn pick<'a, R: Rng + ?Sized>(options: &[&'a str], rng: &mut R) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}
