use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::RangeInclusive;

use rand::Rng;

const SENTENCE_LENGTH: RangeInclusive<usize> = 4..=10;

const LOREM: &[&str] = &[
    "adipisci",
    "aliquam",
    "amet",
    "consectetur",
    "dolor",
    "dolore",
    "dolorem",
    "eius",
    "est",
    "et",
    "incidunt",
    "ipsum",
    "labore",
    "magnam",
    "modi",
    "neque",
    "non",
    "numquam",
    "porro",
    "quaerat",
    "qui",
    "quia",
    "quisquam",
    "sed",
    "sit",
    "tempora",
    "ut",
    "velit",
    "voluptatem",
    "dolorum",
    "lorem",
    "aliqua",
];

/// Generate a lorem-style filler sentence: capitalized, space separated and
/// terminated by a period.
pub fn sentence(rng: &mut impl Rng) -> String {
    use rand::seq::IndexedRandom;
    let n_words = rng.random_range(SENTENCE_LENGTH);
    let words = LOREM.choose_multiple(rng, n_words).copied().collect::<Vec<_>>();
    let mut sentence = capitalize(&words.join(" "));
    sentence.push('.');
    sentence
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    NonInteractive,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Interactive => write!(f, "interactive"),
            Mode::NonInteractive => write!(f, "non-interactive"),
        }
    }
}

/// A concrete value for one of the recognized flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Description(String),
    Enabled(bool),
    Mode(Mode),
}

impl Assignment {
    /// Draw a value for the flag called `name`, or `None` if the flag is not
    /// one we know how to fill in.
    pub fn rand(name: &str, rng: &mut impl Rng) -> Option<Self> {
        let assignment = match name {
            "--description" => Self::Description(sentence(rng)),
            "--enabled" => Self::Enabled(rng.random()),
            "--mode" => {
                if rng.random() {
                    Self::Mode(Mode::Interactive)
                } else {
                    Self::Mode(Mode::NonInteractive)
                }
            }
            _ => return None,
        };
        Some(assignment)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Assignment::Description(sentence) => write!(f, "--description=\"{sentence}\""),
            Assignment::Enabled(true) => write!(f, "--enabled=True"),
            Assignment::Enabled(false) => write!(f, "--enabled=False"),
            Assignment::Mode(mode) => write!(f, "--mode={mode}"),
        }
    }
}
