//! Random usernames and passwords for new accounts.
//!
//! Usernames are an adjective followed by a noun, drawn from word lists
//! embedded in the binary. Passwords are 20 characters with exactly four
//! symbols. Both use `rand`'s thread-local generator, which is fine for
//! throwaway inboxes but is not a security guarantee.

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

/// Length of every generated password.
pub const PASSWORD_LENGTH: usize = 20;

/// Symbols a password draws its mandatory special characters from.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-=_+[]{}";

const MIN_SYMBOLS: usize = 4;
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const ADJECTIVES: &str = include_str!("lexicon/adjectives.txt");
const NOUNS: &str = include_str!("lexicon/nouns.txt");

static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._\-]*$").expect("username pattern is valid")
});

static EMBEDDED: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    adjectives: filter_words(ADJECTIVES),
    nouns: filter_words(NOUNS),
});

/// Whether `word` may be used as a username component.
///
/// Words must be shorter than 10 characters and contain no `-` or `_`.
pub fn is_valid_word(word: &str) -> bool {
    word.chars().count() < 10 && !word.contains('-') && !word.contains('_')
}

fn filter_words(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty() && is_valid_word(word))
        .collect()
}

/// Adjective and noun lists usernames are built from.
#[derive(Debug, Clone)]
pub struct Lexicon {
    adjectives: Vec<&'static str>,
    nouns: Vec<&'static str>,
}

impl Lexicon {
    /// The word lists shipped with the crate.
    pub fn embedded() -> &'static Lexicon {
        &EMBEDDED
    }

    /// Build a lexicon from custom lists.
    ///
    /// Invalid words are dropped. Returns `None` if either list ends up empty.
    pub fn from_words(adjectives: &[&'static str], nouns: &[&'static str]) -> Option<Self> {
        let adjectives: Vec<_> = adjectives
            .iter()
            .copied()
            .filter(|w| is_valid_word(w))
            .collect();
        let nouns: Vec<_> = nouns.iter().copied().filter(|w| is_valid_word(w)).collect();
        if adjectives.is_empty() || nouns.is_empty() {
            return None;
        }
        Some(Self { adjectives, nouns })
    }

    /// Adjectives that passed the filter.
    pub fn adjectives(&self) -> &[&'static str] {
        &self.adjectives
    }

    /// Nouns that passed the filter.
    pub fn nouns(&self) -> &[&'static str] {
        &self.nouns
    }

    /// Draw one adjective+noun username.
    pub fn username<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let adjective = self.adjectives[rng.gen_range(0..self.adjectives.len())];
        let noun = self.nouns[rng.gen_range(0..self.nouns.len())];
        format!("{adjective}{noun}")
    }
}

/// Generate a random username such as `quietotter`.
///
/// Nothing checks it against existing accounts; mail.tm rejects collisions.
pub fn generate_username() -> String {
    generate_username_with(&mut rand::thread_rng())
}

/// [`generate_username`] with a caller-supplied RNG.
pub fn generate_username_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    Lexicon::embedded().username(rng)
}

/// Generate a 20 character password.
///
/// Four distinct symbols from [`PASSWORD_SYMBOLS`] plus sixteen distinct
/// letters and digits, shuffled together.
pub fn generate_password() -> String {
    generate_password_with(&mut rand::thread_rng())
}

/// [`generate_password`] with a caller-supplied RNG.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut chars: Vec<u8> = PASSWORD_SYMBOLS
        .as_bytes()
        .choose_multiple(rng, MIN_SYMBOLS)
        .copied()
        .collect();
    chars.extend(
        ALPHANUMERIC
            .choose_multiple(rng, PASSWORD_LENGTH - MIN_SYMBOLS)
            .copied(),
    );
    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}

/// Whether a user-typed username is usable as the local part of an address.
///
/// Letters, digits, `.`, `_` and `-`, starting with a letter or digit.
pub fn is_valid_username(name: &str) -> bool {
    USERNAME.is_match(name)
}
