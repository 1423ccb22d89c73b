//! Static fallback dictionary
//!
//! Loaded once at startup from a newline-delimited word list and shared by
//! every invocation.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::engine::WordFilter;
use crate::error::{VanityError, Result};

/// Word list shipped with most Unix systems
pub const SYSTEM_WORDS: &str = "/usr/share/dict/words";

/// Common short English words, used when no word list file is available.
///
/// Grouped loosely by theme; order matters because the matcher stops at the
/// first few hits.
pub const BUILTIN_WORDS: &[&str] = &[
    // Business & Service
    "CALL", "CASH", "DEAL", "SHOP", "SALE", "SAVE", "LOAN", "BANK", "HELP", "CARE",
    "FIX", "CLEAN", "MOVE", "MOVERS", "PLUMB", "REPAIR", "SOLAR", "ROOF", "LAW", "LAWYER",
    "TAXI", "CAB", "RIDE", "TICKET", "TRAVEL", "HOTEL", "RENT", "HOME", "HOMES", "REALTY",
    "STORE", "MARKET", "TRADE", "MONEY", "CREDIT", "INSURE", "POLICY", "CLAIM", "OFFICE", "WORK",
    "JOBS", "HIRE", "STAFF", "TEAM", "SUPPORT", "SERVICE", "ORDER", "BUY", "SELL", "PAY",
    // Food & Drink
    "FOOD", "PIZZA", "TACO", "TACOS", "BURGER", "CAFE", "COFFEE", "TEA", "BEER", "WINE",
    "CAKE", "COOKIE", "BREAD", "DINER", "GRILL", "SUSHI", "PASTA", "SALAD", "SOUP", "JUICE",
    "FRUIT", "HONEY", "SUGAR", "SPICE", "MEAT", "FISH", "CHEF", "MEAL", "DINE", "EAT",
    // Animals & Pets
    "PET", "PETS", "DOG", "DOGS", "CAT", "CATS", "VET", "BIRD", "HORSE", "FERRET",
    "PUPPY", "KITTEN", "GROOM", "PAWS", "BARK", "TIGER", "EAGLE", "BEAR", "WOLF", "LION",
    // Health & Life
    "DOCTOR", "DENTIST", "CLINIC", "NURSE", "HEALTH", "CURE", "MEDS", "DRUG", "FIT", "GYM",
    "YOGA", "SPA", "HAIR", "NAILS", "SKIN", "BABY", "KIDS", "FAMILY", "LIFE", "LOVE",
    // Auto & Travel
    "CAR", "CARS", "AUTO", "TIRE", "TIRES", "TOW", "GAS", "DRIVE", "FLY", "FLIGHT",
    "BOAT", "BUS", "TRAIN", "ROAD", "MAP", "TRIP", "TOUR", "PARK", "LOT", "GARAGE",
    // Tech & Media
    "TECH", "CODE", "DATA", "WEB", "NET", "APP", "APPS", "PHONE", "CELL", "TEXT",
    "MAIL", "CHAT", "NEWS", "RADIO", "MUSIC", "SONG", "VIDEO", "GAME", "GAMES", "PLAY",
    // Positive & Action
    "BEST", "GOOD", "GREAT", "FAST", "NOW", "TODAY", "FREE", "WIN", "WINNER", "LUCKY",
    "HAPPY", "SMILE", "FUN", "COOL", "NICE", "SMART", "EASY", "SAFE", "SURE", "YES",
    "GO", "GET", "NEW", "TOP", "STAR", "GOLD", "KING", "QUEEN", "HERO", "BOSS",
    // Home & Nature
    "HOUSE", "DOOR", "LOCK", "KEYS", "PAINT", "FLOOR", "WATER", "POOL", "LAWN", "TREE",
    "GARDEN", "FLOWER", "ROSE", "SUN", "RAIN", "SNOW", "FIRE", "HEAT", "COLD", "AIR",
    // Common short words
    "ACT", "ADD", "AGE", "AID", "AIM", "ART", "ASK", "BAD", "BAG", "BAT",
    "BED", "BET", "BIG", "BOX", "BOY", "CAN", "CUP", "CUT", "DAY", "DOT",
    "EGG", "END", "EYE", "FAN", "FAR", "FEW", "FOX", "GUY", "HAT", "HOT",
    "ICE", "INK", "JAM", "JOB", "JOY", "KEY", "KID", "LEG", "LET", "LOG",
    "MAN", "MIX", "NAP", "OAK", "OIL", "OWL", "PAN", "PEN", "PIE", "POT",
    "RED", "RUN", "SEA", "SIT", "SKY", "TAX", "TEN", "TIP", "TOY", "VAN",
    "WAY", "WET", "ZOO", "BASE", "CORE", "FACT", "HAND", "IDEA", "MIND", "PLAN",
];

/// Where the dictionary words came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Builtin,
    Inline,
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionarySource::File(path) => write!(f, "{}", path.display()),
            DictionarySource::Builtin => write!(f, "builtin"),
            DictionarySource::Inline => write!(f, "inline"),
        }
    }
}

/// Filtered fallback word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    source: DictionarySource,
}

impl Dictionary {
    /// Build from an in-memory word list
    pub fn from_words<I, S>(raw_words: I, filter: &WordFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: filter.filter(raw_words),
            source: DictionarySource::Inline,
        }
    }

    /// Load a newline-delimited word list
    pub fn from_file(path: &Path, filter: &WordFilter) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VanityError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        Ok(Self {
            words: filter.filter(content.lines().map(str::trim)),
            source: DictionarySource::File(path.to_path_buf()),
        })
    }

    /// The compiled-in word list
    pub fn builtin(filter: &WordFilter) -> Self {
        Self {
            words: filter.filter(BUILTIN_WORDS.iter().copied()),
            source: DictionarySource::Builtin,
        }
    }

    /// Configured file, then the system word list, then the built-in list
    pub fn load(path: Option<&Path>, filter: &WordFilter) -> Self {
        let system = Path::new(SYSTEM_WORDS);
        for candidate in path.into_iter().chain(std::iter::once(system)) {
            match Self::from_file(candidate, filter) {
                Ok(dict) if !dict.is_empty() => {
                    tracing::info!(source = %dict.source, words = dict.len(), "Dictionary loaded");
                    return dict;
                }
                Ok(_) => {
                    tracing::warn!(path = %candidate.display(), "Dictionary file has no usable words");
                }
                Err(e) => {
                    tracing::debug!(path = %candidate.display(), error = %e, "Dictionary file unavailable");
                }
            }
        }

        let dict = Self::builtin(filter);
        tracing::info!(source = %dict.source, words = dict.len(), "Dictionary loaded");
        dict
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn source(&self) -> &DictionarySource {
        &self.source
    }
}
