use std::fmt;
use std::str::FromStr;

use crate::error::KinchError;

/// Number of events that make up a KinchRank.
pub const EVENT_COUNT: usize = 18;

/// Which ranks export an event is scored from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Average,
    Single,
}

/// One of the 18 WCA events counted towards a KinchRank.
///
/// Variant order is the column order of every table: the 13 averaged events
/// followed by the 5 best-of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Event {
    Cube2,
    Cube3,
    Cube4,
    Cube5,
    Cube6,
    Cube7,
    OneHanded,
    Feet,
    Megaminx,
    Pyraminx,
    Square1,
    Clock,
    Skewb,
    Blind3,
    FewestMoves,
    Blind4,
    Blind5,
    MultiBlind,
}

impl Event {
    pub const ALL: [Event; EVENT_COUNT] = [
        Event::Cube2,
        Event::Cube3,
        Event::Cube4,
        Event::Cube5,
        Event::Cube6,
        Event::Cube7,
        Event::OneHanded,
        Event::Feet,
        Event::Megaminx,
        Event::Pyraminx,
        Event::Square1,
        Event::Clock,
        Event::Skewb,
        Event::Blind3,
        Event::FewestMoves,
        Event::Blind4,
        Event::Blind5,
        Event::MultiBlind,
    ];

    /// WCA event id as it appears in the exports
    pub fn code(self) -> &'static str {
        match self {
            Event::Cube2 => "222",
            Event::Cube3 => "333",
            Event::Cube4 => "444",
            Event::Cube5 => "555",
            Event::Cube6 => "666",
            Event::Cube7 => "777",
            Event::OneHanded => "333oh",
            Event::Feet => "333ft",
            Event::Megaminx => "minx",
            Event::Pyraminx => "pyram",
            Event::Square1 => "sq1",
            Event::Clock => "clock",
            Event::Skewb => "skewb",
            Event::Blind3 => "333bf",
            Event::FewestMoves => "333fm",
            Event::Blind4 => "444bf",
            Event::Blind5 => "555bf",
            Event::MultiBlind => "333mbf",
        }
    }

    /// Exact match on an export's event id; no trimming or case folding.
    pub fn from_code(code: &str) -> Option<Event> {
        Event::ALL.into_iter().find(|e| e.code() == code)
    }

    /// Column index of this event in every per-competitor array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Blindfolded, fewest moves and multi-blind rank on singles; the rest on averages.
    pub fn source(self) -> SourceKind {
        match self {
            Event::Blind3
            | Event::FewestMoves
            | Event::Blind4
            | Event::Blind5
            | Event::MultiBlind => SourceKind::Single,
            _ => SourceKind::Average,
        }
    }

    /// Multi-blind packs solved count and time into one integer and is
    /// scored higher-is-better after decoding.
    pub fn is_multi_blind(self) -> bool {
        self == Event::MultiBlind
    }

    pub fn averaged() -> impl Iterator<Item = Event> {
        Event::ALL.into_iter().filter(|e| e.source() == SourceKind::Average)
    }

    pub fn best_of() -> impl Iterator<Item = Event> {
        Event::ALL.into_iter().filter(|e| e.source() == SourceKind::Single)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Event {
    type Err = KinchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Event::from_code(s).ok_or_else(|| KinchError::UnknownEvent(s.to_string()))
    }
}
