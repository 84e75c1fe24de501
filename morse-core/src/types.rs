//! Core data types for the Morse transmitter

/// Morse code elements
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
pub enum Element {
    /// Dot (short element)
    Dot,
    /// Dash (long element)
    Dash,
}

impl Element {
    /// Returns the duration of this element in dot units
    pub const fn duration_units(&self) -> u32 {
        match self {
            Element::Dot => 1,
            Element::Dash => 3,
        }
    }

    /// Decode a pattern-table glyph (`'*'` for dot, `'-'` for dash)
    pub const fn from_glyph(glyph: char) -> Option<Element> {
        match glyph {
            '*' => Some(Element::Dot),
            '-' => Some(Element::Dash),
            _ => None,
        }
    }

    /// Trace representation: `'.'` for dot, `'-'` for dash
    pub const fn trace_glyph(&self) -> char {
        match self {
            Element::Dot => '.',
            Element::Dash => '-',
        }
    }
}

/// Character-to-index layouts
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Layout {
    Latin,
    Cyrillic,
}

/// Key output polarity, fixed at construction
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Polarity {
    /// Pulse drives the pin high, idle is low
    ActiveHigh,
    /// Pulse drives the pin low, idle is high
    #[default]
    ActiveLow,
}

impl Polarity {
    /// Pin level for the given logical state (true = pulsing)
    pub const fn level(&self, active: bool) -> bool {
        match self {
            Polarity::ActiveHigh => active,
            Polarity::ActiveLow => !active,
        }
    }
}

/// Pulse and gap durations in milliseconds.
///
/// The five durations always satisfy the standard ratios
/// dash = 3·dot, element gap = dot, letter gap = 3·dot, word gap = 7·dot,
/// and are only ever recomputed together from the dot duration.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Timing {
    pub dot_ms: u32,
    pub dash_ms: u32,
    pub element_gap_ms: u32,
    pub letter_gap_ms: u32,
    pub word_gap_ms: u32,
}

impl Timing {
    /// Default dot duration used at construction
    pub const DEFAULT_DOT_MS: u32 = 250;

    /// Derive all five durations from a dot duration
    pub const fn from_dot(dot_ms: u32) -> Self {
        Self {
            dot_ms,
            dash_ms: 3 * dot_ms,
            element_gap_ms: dot_ms,
            letter_gap_ms: 3 * dot_ms,
            word_gap_ms: 7 * dot_ms,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_dot(Self::DEFAULT_DOT_MS)
    }
}

/// Runtime transmitter configuration
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct MorseConfig {
    /// Fall back to the Cyrillic layout when a character is not Latin
    pub cyrillic_fallback: bool,
    /// Emit a dot/dash trace line per transmitted character
    pub trace: bool,
}

/// Error types for transmitter operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MorseError {
    /// Velocity outside the supported letters-per-minute range
    VelocityOutOfRange,
    /// Character absent from all enabled layouts
    SymbolNotFound,
    /// Pattern table entry contains an unrecognized glyph
    PatternDecode,
    /// Pattern index outside the symbol table
    IndexOutOfRange,
    /// Pin write failed
    Gpio,
}

#[cfg(feature = "std")]
impl core::fmt::Display for MorseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MorseError::VelocityOutOfRange => write!(f, "velocity outside supported range"),
            MorseError::SymbolNotFound => write!(f, "character not in any enabled layout"),
            MorseError::PatternDecode => write!(f, "unrecognized glyph in pattern table"),
            MorseError::IndexOutOfRange => write!(f, "pattern index outside symbol table"),
            MorseError::Gpio => write!(f, "pin write failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MorseError {}
