//! Blocking Morse transmitter: owns the key output pin and the timing
//! configuration, and converts patterns into timed pin pulses.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::table;
use crate::types::{Element, MorseConfig, MorseError, Polarity, Timing};

/// Slowest supported velocity, letters per minute
pub const MIN_VELOCITY_LPM: u32 = 5;
/// Fastest supported velocity, letters per minute
pub const MAX_VELOCITY_LPM: u32 = 300;
/// Dot duration is this many milliseconds divided by the velocity
const VELOCITY_DIVIDEND_MS: u32 = 3000;

/// Longest pattern in the table (the error marker)
const MAX_PATTERN_LEN: usize = 8;

fn write_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), MorseError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| MorseError::Gpio)
}

fn trace_line(line: &str) {
    #[cfg(feature = "defmt")]
    defmt::trace!("{=str}", line);
    #[cfg(all(feature = "std", not(feature = "defmt")))]
    println!("{line}");
    #[cfg(all(not(feature = "std"), not(feature = "defmt")))]
    let _ = line;
}

/// Blocking Morse transmitter over an embedded-hal output pin and delay.
///
/// Every send operation blocks the caller for the full signal duration;
/// `&mut self` receivers keep sends on one instance serialized. The pin
/// must already be configured as an output by the platform HAL.
pub struct Transmitter<P, D> {
    pin: P,
    delay: D,
    polarity: Polarity,
    timing: Timing,
    config: MorseConfig,
}

impl<P, D> Transmitter<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a transmitter and drive the pin to its idle level.
    ///
    /// Timing starts at the default dot duration of 250 ms with the
    /// standard ratios.
    pub fn new(
        mut pin: P,
        delay: D,
        polarity: Polarity,
        config: MorseConfig,
    ) -> Result<Self, MorseError> {
        write_level(&mut pin, polarity.level(false))?;
        Ok(Self {
            pin,
            delay,
            polarity,
            timing: Timing::default(),
            config,
        })
    }

    /// Create a transmitter with active-low polarity and default config.
    pub fn with_defaults(pin: P, delay: D) -> Result<Self, MorseError> {
        Self::new(pin, delay, Polarity::default(), MorseConfig::default())
    }

    /// Current timing configuration
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Current runtime configuration
    pub fn config(&self) -> &MorseConfig {
        &self.config
    }

    /// Replace the runtime configuration; evaluated on the next send.
    pub fn set_config(&mut self, config: MorseConfig) {
        self.config = config;
    }

    /// Set the transmission velocity in letters per minute.
    ///
    /// Valid range is [5, 300]. The dot duration becomes 3000 / velocity
    /// (truncating) and the other four durations are recomputed from the
    /// fixed ratios. Out of range leaves the timing untouched.
    pub fn set_velocity(&mut self, letters_per_minute: u32) -> Result<(), MorseError> {
        if !(MIN_VELOCITY_LPM..=MAX_VELOCITY_LPM).contains(&letters_per_minute) {
            return Err(MorseError::VelocityOutOfRange);
        }
        self.timing = Timing::from_dot(VELOCITY_DIVIDEND_MS / letters_per_minute);
        Ok(())
    }

    fn set_active(&mut self, active: bool) -> Result<(), MorseError> {
        write_level(&mut self.pin, self.polarity.level(active))
    }

    fn emit(&mut self, element: Element) -> Result<(), MorseError> {
        let hold_ms = match element {
            Element::Dot => self.timing.dot_ms,
            Element::Dash => self.timing.dash_ms,
        };
        self.set_active(true)?;
        self.delay.delay_ms(hold_ms);
        self.set_active(false)?;
        self.delay.delay_ms(self.timing.element_gap_ms);
        Ok(())
    }

    /// Key a single dot: active for the dot duration, then an element gap.
    pub fn emit_dot(&mut self) -> Result<(), MorseError> {
        self.emit(Element::Dot)
    }

    /// Key a single dash: active for the dash duration, then an element gap.
    pub fn emit_dash(&mut self) -> Result<(), MorseError> {
        self.emit(Element::Dash)
    }

    /// Transmit one character.
    ///
    /// Resolution failure returns `SymbolNotFound` without any pin
    /// activity. An unrecognized glyph in the pattern aborts with
    /// `PatternDecode`; pulses already keyed stand (the medium has no
    /// rollback) and the letter gap is skipped. On success the call
    /// blocks for the inter-letter gap before returning.
    pub fn send_char(&mut self, ch: char) -> Result<(), MorseError> {
        let index = table::resolve_index(ch, self.config.cyrillic_fallback)
            .ok_or(MorseError::SymbolNotFound)?;
        let pattern = table::pattern(index)?;

        let mut line: String<MAX_PATTERN_LEN> = String::new();
        for glyph in pattern.chars() {
            let element = Element::from_glyph(glyph).ok_or(MorseError::PatternDecode)?;
            self.emit(element)?;
            if self.config.trace {
                let _ = line.push(element.trace_glyph());
            }
        }
        if self.config.trace {
            trace_line(line.as_str());
        }

        self.delay.delay_ms(self.timing.letter_gap_ms);
        Ok(())
    }

    /// Transmit a word character by character.
    ///
    /// Stops at the first failing character and preserves its error;
    /// later characters are not attempted. The trailing inter-word gap
    /// is always waited exactly once, error or not, to rest the channel.
    pub fn send_word(&mut self, word: &str) -> Result<(), MorseError> {
        let mut result = Ok(());
        for ch in word.chars() {
            if let Err(e) = self.send_char(ch) {
                result = Err(e);
                break;
            }
        }
        self.delay.delay_ms(self.timing.word_gap_ms);
        result
    }

    /// Release the pin and delay peripherals.
    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }
}
