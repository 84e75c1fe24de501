//! Hardware boundary for the transmitter.
//!
//! The transmitter is generic over the two embedded-hal traits
//! re-exported here: a digital output pin (`setPinOutputLevel`) and a
//! blocking delay (`sleepMilliseconds`). Pin-mode configuration happens
//! in the platform HAL before the pin is handed over.

pub use embedded_hal::delay::DelayNs;
pub use embedded_hal::digital::OutputPin;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Recording mock implementations for host tests

    use core::convert::Infallible;
    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::{ErrorType, OutputPin};
    use std::vec::Vec;

    /// Mock output pin recording every level written to it
    #[derive(Debug, Default)]
    pub struct MockPin {
        levels: Vec<bool>,
    }

    impl MockPin {
        pub fn new() -> Self {
            Self::default()
        }

        /// All levels written, in order (true = high)
        pub fn levels(&self) -> &[bool] {
            &self.levels
        }

        /// Most recently written level
        pub fn last_level(&self) -> Option<bool> {
            self.levels.last().copied()
        }

        /// Forget recorded writes (keeps the pin usable)
        pub fn clear(&mut self) {
            self.levels.clear();
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.levels.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.levels.push(true);
            Ok(())
        }
    }

    /// Mock delay recording every hold duration instead of sleeping
    #[derive(Debug, Default)]
    pub struct MockDelay {
        holds_ms: Vec<u32>,
    }

    impl MockDelay {
        pub fn new() -> Self {
            Self::default()
        }

        /// All recorded holds in milliseconds, in order
        pub fn holds_ms(&self) -> &[u32] {
            &self.holds_ms
        }

        pub fn clear(&mut self) {
            self.holds_ms.clear();
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.holds_ms.push(ns / 1_000_000);
        }

        // Record whole milliseconds directly so the log is exact.
        fn delay_ms(&mut self, ms: u32) {
            self.holds_ms.push(ms);
        }
    }
}
