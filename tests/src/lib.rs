//! Host-based integration tests for `morse-core`.
//!
//! Exercises the public API through the recording mocks: velocity
//! properties across the whole supported range and full pulse-train
//! scenarios.

#[cfg(test)]
mod transmission_tests;
#[cfg(test)]
mod velocity_tests;

#[cfg(test)]
pub(crate) fn transmitter(
) -> morse_core::Transmitter<morse_core::hal::mock::MockPin, morse_core::hal::mock::MockDelay> {
    morse_core::Transmitter::new(
        morse_core::hal::mock::MockPin::new(),
        morse_core::hal::mock::MockDelay::new(),
        morse_core::Polarity::ActiveHigh,
        morse_core::MorseConfig::default(),
    )
    .unwrap()
}
