//! Bus capability consumed by the transfer primitive
//!
//! The transfer primitive in [`spi`] does not talk to memory-mapped
//! registers directly. Instead it is written against the [`Bus`] trait,
//! which models the minimal register pair of a byte-wide synchronous serial
//! peripheral: a data register and a ready flag. A board crate implements
//! `Bus` on top of its SPI peripheral; tests implement it with an
//! instrumented fake.
//!
//! [`spi`]: crate::spi

#[cfg(feature = "defmt")]
use defmt::Format;

/// Register-level access to a byte-wide synchronous serial peripheral
///
/// The contract mirrors how such peripherals behave in hardware: writing the
/// data register starts clocking one byte, the ready flag goes high once the
/// byte-time has completed and the data register holds the received byte,
/// and reading the data register clears the flag again.
///
/// Register operations are infallible. A memory-mapped register access
/// cannot fail; what can go wrong (the flag never rising) is handled by the
/// caller's poll budget, not by the bus itself.
pub trait Bus {
    /// Write one byte to the data register, starting a byte-time
    fn write_data(&mut self, byte: u8);

    /// Poll the ready flag
    ///
    /// Returns `true` once the current byte-time has completed and the data
    /// register holds a valid received byte.
    fn ready(&self) -> bool;

    /// Read the data register
    ///
    /// Clears the ready flag as a side effect. Must be called after every
    /// byte-time, even when the received byte is discarded.
    fn read_data(&mut self) -> u8;

    /// Select the bus clock rate
    ///
    /// The DW1000 only tolerates a slow SPI clock until its PLL has locked,
    /// so callers switch between the two prescaler settings at runtime.
    fn set_rate(&mut self, rate: SpiRate);
}

/// Bus clock rate selection
///
/// Maps onto the peripheral's baud rate prescaler. `Slow` must stay below
/// 3 MHz for the DW1000's wake-up phase; `Fast` is whatever the board
/// supports once the chip's PLL is locked.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpiRate {
    /// Prescaled below 3 MHz, safe before PLL lock
    Slow,
    /// Full configured rate
    Fast,
}

/// Scoped interrupt suppression around a bus transfer
///
/// A transfer must not be interleaved with bus traffic originating from an
/// interrupt handler, so the whole header+body loop runs inside one atomic
/// section. The section is released on every exit path, including the
/// timeout path.
pub trait AtomicSection {
    /// Run `f` with interrupts suppressed
    fn with<R>(&mut self, f: impl FnOnce() -> R) -> R;
}

/// [`AtomicSection`] backed by the global `critical-section` implementation
///
/// This is the production choice: on bare metal the linked-in
/// `critical-section` implementation masks interrupts, and in hosted tests
/// the crate's `std` implementation takes a process-wide lock.
#[derive(Copy, Clone, Debug, Default)]
pub struct IrqLock;

impl AtomicSection for IrqLock {
    fn with<R>(&mut self, f: impl FnOnce() -> R) -> R {
        critical_section::with(|_| f())
    }
}
