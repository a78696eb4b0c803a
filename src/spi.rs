//! Blocking SPI transfer primitive
//!
//! This module implements the header+body transfer convention used by the
//! Decawave driver API: a short command/address prefix is clocked out first
//! (its response bytes are meaningless and discarded), followed by the
//! payload, which is either written out or clocked in with dummy writes.
//!
//! The port has exactly two states, idle and transferring. A call to
//! [`SpiPort::send`] or [`SpiPort::receive`] runs the whole frame to
//! completion (or to a poll timeout) before returning; there is no retry or
//! backoff state, and no write is issued before the previous byte's ready
//! flag has been observed.
//!
//! Register read/write framing (building the header for a given register)
//! belongs to the device driver sitting on top of this layer, not here.

use core::fmt;
use core::fmt::{Display, Formatter};

#[cfg(feature = "defmt")]
use defmt::Format;

use crate::bus::{AtomicSection, Bus, IrqLock, SpiRate};
use crate::configs::{PollLimit, SpiConfig};

/// An error that can occur when opening the port or running a transfer
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Error {
    /// The SPI peripheral was never brought up by the board's init code
    PeripheralNotReady,

    /// The bus-ready flag was not observed within the configured poll budget
    ///
    /// Only reported under [`PollLimit::Bounded`]; the default unbounded
    /// configuration spins instead.
    Timeout,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Single-owner handle to the SPI bus
///
/// Owning the handle is what serializes access to the bus: there is one
/// `SpiPort` per peripheral, and whoever holds it is the one caller allowed
/// to transfer. The port is generic over the [`Bus`] capability and the
/// [`AtomicSection`] used to keep interrupt handlers off the bus while a
/// frame is in flight.
pub struct SpiPort<B, A = IrqLock> {
    bus: B,
    atomic: A,
    config: SpiConfig,
}

impl<B> SpiPort<B, IrqLock>
where
    B: Bus,
{
    /// Open the port with interrupt suppression via `critical-section`
    ///
    /// Fails with [`Error::PeripheralNotReady`] when the capability set says
    /// the SPI peripheral was never configured.
    pub fn open(bus: B, config: SpiConfig) -> Result<Self, Error> {
        Self::open_with(bus, IrqLock, config)
    }
}

impl<B, A> SpiPort<B, A>
where
    B: Bus,
    A: AtomicSection,
{
    /// Open the port with a caller-supplied atomic section
    pub fn open_with(bus: B, atomic: A, config: SpiConfig) -> Result<Self, Error> {
        if !config.capabilities.spi {
            return Err(Error::PeripheralNotReady);
        }

        Ok(SpiPort {
            bus,
            atomic,
            config,
        })
    }

    /// Clock out `header` then `body`, in order
    ///
    /// Every byte is written to the data register, the ready flag is polled
    /// until it rises, and the received byte is discarded. The discard is
    /// not optional: reading the data register is what clears the flag.
    ///
    /// The whole frame runs inside one atomic section, so an interrupt
    /// handler can never interleave its own bus traffic mid-frame. An empty
    /// header and empty body perform zero bus writes and succeed.
    pub fn send(&mut self, header: &[u8], body: &[u8]) -> Result<(), Error> {
        let bus = &mut self.bus;
        let limit = self.config.poll_limit;

        self.atomic.with(|| {
            for &byte in header {
                transfer_byte(bus, byte, limit)?;
            }
            for &byte in body {
                transfer_byte(bus, byte, limit)?;
            }
            Ok(())
        })
    }

    /// Clock out `header`, then clock `read.len()` bytes into `read`
    ///
    /// The header phase is identical to [`send`]: response bytes clocked in
    /// while the header goes out are discarded and never stored in `read`.
    /// The body phase writes `0x00` dummies to drive the clock and stores
    /// each response into `read[i]`, in order.
    ///
    /// On success, valid data always begins at `read[0]`.
    ///
    /// [`send`]: SpiPort::send
    pub fn receive(&mut self, header: &[u8], read: &mut [u8]) -> Result<(), Error> {
        let bus = &mut self.bus;
        let limit = self.config.poll_limit;

        self.atomic.with(|| {
            for &byte in header {
                transfer_byte(bus, byte, limit)?;
            }
            for slot in read.iter_mut() {
                *slot = transfer_byte(bus, 0x00, limit)?;
            }
            Ok(())
        })
    }

    /// Select the bus clock rate
    ///
    /// Use [`SpiRate::Slow`] until the DW1000's PLL has locked.
    pub fn set_rate(&mut self, rate: SpiRate) {
        self.bus.set_rate(rate);
    }

    /// Allow access to the underlying bus
    pub fn bus(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Close the port, returning the bus
    pub fn close(self) -> B {
        self.bus
    }
}

/// One byte-time: write, spin on the ready flag, read back
///
/// Returns the received byte so the caller decides whether it is payload or
/// a dummy. The read happens on every path because it clears the flag.
fn transfer_byte<B: Bus>(bus: &mut B, byte: u8, limit: PollLimit) -> Result<u8, Error> {
    bus.write_data(byte);

    match limit {
        PollLimit::Unbounded => while !bus.ready() {},
        PollLimit::Bounded(attempts) => {
            let mut remaining = attempts;
            while !bus.ready() {
                remaining = remaining.checked_sub(1).ok_or(Error::Timeout)?;
            }
        }
    }

    Ok(bus.read_data())
}
