//! USART debug output helpers
//!
//! Decawave's platform code prints over a USART behind a compile-time
//! switch. Here the switch is the `usart` capability, and the output path is
//! a thin wrapper over an `embedded-hal-nb` serial writer: each byte is
//! written and then the peripheral is spun on until it accepts the next one,
//! the same busy-wait the vendor code performs on the transmit-complete
//! flag.
//!
//! The `core::fmt::Write` impl stands in for the vendor printf helper
//! without the heap; formatting goes byte by byte straight to the wire.

use core::fmt;

use embedded_hal_nb::serial::Write;

use crate::configs::Capabilities;
use crate::spi::Error;

/// Debug console over a serial writer
pub struct Console<W> {
    serial: W,
}

impl<W> Console<W>
where
    W: Write<u8>,
{
    /// Open the console
    ///
    /// Fails with [`Error::PeripheralNotReady`] when the board's capability
    /// set says no USART was brought up.
    pub fn open(serial: W, capabilities: &Capabilities) -> Result<Self, Error> {
        if !capabilities.usart {
            return Err(Error::PeripheralNotReady);
        }

        Ok(Console { serial })
    }

    /// Write one byte, spinning until the peripheral accepts it
    pub fn putc(&mut self, byte: u8) -> Result<(), W::Error> {
        nb::block!(self.serial.write(byte))
    }

    /// Write a string, byte by byte
    pub fn puts(&mut self, s: &str) -> Result<(), W::Error> {
        for byte in s.bytes() {
            self.putc(byte)?;
        }

        Ok(())
    }

    /// Spin until all queued output has left the peripheral
    pub fn flush(&mut self) -> Result<(), W::Error> {
        nb::block!(self.serial.flush())
    }

    /// Close the console, returning the serial writer
    pub fn close(self) -> W {
        self.serial
    }
}

impl<W> fmt::Write for Console<W>
where
    W: Write<u8>,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.puts(s).map_err(|_| fmt::Error)
    }
}
