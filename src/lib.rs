//! Platform port layer for the DW1000 UWB transceiver
//!
//! This crate is the glue between a board and the DW1000 device driver
//! sitting above it. Its centerpiece is the blocking SPI transfer primitive
//! in [`spi`]: header+body framed [`send`] and [`receive`] operations that
//! move bytes across the bus one byte-time at a time, spinning on the
//! peripheral's ready flag, with the whole frame guarded against interrupt
//! preemption. Around it sit the board bring-up pieces the Decawave port
//! layer traditionally carries: reset-line pulsing, the IRQ gate, and a
//! USART debug console.
//!
//! The crate is built on top of [`embedded-hal`] and talks to hardware only
//! through injected capabilities ([`Bus`], [`AtomicSection`], pins, delays),
//! so it is portable and testable off-target.
//!
//! There is no protocol logic here: register read/write framing, scheduling
//! and retry policy all belong to the driver above this layer.
//!
//! [`send`]: spi::SpiPort::send
//! [`receive`]: spi::SpiPort::receive
//! [`embedded-hal`]: https://crates.io/crates/embedded-hal
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bus;
pub mod configs;
pub mod console;
pub mod port;
pub mod spi;

/// Redirection of nb::block
pub mod block {
    pub use nb::block;
}

pub use crate::{
    block::block,
    bus::{AtomicSection, Bus, IrqLock, SpiRate},
    configs::{Capabilities, PollLimit, SpiConfig},
    console::Console,
    port::{reset_pulse, IrqLine, Port},
    spi::{Error, SpiPort},
};
