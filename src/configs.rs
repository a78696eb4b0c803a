//! Configuration structs for the port layer
//!
//! This module houses the datastructures that control how the port layer is
//! brought up and how transfers poll the bus. The configs are passed to
//! [`SpiPort::open`] and [`Console::open`].
//!
//! [`SpiPort::open`]: crate::spi::SpiPort::open
//! [`Console::open`]: crate::console::Console::open

#[cfg(feature = "defmt")]
use defmt::Format;

/// The set of optional peripherals the board brought up at startup
///
/// Decawave's EVB1000 platform code selects optional peripherals at compile
/// time. Here the choice is a runtime fact: the board's init code records
/// what it actually configured, and the port layer fails fast when asked to
/// use a peripheral that is absent.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    /// The SPI peripheral is configured (clock, mode, master role)
    pub spi: bool,
    /// A USART is configured for debug output
    pub usart: bool,
    /// A DMA controller is available
    ///
    /// Enumerated for completeness; this layer never drives DMA transfers.
    pub dma: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities {
            spi: true,
            usart: false,
            dma: false,
        }
    }
}

/// Per-byte poll budget for the bus-ready flag
///
/// `Unbounded` matches Decawave's platform code: the transfer spins until
/// the flag rises, and a stuck peripheral hangs the calling thread. This is
/// the default, so switching to a bounded budget is always an explicit
/// configuration decision and never a silent behavior change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PollLimit {
    /// Spin on the ready flag forever
    Unbounded,
    /// Allow at most this many failed polls per byte before reporting
    /// [`Error::Timeout`]
    ///
    /// [`Error::Timeout`]: crate::spi::Error::Timeout
    Bounded(u32),
}

impl Default for PollLimit {
    fn default() -> Self {
        PollLimit::Unbounded
    }
}

/// Configuration for [`SpiPort`]
///
/// [`SpiPort`]: crate::spi::SpiPort
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiConfig {
    /// Which optional peripherals the board brought up
    pub capabilities: Capabilities,
    /// Poll budget applied to every byte of every transfer
    pub poll_limit: PollLimit,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_is_spi_only_and_unbounded() {
        let config = SpiConfig::default();

        assert!(config.capabilities.spi);
        assert!(!config.capabilities.usart);
        assert!(!config.capabilities.dma);
        assert_eq!(config.poll_limit, PollLimit::Unbounded);
    }
}
