//! Board bring-up for the DW1000 reset and interrupt lines
//!
//! Everything in this module is glue around two board facts: the RSTn line
//! wired to a GPIO, and the DW1000 IRQ line gated by the interrupt
//! controller. The SPI transfer path does not depend on any of it; it is
//! invoked alongside the transfers during chip bring-up.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// How long RSTn is held low, in milliseconds
const RESET_PULSE_MS: u32 = 2;

/// Pulse the DW1000 RSTn line
///
/// Drives the line low, holds it for 2 ms, then releases it. RSTn must not
/// be driven high: configure the pin open-drain so that `set_high` releases
/// the line and the chip's internal pull brings it back up.
pub fn reset_pulse<RST, D>(pin: &mut RST, delay: &mut D) -> Result<(), RST::Error>
where
    RST: OutputPin,
    D: DelayNs,
{
    pin.set_low()?;
    delay.delay_ms(RESET_PULSE_MS);
    pin.set_high()?;

    Ok(())
}

/// Gate for the DW1000 IRQ line at the interrupt controller
///
/// Implemented per target on top of whatever the board uses to mask the
/// external interrupt line (EXTI, NVIC, GPIO interrupt enable, ...).
pub trait IrqLine {
    /// Unmask the interrupt line
    fn enable(&mut self);

    /// Mask the interrupt line
    fn disable(&mut self);

    /// Whether the line is currently unmasked
    fn is_enabled(&self) -> bool;
}

/// The DW1000's board-side lines, bundled
///
/// Owns the reset pin, a delay source for the reset pulse, and the IRQ
/// gate. Like [`SpiPort`], the bundle is a single-owner handle: whoever
/// holds it owns the chip's sideband lines.
///
/// [`SpiPort`]: crate::spi::SpiPort
pub struct Port<RST, D, IRQ> {
    reset: RST,
    delay: D,
    irq: IRQ,
}

impl<RST, D, IRQ> Port<RST, D, IRQ>
where
    RST: OutputPin,
    D: DelayNs,
    IRQ: IrqLine,
{
    /// Bundle the board-side lines
    pub fn new(reset: RST, delay: D, irq: IRQ) -> Self {
        Port { reset, delay, irq }
    }

    /// Hardware-reset the chip via the RSTn line
    pub fn reset(&mut self) -> Result<(), RST::Error> {
        reset_pulse(&mut self.reset, &mut self.delay)
    }

    /// Unmask the DW1000 IRQ line
    pub fn enable_irq(&mut self) {
        self.irq.enable();
    }

    /// Mask the DW1000 IRQ line
    pub fn disable_irq(&mut self) {
        self.irq.disable();
    }

    /// Whether the DW1000 IRQ line is unmasked
    pub fn irq_enabled(&self) -> bool {
        self.irq.is_enabled()
    }

    /// Dissolve the bundle, returning the lines
    pub fn free(self) -> (RST, D, IRQ) {
        (self.reset, self.delay, self.irq)
    }
}
