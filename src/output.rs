//! Output adapters
//!
//! Bridges [`OutputDriver`] to drivers implementing the `smart-leds` write
//! trait (ws2812 over SPI/RMT, apa102, ...).

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;

/// Output driver writing frames through a `smart-leds` driver
///
/// Write errors are not retried, the next frame simply tries again.
pub struct SmartLedsOutput<W> {
    writer: W,
    failed_writes: u32,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Number of frames the driver refused so far
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    /// Get the wrapped driver back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: core::fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb]) {
        if let Err(_err) = self.writer.write(colors.iter().copied()) {
            self.failed_writes = self.failed_writes.saturating_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] driver error: {:?}", _err);
        }
    }
}
