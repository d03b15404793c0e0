//! The logger used by the Configuration Manager and its protocol driver.
//!
//! Log records are written as `"{level} - {message}\r\n"` to a serial sink,
//! which is the platform's console UART once [`init()`] has run.

#![no_std]

mod pl011;

pub use pl011::Pl011;

use core::fmt::Write;
use log::{LevelFilter, Record, Metadata, Log, set_logger, set_max_level};
use spin::{Mutex, Once};

/// A logger that writes every record at or above its level to a serial sink.
pub struct SerialLogger<W: Write + Send> {
    sink: Mutex<W>,
    level: LevelFilter,
}

impl<W: Write + Send> SerialLogger<W> {
    pub const fn new(sink: W, level: LevelFilter) -> SerialLogger<W> {
        SerialLogger { sink: Mutex::new(sink), level }
    }

    /// Gives back the sink, e.g., to inspect what was written to it.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write + Send> Log for SerialLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut sink = self.sink.lock();
            // result is discarded because we
            // have no alternative way to signal
            // an issue to the user
            let _ = write!(sink, "{} - {}\r\n", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

// Global logger singleton
static LOGGER: Once<SerialLogger<Pl011>> = Once::new();

/// Initializes the global logger singleton on the console UART
/// and sets it as the system-wide logger for the `log` crate.
///
/// Bootstrapping code must call this as early
/// as possible for all log messages to show up.
///
/// # Safety
///
/// `console_base_address` must be the identity-mapped base address
/// of an initialized PL011 UART.
pub unsafe fn init(console_base_address: usize) -> Result<(), &'static str> {
    if LOGGER.is_completed() {
        return Err("logger: the logger was already initialized");
    }
    let level = platform_config::logging::DEFAULT_LOG_LEVEL;
    let logger = LOGGER.call_once(|| SerialLogger::new(Pl011::new(console_base_address), level));
    set_logger(logger).map_err(|_| "logger: couldn't set logger")?;
    set_max_level(level);
    Ok(())
}


#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::ptr::{addr_of, addr_of_mut, read_volatile};
    use log::Level;
    use self::std::string::String;

    fn log_to_string(logger: &SerialLogger<String>, level: Level, message: &str) {
        logger.log(&Record::builder()
            .args(format_args!("{}", message))
            .level(level)
            .build()
        );
    }

    #[test]
    fn records_are_filtered_and_prefixed_with_their_level() {
        let logger = SerialLogger::new(String::new(), LevelFilter::Info);
        assert!(logger.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
        log_to_string(&logger, Level::Info, "Built the platform repository");
        log_to_string(&logger, Level::Debug, "dropped");
        log_to_string(&logger, Level::Error, "CM object 0x8000000 not found");

        assert_eq!(
            logger.into_inner(),
            "INFO - Built the platform repository\r\nERROR - CM object 0x8000000 not found\r\n",
        );
    }

    #[test]
    fn off_drops_every_record() {
        let logger = SerialLogger::new(String::new(), LevelFilter::Off);
        assert!(!logger.enabled(&Metadata::builder().level(Level::Error).build()));
        log_to_string(&logger, Level::Error, "dropped");
        assert_eq!(logger.into_inner(), "");
    }

    // Stands in for a PL011 register block: DR at 0x00, FR at 0x18 with TXFF clear.
    static mut UART_REGISTERS: [u32; 8] = [0; 8];

    #[test]
    fn init_only_succeeds_once() {
        let base = unsafe { addr_of_mut!(UART_REGISTERS) } as usize;
        assert_eq!(unsafe { init(base) }, Ok(()));
        assert_eq!(unsafe { init(base) }, Err("logger: the logger was already initialized"));

        log::error!("Configuration Manager: couldn't install the protocol");
        let dr = unsafe { read_volatile(addr_of!(UART_REGISTERS[0])) };
        assert_eq!(dr, b'\n' as u32);
    }
}
