use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Forwards `log` records to the browser developer console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Install the console logger. Call once, before the app renders.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), component_name(record.target()), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Last path segment of a module target, e.g. `frontend::controllers::profile` -> `profile`
fn component_name(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn format_line(level: Level, component: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, component, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name_uses_last_segment() {
        assert_eq!(component_name("finance_dashboard_frontend::controllers::profile"), "profile");
        assert_eq!(component_name("main"), "main");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Error, "profile", "Error fetching categories"),
            "[ERROR] profile: Error fetching categories"
        );
    }
}
