use std::time::{Duration, Instant};

pub const DEFAULT_CADENCE: Duration = Duration::from_secs(1);

/// Gates the day-rollover check to a fixed cadence.
///
/// The owning event loop polls `due()` every iteration; it returns true at
/// most once per interval. Cooperative by design: there is no background
/// thread, so dropping the session tears the monitor down with it.
#[derive(Debug)]
pub struct DayMonitor {
    cadence: Duration,
    last_checked: Option<Instant>,
}

impl DayMonitor {
    pub fn new(cadence: Duration) -> Self {
        Self {
            cadence,
            last_checked: None,
        }
    }

    pub fn due(&mut self) -> bool {
        let now = Instant::now();
        match self.last_checked {
            Some(last) if now.duration_since(last) < self.cadence => false,
            _ => {
                self.last_checked = Some(now);
                true
            }
        }
    }
}

impl Default for DayMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_CADENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_is_due() {
        let mut monitor = DayMonitor::default();
        assert!(monitor.due());
    }

    #[test]
    fn test_back_to_back_polls_are_gated() {
        let mut monitor = DayMonitor::new(Duration::from_secs(60));
        assert!(monitor.due());
        assert!(!monitor.due());
        assert!(!monitor.due());
    }

    #[test]
    fn test_zero_cadence_always_due() {
        let mut monitor = DayMonitor::new(Duration::ZERO);
        assert!(monitor.due());
        assert!(monitor.due());
    }
}
