//! FrameClock: единственный "previous timestamp"

/// Хранит timestamp предыдущего tick'а (ms)
///
/// `None` до первого tick'а: тогда первый кадр считается нулевой длины.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    previous_ms: Option<f64>,
}

impl FrameClock {
    pub fn previous_ms(&self) -> Option<f64> {
        self.previous_ms
    }

    pub fn is_unset(&self) -> bool {
        self.previous_ms.is_none()
    }

    /// Записывает timestamp только если clock ещё пуст; true если это первый tick
    pub fn prime(&mut self, timestamp_ms: f64) -> bool {
        if self.previous_ms.is_none() {
            self.previous_ms = Some(timestamp_ms);
            true
        } else {
            false
        }
    }

    /// Elapsed с прошлого tick'а (ms), 0 если clock пуст
    pub fn elapsed_ms(&self, timestamp_ms: f64) -> f64 {
        match self.previous_ms {
            Some(previous) => timestamp_ms - previous,
            None => 0.0,
        }
    }

    pub fn record(&mut self, timestamp_ms: f64) {
        self.previous_ms = Some(timestamp_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_only_once() {
        let mut clock = FrameClock::default();
        assert!(clock.is_unset());
        assert!(clock.prime(100.0));
        assert!(!clock.prime(200.0));
        assert_eq!(clock.previous_ms(), Some(100.0));
    }

    #[test]
    fn test_elapsed() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.elapsed_ms(50.0), 0.0);
        clock.record(50.0);
        assert_eq!(clock.elapsed_ms(66.5), 16.5);
    }
}
