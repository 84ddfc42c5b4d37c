use std::time::{Duration, Instant};

/// Absolute point in time after which the search stops expanding nodes.
///
/// Checked once per node. A budget too large to represent as an `Instant`
/// never expires.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now().checked_add(budget),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        match self.at {
            Some(at) => Instant::now() >= at,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_expired() {
        assert!(Deadline::after(Duration::ZERO).is_expired());
    }

    #[test]
    fn test_long_budget_is_not_expired() {
        assert!(!Deadline::after(Duration::from_secs(3600)).is_expired());
    }

    #[test]
    fn test_unrepresentable_budget_never_expires() {
        let deadline = Deadline::after(Duration::MAX);
        assert!(deadline.at.is_none());
        assert!(!deadline.is_expired());
    }
}
