//! Activation windows for widgets and widget items.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// The `[start_date, end_date]` range during which a widget or item is
/// eligible for display. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationWindow {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

impl ActivationWindow {
    pub fn new(start_date: Option<Timestamp>, end_date: Option<Timestamp>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Whether the window is open at `as_of`.
    ///
    /// False if `start_date` is set and still in the future, or `end_date`
    /// is set and already past. Evaluated at projection time so a page
    /// render reflects the moment of the request, not the query.
    pub fn is_active(&self, as_of: Timestamp) -> bool {
        if let Some(start) = self.start_date {
            if start > as_of {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if end < as_of {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn t0() -> crate::types::Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 7, 20, 0, 0).unwrap()
    }

    #[test]
    fn no_bounds_is_always_active() {
        assert!(ActivationWindow::default().is_active(t0()));
    }

    #[test]
    fn future_start_is_inactive() {
        let w = ActivationWindow::new(Some(t0() + Duration::days(1)), None);
        assert!(!w.is_active(t0()));
    }

    #[test]
    fn past_end_is_inactive() {
        let w = ActivationWindow::new(None, Some(t0() - Duration::days(1)));
        assert!(!w.is_active(t0()));
    }

    #[test]
    fn spanning_window_is_active() {
        let w = ActivationWindow::new(
            Some(t0() - Duration::days(1)),
            Some(t0() + Duration::days(1)),
        );
        assert!(w.is_active(t0()));
    }

    #[test]
    fn bounds_are_inclusive() {
        let w = ActivationWindow::new(Some(t0()), Some(t0()));
        assert!(w.is_active(t0()));
    }

    #[test]
    fn independent_of_wall_clock() {
        // The same window flips purely with the injected reference time.
        let w = ActivationWindow::new(Some(t0()), Some(t0() + Duration::hours(2)));
        assert!(!w.is_active(t0() - Duration::seconds(1)));
        assert!(w.is_active(t0() + Duration::hours(1)));
        assert!(!w.is_active(t0() + Duration::hours(3)));
    }
}
