//! # Schedule
//!
//! Clock-driven rules: opening hours and the holiday discount.
//!
//! ## Opening Window (defaults)
//! ```text
//!   00:00          08:00                        20:00          24:00
//!     │──── closed ──│◄──────── online ──────────►│──── closed ───│
//!                  inclusive                  exclusive
//! ```

use std::sync::Arc;

use chrono::{Datelike, Timelike};
use tracing::debug;

use crate::config::{HoursSettings, PromotionSettings, ShopConfig};
use crate::ports::Clock;

/// Answers time-of-day and date questions against the injected clock.
pub struct ScheduleService {
    clock: Arc<dyn Clock>,
    hours: HoursSettings,
    promotions: PromotionSettings,
}

impl ScheduleService {
    /// Creates a service using the default hours and promotion.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_config(clock, &ShopConfig::default())
    }

    /// Creates a service using the hours and promotion from `config`.
    pub fn with_config(clock: Arc<dyn Clock>, config: &ShopConfig) -> Self {
        ScheduleService {
            clock,
            hours: config.hours,
            promotions: config.promotions,
        }
    }

    /// True while the store is open.
    pub fn is_online(&self) -> bool {
        let hour = self.clock.now().hour();
        self.hours.contains(hour)
    }

    /// The discount in effect right now: the holiday rate on the holiday,
    /// zero on every other day.
    pub fn get_discount(&self) -> f64 {
        let today = self.clock.now().date();
        let promo = &self.promotions;

        if today.month() == promo.holiday_month && today.day() == promo.holiday_day {
            debug!(%today, discount = promo.holiday_discount, "Holiday discount active");
            promo.holiday_discount
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockClock;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn schedule_at(now: NaiveDateTime) -> ScheduleService {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        ScheduleService::new(Arc::new(clock))
    }

    #[test]
    fn test_is_online_boundaries() {
        assert!(!schedule_at(at(1, 1, 7, 59)).is_online());
        assert!(schedule_at(at(1, 1, 8, 0)).is_online());
        assert!(schedule_at(at(1, 1, 19, 59)).is_online());
        assert!(!schedule_at(at(1, 1, 20, 0)).is_online());
        assert!(!schedule_at(at(1, 1, 20, 1)).is_online());
    }

    #[test]
    fn test_holiday_discount_all_day() {
        assert_eq!(schedule_at(at(12, 25, 0, 1)).get_discount(), 0.2);
        assert_eq!(schedule_at(at(12, 25, 23, 59)).get_discount(), 0.2);
    }

    #[test]
    fn test_no_discount_around_holiday() {
        assert_eq!(schedule_at(at(12, 24, 23, 59)).get_discount(), 0.0);
        assert_eq!(schedule_at(at(12, 26, 0, 0)).get_discount(), 0.0);
    }

    #[test]
    fn test_custom_config() {
        let mut config = ShopConfig::default();
        config.hours.open_hour = 6;
        config.promotions.holiday_month = 7;
        config.promotions.holiday_day = 4;
        config.promotions.holiday_discount = 0.5;

        let mut clock = MockClock::new();
        clock.expect_now().return_const(at(7, 4, 6, 30));
        let schedule = ScheduleService::with_config(Arc::new(clock), &config);

        assert!(schedule.is_online());
        assert_eq!(schedule.get_discount(), 0.5);
    }
}
