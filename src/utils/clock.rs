use chrono::{NaiveDate, Utc};

// Clock abstracts "today" so due-date arithmetic and fines can run against a
// fixed calendar date in tests instead of the wall clock.
pub trait Clock: Sync + Send {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::utils::clock::{Clock, FixedClock, SystemClock};

    #[test]
    fn test_should_pin_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2023, 7, 14).expect("valid date");
        let clock = FixedClock::new(day);
        assert_eq!(day, clock.today());
        assert_eq!(day, clock.today());
    }

    #[test]
    fn test_should_read_system_clock() {
        let clock = SystemClock;
        let today = clock.today();
        assert!(today >= NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"));
    }
}
