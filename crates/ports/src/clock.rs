//! Clock trait 定义

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

/// 时钟 trait，用于获取业务意义上的"今天"
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// 审计时间戳
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 系统时钟，按固定 UTC 偏移换算日期
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// 以小时为单位的偏移，越界时退回 UTC
    pub fn with_offset_hours(hours: i32) -> Self {
        let offset = FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix());
        Self::new(offset)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::with_offset_hours(7)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// 固定日期时钟（测试与回放使用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }

    fn now(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().date_naive(), date);
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        let clock = SystemClock::with_offset_hours(48);
        assert_eq!(clock.offset, Utc.fix());
        assert_eq!(SystemClock::default().offset.local_minus_utc(), 7 * 3600);
    }
}
