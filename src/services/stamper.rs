//! ID 与时间戳生成 - 业务能力层

use chrono::{DateTime, Local};

/// ISO-8601 时间戳格式（本地时间，微秒精度）
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// 生成本次运行内唯一的 ID 和创建时间
///
/// ID 以当前微秒时间戳为种子并严格递增，同一微秒内创建的两条记录也不会重复
#[derive(Debug, Clone)]
pub struct Stamper {
    last_id: i64,
    fixed_time: Option<DateTime<Local>>,
}

/// 一次生成的 ID 与时间戳
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: i64,
    pub created_at: String,
}

impl Stamper {
    /// 使用系统时钟
    pub fn new() -> Self {
        Self {
            last_id: 0,
            fixed_time: None,
        }
    }

    /// 使用固定时间，输出可复现
    pub fn fixed(time: DateTime<Local>) -> Self {
        Self {
            last_id: 0,
            fixed_time: Some(time),
        }
    }

    fn now(&self) -> DateTime<Local> {
        self.fixed_time.unwrap_or_else(Local::now)
    }

    /// 生成下一个 ID 及对应的创建时间
    pub fn next(&mut self) -> Stamp {
        let now = self.now();
        self.last_id = now.timestamp_micros().max(self.last_id + 1);
        Stamp {
            id: self.last_id,
            created_at: format_timestamp(&now),
        }
    }

    /// 只生成时间戳，不消耗 ID
    pub fn timestamp(&self) -> String {
        format_timestamp(&self.now())
    }
}

impl Default for Stamper {
    fn default() -> Self {
        Self::new()
    }
}

fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_within_run() {
        let mut stamper = Stamper::new();
        let ids: HashSet<i64> = (0..1000).map(|_| stamper.next().id).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_fixed_clock() {
        let time = Local.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap();
        let mut stamper = Stamper::fixed(time);

        let first = stamper.next();
        let second = stamper.next();
        assert_eq!(first.id, time.timestamp_micros());
        assert_eq!(second.id, first.id + 1);
        assert_eq!(first.created_at, "2025-06-01T08:30:00.000000");
        assert_eq!(stamper.timestamp(), first.created_at);
    }
}
