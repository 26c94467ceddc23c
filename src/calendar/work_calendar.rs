// ==========================================
// 案件负载排程系统 - 工作日历
// ==========================================
// 职责: 将第 N 个工作日（从 1 开始）映射为日历日期
// 规则: 跳过非工作星期与节假日，起始日期本身可被选中
// ==========================================

use crate::calendar::error::{CalendarError, CalendarResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::warn;

/// 日期输出格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 向前查找的最大天数
pub const MAX_HORIZON_DAYS: i64 = 365 * 2;

// ==========================================
// WorkCalendar - 工作日历
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendar {
    pub start_date: NaiveDate,
    pub working_days: HashSet<Weekday>,
    pub holidays: BTreeSet<NaiveDate>,
}

impl WorkCalendar {
    /// 周一至周五、无节假日
    pub fn weekdays_from(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            working_days: [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]
            .into_iter()
            .collect(),
            holidays: BTreeSet::new(),
        }
    }

    pub fn with_holidays<I: IntoIterator<Item = NaiveDate>>(mut self, holidays: I) -> Self {
        self.holidays.extend(holidays);
        self
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_days.contains(&date.weekday()) && !self.holidays.contains(&date)
    }

    /// 从起始日期开始的前 num_days 个工作日
    pub fn dates_for(&self, num_days: usize) -> CalendarResult<Vec<NaiveDate>> {
        if num_days == 0 {
            return Ok(Vec::new());
        }
        if self.working_days.is_empty() {
            return Err(CalendarError::NoWorkingDays);
        }

        let exceeded = |found: usize| CalendarError::HorizonExceeded {
            start: self.start_date,
            found,
            requested: num_days,
        };

        // 查找窗口截止于日历上限
        let horizon = self
            .start_date
            .checked_add_signed(Duration::days(MAX_HORIZON_DAYS))
            .unwrap_or(NaiveDate::MAX);

        let mut dates = Vec::with_capacity(num_days);
        let mut current = self.start_date;

        loop {
            if self.is_working_day(current) {
                dates.push(current);
                if dates.len() == num_days {
                    return Ok(dates);
                }
            }
            current = match current.succ_opt() {
                Some(next) if next <= horizon => next,
                _ => return Err(exceeded(dates.len())),
            };
        }
    }

    /// 天序号（从 1 开始） → 日期
    pub fn date_map(&self, num_days: usize) -> CalendarResult<BTreeMap<u32, NaiveDate>> {
        Ok(self
            .dates_for(num_days)?
            .into_iter()
            .enumerate()
            .map(|(idx, date)| (idx as u32 + 1, date))
            .collect())
    }
}

// ==========================================
// 解析辅助
// ==========================================

/// 英文星期名称 → Weekday（不区分大小写，接受缩写）
pub fn parse_weekday(name: &str) -> CalendarResult<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| CalendarError::InvalidWeekday(name.to_string()))
}

/// 节假日文本：每行一个 YYYY-MM-DD，空行忽略，无法解析的行记录警告后忽略
pub fn parse_holidays(text: &str) -> BTreeSet<NaiveDate> {
    let mut holidays = BTreeSet::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match NaiveDate::parse_from_str(line, DATE_FORMAT) {
            Ok(date) => {
                holidays.insert(date);
            }
            Err(e) => warn!(line, error = %e, "无法解析的节假日，已忽略"),
        }
    }
    holidays
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
