// ==========================================
// 案件负载排程系统 - 日历层
// ==========================================
// 职责: 天序号 → 工作日期映射
// ==========================================

pub mod error;
pub mod work_calendar;

pub use error::{CalendarError, CalendarResult};
pub use work_calendar::{format_date, parse_holidays, parse_weekday, WorkCalendar, DATE_FORMAT};
