// ==========================================
// 案件负载排程系统 - 日历错误类型
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("未配置任何工作日")]
    NoWorkingDays,

    #[error("工作日映射超出两年范围: 起始 {start}, 仅找到 {found}/{requested} 个工作日")]
    HorizonExceeded {
        start: NaiveDate,
        found: usize,
        requested: usize,
    },

    #[error("无效的星期名称: {0}")]
    InvalidWeekday(String),
}

pub type CalendarResult<T> = Result<T, CalendarError>;
