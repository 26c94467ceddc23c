// ==========================================
// 案件负载排程系统 - 排程报告
// ==========================================
// 职责: 求解结果 + 日期映射 + 质检汇总 → 报告
// ==========================================

use crate::calendar::{format_date, CalendarResult, WorkCalendar};
use crate::domain::case::CaseItem;
use crate::domain::schedule::{ScheduleRow, SolveOutcome};
use crate::report::summary::{
    daily_summaries, manager_summaries, DailySummary, GlobalValidation, ManagerSummary,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 带日期的排程行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedRow {
    pub date: Option<String>,
    #[serde(flatten)]
    pub row: ScheduleRow,
}

// ==========================================
// ScheduleReport - 排程报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<DatedRow>,
    pub managers: Vec<ManagerSummary>,
    pub daily: Vec<DailySummary>,
    pub validation: GlobalValidation,
}

impl ScheduleReport {
    /// 生成报告
    ///
    /// 日期映射只依赖最大天序号
    pub fn build(
        items: &[CaseItem],
        outcome: &SolveOutcome,
        calendar: &WorkCalendar,
    ) -> CalendarResult<Self> {
        let date_map = calendar.date_map(outcome.max_day_index() as usize)?;

        let rows = outcome
            .rows
            .iter()
            .map(|row| DatedRow {
                date: date_map.get(&row.day_index).map(|d| format_date(*d)),
                row: row.clone(),
            })
            .collect();

        Ok(Self {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            rows,
            managers: manager_summaries(&outcome.managers),
            daily: daily_summaries(&outcome.rows),
            validation: GlobalValidation::compute(items, &outcome.rows),
        })
    }
}
