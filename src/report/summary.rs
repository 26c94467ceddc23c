// ==========================================
// 案件负载排程系统 - 质检汇总
// ==========================================
// 职责: 全局校验、经理汇总、每日汇总
// ==========================================

use crate::domain::case::{total_weight, CaseItem};
use crate::domain::manager::Manager;
use crate::domain::schedule::ScheduleRow;
use crate::domain::types::ValidationStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// GlobalValidation - 全局校验
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalValidation {
    pub input_cases: usize,
    pub scheduled_cases: usize,
    pub input_value: u64,
    pub scheduled_value: u64,
    pub status: ValidationStatus,
}

impl GlobalValidation {
    /// 合计溢出时金额按 u64::MAX 截断，并判定为不一致
    pub fn compute(items: &[CaseItem], rows: &[ScheduleRow]) -> Self {
        let input_value = total_weight(items);
        let scheduled_value = rows
            .iter()
            .try_fold(0u64, |acc, r| acc.checked_add(r.item_weight));

        let status = match (input_value, scheduled_value) {
            (Some(input), Some(scheduled)) if items.len() == rows.len() && input == scheduled => {
                ValidationStatus::Match
            }
            _ => ValidationStatus::Mismatch,
        };

        Self {
            input_cases: items.len(),
            scheduled_cases: rows.len(),
            input_value: input_value.unwrap_or(u64::MAX),
            scheduled_value: scheduled_value.unwrap_or(u64::MAX),
            status,
        }
    }
}

// ==========================================
// ManagerSummary - 经理汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerSummary {
    pub manager: String,
    pub target_load: u64,
    pub actual_load: u64,
    pub variance: i128,         // 实际 - 目标
    pub daily_limit: u64,
    pub utilization_pct: f64,   // 实际 / 目标 * 100，保留两位小数
    pub days: usize,
}

impl ManagerSummary {
    pub fn from_manager(manager: &Manager) -> Self {
        let utilization_pct = if manager.target_total > 0 {
            let pct = manager.current_total as f64 / manager.target_total as f64 * 100.0;
            (pct * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            manager: manager.name.clone(),
            target_load: manager.target_total,
            actual_load: manager.current_total,
            variance: manager.current_total as i128 - manager.target_total as i128,
            daily_limit: manager.daily_capacity,
            utilization_pct,
            days: manager.day_count(),
        }
    }
}

pub fn manager_summaries(managers: &[Manager]) -> Vec<ManagerSummary> {
    managers.iter().map(ManagerSummary::from_manager).collect()
}

// ==========================================
// DailySummary - 每日汇总（跨经理按天序号合计）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub day_index: u32,
    pub total_load: u64,
}

pub fn daily_summaries(rows: &[ScheduleRow]) -> Vec<DailySummary> {
    let mut totals: BTreeMap<u32, u64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.day_index).or_insert(0) += row.item_weight;
    }
    totals
        .into_iter()
        .map(|(day_index, total_load)| DailySummary {
            day_index,
            total_load,
        })
        .collect()
}
