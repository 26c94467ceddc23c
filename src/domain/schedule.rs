// ==========================================
// 案件负载排程系统 - 排程输出模型
// ==========================================
// 职责: 扁平化输出行 + 求解结果快照
// ==========================================

use crate::domain::manager::Manager;
use serde::{Deserialize, Serialize};

// ==========================================
// ScheduleRow - 排程输出行
// ==========================================
// 行序: 经理输入顺序 → 日开启顺序 → 日内放入顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub day_index: u32,      // 第几天（按经理独立计数，从 1 开始）
    pub worker_name: String, // 经理名称
    pub item_id: u64,        // 案件ID
    pub item_label: String,  // 案件编号
    pub item_weight: u64,    // 计费金额
    pub day_total: u64,      // 当日最终总金额
    pub daily_capacity: u64, // 日上限
}

// ==========================================
// SolveOutcome - 求解结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOutcome {
    pub rows: Vec<ScheduleRow>,
    pub managers: Vec<Manager>, // 最终经理快照（含目标/实际金额与日程）
}

impl SolveOutcome {
    /// 所有行中最大的天序号（无行时为 0）
    pub fn max_day_index(&self) -> u32 {
        max_day_index(&self.rows)
    }

    pub fn total_scheduled_weight(&self) -> u64 {
        self.rows.iter().map(|r| r.item_weight).sum()
    }
}

pub fn max_day_index(rows: &[ScheduleRow]) -> u32 {
    rows.iter().map(|r| r.day_index).max().unwrap_or(0)
}
