// ==========================================
// 案件负载排程系统 - 结果投影
// ==========================================
// 职责: 将各经理日程扁平化为有序输出行
// ==========================================

use crate::domain::manager::Manager;
use crate::domain::schedule::ScheduleRow;

pub struct ResultProjector;

impl ResultProjector {
    pub fn new() -> Self {
        Self
    }

    /// 扁平化日程
    ///
    /// day_total 取当日最终总金额，同一天的每行一致
    pub fn project(&self, managers: &[Manager]) -> Vec<ScheduleRow> {
        let mut rows = Vec::new();
        for manager in managers {
            for (day_idx, day) in manager.schedule.iter().enumerate() {
                for item in &day.items {
                    rows.push(ScheduleRow {
                        day_index: day_idx as u32 + 1,
                        worker_name: manager.name.clone(),
                        item_id: item.id,
                        item_label: item.label.clone(),
                        item_weight: item.weight,
                        day_total: day.total,
                        daily_capacity: manager.daily_capacity,
                    });
                }
            }
        }
        rows
    }
}

impl Default for ResultProjector {
    fn default() -> Self {
        Self::new()
    }
}
