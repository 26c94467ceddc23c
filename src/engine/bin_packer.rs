// ==========================================
// 案件负载排程系统 - 日产能装箱引擎
// ==========================================
// 阶段二: 首次适应递减 (First-Fit-Decreasing)
// 输入: 单个经理的 assigned_items + daily_capacity
// 输出: 更新经理的 schedule（按开启顺序的日程）
// 红线: 每个案件恰好出现在一天中
// ==========================================

use crate::domain::case::CaseItem;
use crate::domain::manager::{DayBin, DayCapacity, Manager};
use crate::domain::types::OverflowPolicy;
use crate::engine::error::{EngineError, EngineResult};
use tracing::{debug, instrument, warn};

// ==========================================
// BinPacker - 日产能装箱引擎
// ==========================================
pub struct BinPacker {
    policy: OverflowPolicy,
}

impl BinPacker {
    /// 默认策略（超大案件单独占用一天）
    pub fn new() -> Self {
        Self::with_policy(OverflowPolicy::Allow)
    }

    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 为单个经理生成日程
    ///
    /// 规则:
    /// 1) 已分配案件按金额降序（稳定排序，同额保持分配顺序）
    /// 2) 依次放入第一个放得下的日（按开启顺序扫描）
    /// 3) 都放不下则开启新的一天
    /// 4) 单个案件超过日上限: Allow 策略下单独成日，Strict 策略下报错
    ///
    /// # 错误
    /// - `EngineError::OversizedItem`: 仅 Strict 策略
    #[instrument(skip(self, manager), fields(
        manager = %manager.name,
        daily_capacity = manager.daily_capacity,
        assigned_count = manager.assigned_items.len()
    ))]
    pub fn pack(&self, manager: &mut Manager) -> EngineResult<()> {
        let mut sorted: Vec<CaseItem> = manager.assigned_items.clone();
        sorted.sort_by(|a, b| b.weight.cmp(&a.weight));

        let capacity = manager.daily_capacity;
        let mut days: Vec<DayBin> = Vec::new();

        for item in sorted {
            if let Some(day) = days.iter_mut().find(|d| d.can_add(item.weight, capacity)) {
                day.push(item);
                continue;
            }

            if item.weight > capacity {
                self.check_oversized(&manager.name, &item, capacity)?;
            }
            days.push(DayBin::open_with(item));
        }

        for (idx, day) in days.iter().enumerate() {
            debug!(
                day = idx + 1,
                items = day.len(),
                total = day.total,
                remaining = day.remaining(capacity),
                overflow = day.is_overflow(capacity),
                "日程装箱结果"
            );
        }

        manager.schedule = days;
        Ok(())
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 超大案件按策略处理
    fn check_oversized(&self, manager: &str, item: &CaseItem, capacity: u64) -> EngineResult<()> {
        match self.policy {
            OverflowPolicy::Allow => {
                warn!(
                    manager,
                    case = %item.label,
                    weight = item.weight,
                    daily_capacity = capacity,
                    "案件金额超过日上限，单独占用一天"
                );
                Ok(())
            }
            OverflowPolicy::Strict => Err(EngineError::OversizedItem {
                manager: manager.to_string(),
                label: item.label.clone(),
                weight: item.weight,
                daily_capacity: capacity,
            }),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for BinPacker {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(capacity: u64, weights: &[u64]) -> Manager {
        let mut manager = Manager::new("M", capacity, 1);
        for (i, w) in weights.iter().enumerate() {
            manager.assign(CaseItem::new(i as u64, *w, format!("CASE-{}", i)));
        }
        manager
    }

    fn day_weights(manager: &Manager) -> Vec<Vec<u64>> {
        manager
            .schedule
            .iter()
            .map(|d| d.items.iter().map(|i| i.weight).collect())
            .collect()
    }

    #[test]
    fn test_first_fit_decreasing() {
        let mut manager = manager_with(100, &[30, 70, 50, 40, 10]);
        BinPacker::new().pack(&mut manager).unwrap();

        // 降序: 70, 50, 40, 30, 10
        // 70 → D1; 50 → D2; 40 → D2(90); 30 → D1(100); 10 → D2(100)
        assert_eq!(day_weights(&manager), vec![vec![70, 30], vec![50, 40, 10]]);
        assert_eq!(manager.schedule[0].total, 100);
        assert_eq!(manager.schedule[1].total, 100);
    }

    #[test]
    fn test_first_fit_prefers_earlier_day() {
        let mut manager = manager_with(100, &[60, 60, 20]);
        BinPacker::new().pack(&mut manager).unwrap();
        // 20 放进第一天而不是第二天
        assert_eq!(day_weights(&manager), vec![vec![60, 20], vec![60]]);
    }

    #[test]
    fn test_oversized_item_alone_by_default() {
        let mut manager = manager_with(50, &[80, 10]);
        BinPacker::new().pack(&mut manager).unwrap();
        assert_eq!(day_weights(&manager), vec![vec![80], vec![10]]);
        assert!(manager.schedule[0].is_overflow(50));
        assert_eq!(manager.schedule[0].remaining(50), 0);
        assert_eq!(manager.schedule[1].remaining(50), 40);
    }

    #[test]
    fn test_oversized_item_strict() {
        let mut manager = manager_with(50, &[80]);
        let err = BinPacker::with_policy(OverflowPolicy::Strict)
            .pack(&mut manager)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::OversizedItem {
                manager: "M".to_string(),
                label: "CASE-0".to_string(),
                weight: 80,
                daily_capacity: 50,
            }
        );
    }

    #[test]
    fn test_exact_capacity_fits() {
        let mut manager = manager_with(50, &[50, 25, 25]);
        BinPacker::with_policy(OverflowPolicy::Strict)
            .pack(&mut manager)
            .unwrap();
        assert_eq!(day_weights(&manager), vec![vec![50], vec![25, 25]]);
    }

    #[test]
    fn test_no_items_no_days() {
        let mut manager = manager_with(50, &[]);
        BinPacker::new().pack(&mut manager).unwrap();
        assert!(manager.schedule.is_empty());
    }
}
