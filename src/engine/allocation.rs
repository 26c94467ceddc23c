// ==========================================
// 案件负载排程系统 - 比例分配引擎
// ==========================================
// 阶段一: 按比例计算目标金额，大额优先贪心分配
// 输入: 案件列表（有序） + 经理列表（有序）
// 输出: 更新经理的 target_total / current_total / assigned_items
// 红线: 经理输入顺序有意义（余数归属 + 平局裁决）
// ==========================================

use crate::domain::case::{total_weight, CaseItem};
use crate::domain::manager::Manager;
use crate::engine::error::{EngineError, EngineResult};
use tracing::{debug, instrument};

// ==========================================
// AllocationEngine - 比例分配引擎
// ==========================================
pub struct AllocationEngine {
    // 无状态引擎，不需要注入依赖
}

impl AllocationEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 将案件分配给经理
    ///
    /// 规则:
    /// 1) target_total = floor(总金额 * ratio / 总比例)
    /// 2) 取整余数全部加到第一个经理
    /// 3) 案件按金额降序（稳定排序，同额保持输入顺序）
    /// 4) 每个案件给剩余需求最大的经理，平局取靠前者
    ///
    /// # 参数
    /// - `items`: 案件列表（不会被修改）
    /// - `managers`: 经理列表（独占写入，计算字段会先被重置）
    ///
    /// # 错误
    /// - `EngineError::Configuration`: 比例总和为 0
    #[instrument(skip(self, items, managers), fields(
        items_count = items.len(),
        managers_count = managers.len()
    ))]
    pub fn allocate(&self, items: &[CaseItem], managers: &mut [Manager]) -> EngineResult<()> {
        // 128 位累加，经理数量有限时不会溢出
        let total_ratio: u128 = managers.iter().map(|m| m.ratio_weight as u128).sum();
        if total_ratio == 0 {
            return Err(EngineError::Configuration(
                "比例总和不能为 0（至少需要一个比例为正的经理）".to_string(),
            ));
        }

        let total = total_weight(items).ok_or_else(|| {
            EngineError::Configuration("案件总金额超出 u64 范围".to_string())
        })?;

        for manager in managers.iter_mut() {
            manager.reset();
        }

        // 1. 目标金额
        self.assign_targets(total, total_ratio, managers);

        // 2. 大额优先贪心分配
        let mut sorted: Vec<&CaseItem> = items.iter().collect();
        sorted.sort_by(|a, b| b.weight.cmp(&a.weight));

        for item in sorted {
            let idx = Self::neediest(managers);
            managers[idx].assign(item.clone());
        }

        debug!(
            total_weight = total,
            total_ratio,
            "分配完成: {}",
            managers
                .iter()
                .map(|m| format!("{}={}/{}", m.name, m.current_total, m.target_total))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(())
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 计算各经理目标金额，余数归第一个经理
    ///
    /// 各份额 <= total，且份额之和 <= total，因此累加不会溢出
    fn assign_targets(&self, total: u64, total_ratio: u128, managers: &mut [Manager]) {
        for manager in managers.iter_mut() {
            // 128 位中间值，避免 total * ratio 溢出
            let share = (total as u128 * manager.ratio_weight as u128) / total_ratio;
            manager.target_total = share as u64;
        }

        let allocated: u64 = managers.iter().map(|m| m.target_total).sum();
        let residue = total - allocated;
        if residue != 0 {
            if let Some(first) = managers.first_mut() {
                first.target_total += residue;
            }
        }
        debug!(total, allocated, residue, "目标金额计算完成");
    }

    /// 剩余需求最大的经理下标（从左到右扫描，保留第一个最大值）
    fn neediest(managers: &[Manager]) -> usize {
        let mut best = 0;
        let mut best_need = i128::MIN;
        for (idx, manager) in managers.iter().enumerate() {
            let need = manager.remaining_need();
            if need > best_need {
                best = idx;
                best_need = need;
            }
        }
        best
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}
