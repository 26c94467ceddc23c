// ==========================================
// 案件负载排程系统 - 引擎编排器
// ==========================================
// 用途: 固定顺序执行 分配 → 逐经理装箱 → 投影
// 红线: 任一阶段失败即整体失败，不返回部分结果
// ==========================================

use crate::domain::case::CaseItem;
use crate::domain::manager::Manager;
use crate::domain::schedule::SolveOutcome;
use crate::domain::types::OverflowPolicy;
use crate::engine::error::EngineResult;
use crate::engine::{AllocationEngine, BinPacker, ResultProjector};
use tracing::{debug, info, instrument};

// ==========================================
// ScheduleOrchestrator - 引擎编排器
// ==========================================
pub struct ScheduleOrchestrator {
    allocation: AllocationEngine,
    packer: BinPacker,
    projector: ResultProjector,
}

impl ScheduleOrchestrator {
    pub fn new() -> Self {
        Self::with_policy(OverflowPolicy::default())
    }

    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self {
            allocation: AllocationEngine::new(),
            packer: BinPacker::with_policy(policy),
            projector: ResultProjector::new(),
        }
    }

    /// 求解
    ///
    /// # 参数
    /// - `items`: 案件列表（顺序影响同额平局）
    /// - `managers`: 经理列表（顺序影响余数归属、平局与输出行序）
    ///
    /// # 返回
    /// 输出行 + 最终经理快照
    #[instrument(skip_all, fields(items_count = items.len(), managers_count = managers.len()))]
    pub fn solve(&self, items: &[CaseItem], mut managers: Vec<Manager>) -> EngineResult<SolveOutcome> {
        // 1. 分配
        self.allocation.allocate(items, &mut managers)?;

        // 2. 装箱（各经理独立）
        for manager in managers.iter_mut() {
            self.packer.pack(manager)?;
            debug!(manager = %manager.name, days = manager.day_count(), "装箱完成");
        }

        // 3. 投影
        let rows = self.projector.project(&managers);
        info!(rows = rows.len(), "排程求解完成");

        Ok(SolveOutcome { rows, managers })
    }
}

impl Default for ScheduleOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// 使用默认策略求解
pub fn solve(items: &[CaseItem], managers: Vec<Manager>) -> EngineResult<SolveOutcome> {
    ScheduleOrchestrator::new().solve(items, managers)
}
