// ==========================================
// 案件负载排程系统 - 经理领域模型
// ==========================================
// 职责: 经理配置 + 分配状态 + 日程
// 红线: 计算字段只由 AllocationEngine / BinPacker 按顺序写入
// ==========================================

use crate::domain::case::CaseItem;
use serde::{Deserialize, Serialize};

// ==========================================
// DayBin - 单日案件组
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBin {
    pub items: Vec<CaseItem>, // 按放入顺序
    pub total: u64,           // 当日累计金额
}

impl DayBin {
    /// 以单个案件开启新的一天
    pub fn open_with(item: CaseItem) -> Self {
        let total = item.weight;
        Self {
            items: vec![item],
            total,
        }
    }

    pub fn push(&mut self, item: CaseItem) {
        self.total += item.weight;
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ==========================================
// Trait: DayCapacity
// ==========================================
// 用途: BinPacker 日上限检查接口
pub trait DayCapacity {
    /// 是否可以在不超过日上限的前提下放入
    fn can_add(&self, weight: u64, daily_capacity: u64) -> bool;

    /// 是否已超过日上限
    fn is_overflow(&self, daily_capacity: u64) -> bool;

    /// 剩余额度（超限时为 0）
    fn remaining(&self, daily_capacity: u64) -> u64;
}

impl DayCapacity for DayBin {
    fn can_add(&self, weight: u64, daily_capacity: u64) -> bool {
        self.total.saturating_add(weight) <= daily_capacity
    }

    fn is_overflow(&self, daily_capacity: u64) -> bool {
        self.total > daily_capacity
    }

    fn remaining(&self, daily_capacity: u64) -> u64 {
        daily_capacity.saturating_sub(self.total)
    }
}

// ==========================================
// Manager - 分配对象
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    // ===== 配置 =====
    pub name: String,        // 经理名称（单次运行内唯一）
    pub daily_capacity: u64, // 日上限 (Max Load)
    pub ratio_weight: u64,   // 分配比例 (Ratio)

    // ===== 分配阶段 =====
    pub target_total: u64,              // 目标金额
    pub current_total: u64,             // 已分配金额
    pub assigned_items: Vec<CaseItem>,  // 已分配案件（按分配顺序）

    // ===== 装箱阶段 =====
    pub schedule: Vec<DayBin>,          // 按开启顺序的日程
}

impl Manager {
    pub fn new(name: impl Into<String>, daily_capacity: u64, ratio_weight: u64) -> Self {
        Self {
            name: name.into(),
            daily_capacity,
            ratio_weight,
            target_total: 0,
            current_total: 0,
            assigned_items: Vec::new(),
            schedule: Vec::new(),
        }
    }

    /// 剩余需求 = 目标金额 - 已分配金额（可为负）
    pub fn remaining_need(&self) -> i128 {
        self.target_total as i128 - self.current_total as i128
    }

    /// 分配一个案件
    pub fn assign(&mut self, item: CaseItem) {
        self.current_total += item.weight;
        self.assigned_items.push(item);
    }

    /// 清空计算字段，保留配置
    pub fn reset(&mut self) {
        self.target_total = 0;
        self.current_total = 0;
        self.assigned_items.clear();
        self.schedule.clear();
    }

    pub fn day_count(&self) -> usize {
        self.schedule.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_need_can_go_negative() {
        let mut manager = Manager::new("A", 100, 1);
        manager.target_total = 50;
        manager.assign(CaseItem::new(1, 80, "C1"));
        assert_eq!(manager.current_total, 80);
        assert_eq!(manager.remaining_need(), -30);
    }

    #[test]
    fn test_day_capacity() {
        let mut day = DayBin::open_with(CaseItem::new(1, 60, "C1"));
        assert!(day.can_add(40, 100));
        assert!(!day.can_add(41, 100));
        day.push(CaseItem::new(2, 40, "C2"));
        assert_eq!(day.total, 100);
        assert_eq!(day.remaining(100), 0);
        assert!(!day.is_overflow(100));
        assert!(DayBin::open_with(CaseItem::new(3, 120, "C3")).is_overflow(100));
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut manager = Manager::new("A", 100, 3);
        manager.target_total = 10;
        manager.assign(CaseItem::new(1, 10, "C1"));
        manager.reset();
        assert_eq!(manager, Manager::new("A", 100, 3));
    }
}
