// ==========================================
// 案件负载排程系统 - 案件领域模型
// ==========================================
// 红线: 案件创建后不可变
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CaseItem - 待分配案件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseItem {
    pub id: u64,       // 唯一ID（导入时按行序分配）
    pub weight: u64,   // 计费金额（分配权重）
    pub label: String, // 案件编号 (Case Code)
}

impl CaseItem {
    pub fn new(id: u64, weight: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            weight,
            label: label.into(),
        }
    }
}

/// 计算案件总金额（超出 u64 范围时返回 None）
pub fn total_weight(items: &[CaseItem]) -> Option<u64> {
    items
        .iter()
        .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
}
