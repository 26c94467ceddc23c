// ==========================================
// 案件负载排程系统 - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 比例总和为 0（无经理，或全部比例为 0）
    #[error("配置错误: {0}")]
    Configuration(String),

    /// 严格模式下单个案件超过日上限
    #[error("案件超过日上限: manager={manager}, case={label}, weight={weight} > daily_capacity={daily_capacity}")]
    OversizedItem {
        manager: String,
        label: String,
        weight: u64,
        daily_capacity: u64,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
