// ==========================================
// 案件负载排程系统 - 领域模型层
// ==========================================
// 职责: 定义案件、经理、排程输出等领域实体
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod case;
pub mod manager;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use case::{total_weight, CaseItem};
pub use manager::{DayBin, DayCapacity, Manager};
pub use schedule::{max_day_index, ScheduleRow, SolveOutcome};
pub use types::{OverflowPolicy, ValidationStatus};
