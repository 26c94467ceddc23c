// ==========================================
// 案件负载排程系统 - 引擎层
// ==========================================
// 职责: 分配、装箱、投影算法，不做文件读写
// ==========================================

pub mod allocation;
pub mod bin_packer;
pub mod error;
pub mod orchestrator;
pub mod projector;

// 重导出核心引擎
pub use allocation::AllocationEngine;
pub use bin_packer::BinPacker;
pub use error::{EngineError, EngineResult};
pub use orchestrator::{solve, ScheduleOrchestrator};
pub use projector::ResultProjector;
