// ==========================================
// 案件负载排程系统 - 核心库
// ==========================================
// 阶段一: 按比例贪心分配案件给经理
// 阶段二: 首次适应递减装箱，生成每日案件组
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分配与装箱
pub mod engine;

// 导入层 - 外部表格
pub mod importer;

// 日历层 - 工作日映射
pub mod calendar;

// 配置层 - 运行配置
pub mod config;

// 报告层 - 质检与导出
pub mod report;

// API 层 - 用例接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{CaseItem, DayBin, Manager, OverflowPolicy, ScheduleRow, SolveOutcome};
pub use engine::{
    solve, AllocationEngine, BinPacker, EngineError, EngineResult, ResultProjector,
    ScheduleOrchestrator,
};
pub use api::{ApiError, ScheduleApi, ScheduleRequest};
pub use report::ScheduleReport;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "案件负载排程系统";
