// ==========================================
// 案件负载排程系统 - API 层
// ==========================================
// 职责: 编排导入、求解、日历、报告，对外提供用例接口
// ==========================================

pub mod error;
pub mod schedule_api;

pub use error::{ApiError, ApiResult};
pub use schedule_api::{ScheduleApi, ScheduleRequest, ScheduleResponse};
