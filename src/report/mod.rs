// ==========================================
// 案件负载排程系统 - 报告层
// ==========================================
// 职责: 质检汇总、排程报告、文件导出
// ==========================================

pub mod exporter;
pub mod schedule_report;
pub mod summary;

pub use exporter::{ExportError, ExportResult, ReportExporter};
pub use schedule_report::{DatedRow, ScheduleReport};
pub use summary::{DailySummary, GlobalValidation, ManagerSummary};
