// ==========================================
// 案件负载排程系统 - 排程 API
// ==========================================
// 流程: 导入案件 → 导入经理 → 求解 → 日期映射 → 报告 → (导出)
// 红线: 任一阶段失败即终止，不输出部分结果
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::SchedulerConfig;
use crate::domain::case::CaseItem;
use crate::domain::manager::Manager;
use crate::engine::ScheduleOrchestrator;
use crate::importer::{CaseImporter, ManagerImporter};
use crate::report::{ReportExporter, ScheduleReport};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::{info, instrument};

/// 排程请求
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    pub cases_path: PathBuf,
    pub managers_path: PathBuf,
    pub config: SchedulerConfig,
}

/// 排程结果（报告 + 导出文件）
#[derive(Debug, Clone)]
pub struct ScheduleResponse {
    pub report: ScheduleReport,
    pub exported_files: Vec<PathBuf>,
}

pub struct ScheduleApi {
    case_importer: CaseImporter,
    manager_importer: ManagerImporter,
    exporter: ReportExporter,
}

impl ScheduleApi {
    pub fn new() -> Self {
        Self {
            case_importer: CaseImporter::new(),
            manager_importer: ManagerImporter::new(),
            exporter: ReportExporter,
        }
    }

    /// 从文件执行完整排程
    #[instrument(skip(self, request), fields(
        cases = %request.cases_path.display(),
        managers = %request.managers_path.display()
    ))]
    pub fn run(&self, request: &ScheduleRequest) -> ApiResult<ScheduleResponse> {
        info!("开始导入案件");
        let items = self.case_importer.import(&request.cases_path)?;

        info!("开始导入经理配置");
        let managers = self.manager_importer.import(&request.managers_path)?;

        let report = self.schedule(&items, managers, &request.config, Local::now().date_naive())?;

        let exported_files = match &request.config.output_dir {
            Some(dir) => self.exporter.export(&report, dir)?,
            None => Vec::new(),
        };

        Ok(ScheduleResponse {
            report,
            exported_files,
        })
    }

    /// 对已加载的数据执行排程
    ///
    /// # 参数
    /// - `today`: 配置未指定起始日期时使用
    pub fn schedule(
        &self,
        items: &[CaseItem],
        managers: Vec<Manager>,
        config: &SchedulerConfig,
        today: NaiveDate,
    ) -> ApiResult<ScheduleReport> {
        if managers.is_empty() {
            return Err(ApiError::InvalidInput("至少需要配置一个有效的经理".to_string()));
        }

        let calendar = config.work_calendar(today)?;
        let orchestrator = ScheduleOrchestrator::with_policy(config.overflow_policy);
        let outcome = orchestrator.solve(items, managers)?;

        let report = ScheduleReport::build(items, &outcome, &calendar)?;
        info!(
            run_id = %report.run_id,
            rows = report.rows.len(),
            max_day = outcome.max_day_index(),
            status = %report.validation.status,
            "排程完成"
        );
        Ok(report)
    }
}

impl Default for ScheduleApi {
    fn default() -> Self {
        Self::new()
    }
}
