// ==========================================
// 案件负载排程系统 - 报告导出
// ==========================================
// 输出: schedule.xlsx（Schedule / Manager Summary / Daily Summary 三个工作表）
//       report.json（完整报告）
// 列名与原始表格保持一致
// ==========================================

use crate::report::schedule_report::ScheduleReport;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const SCHEDULE_WORKBOOK_FILE: &str = "schedule.xlsx";
pub const REPORT_JSON_FILE: &str = "report.json";

pub const SCHEDULE_SHEET: &str = "Schedule";
pub const MANAGER_SUMMARY_SHEET: &str = "Manager Summary";
pub const DAILY_SUMMARY_SHEET: &str = "Daily Summary";

pub const SCHEDULE_HEADER: &[&str] = &[
    "Date",
    "Day",
    "Manager",
    "Case Code",
    "Billing Amount",
    "Daily Load",
    "Max Load",
];
pub const MANAGER_SUMMARY_HEADER: &[&str] = &[
    "Manager",
    "Target Load",
    "Actual Load",
    "Variance",
    "Daily Limit",
    "Utilization %",
    "Days",
];
pub const DAILY_SUMMARY_HEADER: &[&str] = &["Day", "Total Daily Load"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("导出目录创建失败 ({path}): {message}")]
    CreateDir { path: String, message: String },

    #[error("文件写入失败: {0}")]
    Write(String),

    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<XlsxError> for ExportError {
    fn from(err: XlsxError) -> Self {
        ExportError::Write(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Write(err.to_string())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

pub struct ReportExporter;

impl ReportExporter {
    /// 导出报告到目录，返回写入的文件路径
    pub fn export(&self, report: &ScheduleReport, out_dir: &Path) -> ExportResult<Vec<PathBuf>> {
        fs::create_dir_all(out_dir).map_err(|e| ExportError::CreateDir {
            path: out_dir.display().to_string(),
            message: e.to_string(),
        })?;

        let written = vec![
            self.write_workbook(report, &out_dir.join(SCHEDULE_WORKBOOK_FILE))?,
            self.write_json(report, &out_dir.join(REPORT_JSON_FILE))?,
        ];

        info!(run_id = %report.run_id, dir = %out_dir.display(), "报告导出完成");
        Ok(written)
    }

    fn write_workbook(&self, report: &ScheduleReport, path: &Path) -> ExportResult<PathBuf> {
        let mut workbook = Workbook::new();

        self.write_schedule(workbook.add_worksheet(), report)?;
        self.write_manager_summary(workbook.add_worksheet(), report)?;
        self.write_daily_summary(workbook.add_worksheet(), report)?;

        workbook.save(path)?;
        debug!(path = %path.display(), rows = report.rows.len(), "工作簿写入完成");
        Ok(path.to_path_buf())
    }

    fn write_schedule(&self, sheet: &mut Worksheet, report: &ScheduleReport) -> ExportResult<()> {
        sheet.set_name(SCHEDULE_SHEET)?;
        write_header(sheet, SCHEDULE_HEADER)?;

        for (idx, dated) in report.rows.iter().enumerate() {
            let r = idx as u32 + 1;
            let row = &dated.row;
            sheet.write_string(r, 0, dated.date.clone().unwrap_or_default())?;
            sheet.write_number(r, 1, row.day_index as f64)?;
            sheet.write_string(r, 2, row.worker_name.as_str())?;
            sheet.write_string(r, 3, row.item_label.as_str())?;
            sheet.write_number(r, 4, row.item_weight as f64)?;
            sheet.write_number(r, 5, row.day_total as f64)?;
            sheet.write_number(r, 6, row.daily_capacity as f64)?;
        }
        Ok(())
    }

    fn write_manager_summary(
        &self,
        sheet: &mut Worksheet,
        report: &ScheduleReport,
    ) -> ExportResult<()> {
        sheet.set_name(MANAGER_SUMMARY_SHEET)?;
        write_header(sheet, MANAGER_SUMMARY_HEADER)?;

        for (idx, s) in report.managers.iter().enumerate() {
            let r = idx as u32 + 1;
            sheet.write_string(r, 0, s.manager.as_str())?;
            sheet.write_number(r, 1, s.target_load as f64)?;
            sheet.write_number(r, 2, s.actual_load as f64)?;
            sheet.write_number(r, 3, s.variance as f64)?;
            sheet.write_number(r, 4, s.daily_limit as f64)?;
            sheet.write_number(r, 5, s.utilization_pct)?;
            sheet.write_number(r, 6, s.days as f64)?;
        }
        Ok(())
    }

    fn write_daily_summary(
        &self,
        sheet: &mut Worksheet,
        report: &ScheduleReport,
    ) -> ExportResult<()> {
        sheet.set_name(DAILY_SUMMARY_SHEET)?;
        write_header(sheet, DAILY_SUMMARY_HEADER)?;

        for (idx, d) in report.daily.iter().enumerate() {
            let r = idx as u32 + 1;
            sheet.write_number(r, 0, d.day_index as f64)?;
            sheet.write_number(r, 1, d.total_load as f64)?;
        }
        Ok(())
    }

    fn write_json(&self, report: &ScheduleReport, path: &Path) -> ExportResult<PathBuf> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json)?;
        Ok(path.to_path_buf())
    }
}

fn write_header(sheet: &mut Worksheet, header: &[&str]) -> ExportResult<()> {
    for (col, title) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *title)?;
    }
    Ok(())
}
