// ==========================================
// 端到端排程流程测试
// ==========================================
// 流程: CSV 导入 → 求解 → 日期映射 → 报告 → 导出（xlsx + json）
// ==========================================


use caseload_scheduler::api::{ApiError, ScheduleApi, ScheduleRequest};
use caseload_scheduler::config::SchedulerConfig;
use caseload_scheduler::domain::{OverflowPolicy, ValidationStatus};
use caseload_scheduler::engine::EngineError;
use caseload_scheduler::report::exporter::{
    DAILY_SUMMARY_SHEET, MANAGER_SUMMARY_SHEET, REPORT_JSON_FILE, SCHEDULE_HEADER,
    SCHEDULE_SHEET, SCHEDULE_WORKBOOK_FILE,
};
use calamine::{open_workbook, Reader, Xlsx};
use chrono::NaiveDate;
use tempfile::TempDir;
use test_helpers::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_inputs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let cases = write_csv(
        dir.path(),
        "cases.csv",
        &[
            "Case Code,Billing Amount",
            "C-1,100",
            "C-2,90",
            "C-3,80",
            "C-4,20",
            "C-5,10",
            "C-6,70",
        ],
    );
    let managers = write_csv(
        dir.path(),
        "managers.csv",
        &["Name,Max Load,Ratio", "Ann,100,1", "Bo,120,1"],
    );
    (cases, managers)
}

#[test]
fn test_full_flow_with_export() {
    caseload_scheduler::logging::init_test();

    let dir = TempDir::new().unwrap();
    let (cases_path, managers_path) = write_inputs(&dir);
    let out_dir = dir.path().join("out");

    // 2026-01-02 周五，2026-01-05 周一为节假日
    let config = SchedulerConfig {
        start_date: Some(date(2026, 1, 2)),
        holidays: vec![date(2026, 1, 5)],
        output_dir: Some(out_dir.clone()),
        ..SchedulerConfig::default()
    };
    let request = ScheduleRequest {
        cases_path,
        managers_path,
        config,
    };

    let response = ScheduleApi::new().run(&request).unwrap();
    let report = &response.report;

    // 总额 370，比例 1:1 → 185/185
    // 100→Ann, 90→Bo, 80→Bo, 70→Ann, 20→Ann (平局取靠前), 10→Bo
    // Ann [100][70,20]，Bo [90,10][80]，各两天
    assert_eq!(report.validation.status, ValidationStatus::Match);
    assert_eq!(report.validation.input_value, 370);
    assert_eq!(report.validation.scheduled_cases, 6);
    assert_eq!(report.managers.len(), 2);
    assert_eq!(
        report.managers.iter().map(|m| m.target_load).sum::<u64>(),
        370
    );

    let variance: Vec<i128> = report.managers.iter().map(|m| m.variance).collect();
    assert_eq!(variance, vec![5, -5]);
    assert!(report.managers.iter().all(|m| m.days == 2));

    // 天 1 → 01-02（周五），天 2 → 01-06（跳过周末与 01-05）
    for dated in &report.rows {
        let expected = match dated.row.day_index {
            1 => "2026-01-02",
            2 => "2026-01-06",
            other => panic!("unexpected day {other}"),
        };
        assert_eq!(dated.date.as_deref(), Some(expected));
    }

    // 每日汇总合计等于总额
    assert_eq!(report.daily.iter().map(|d| d.total_load).sum::<u64>(), 370);

    // 导出文件: 一个工作簿 + 一个 JSON
    assert_eq!(
        response.exported_files,
        vec![out_dir.join(SCHEDULE_WORKBOOK_FILE), out_dir.join(REPORT_JSON_FILE)]
    );

    let mut workbook: Xlsx<_> = open_workbook(out_dir.join(SCHEDULE_WORKBOOK_FILE)).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec![
            SCHEDULE_SHEET.to_string(),
            MANAGER_SUMMARY_SHEET.to_string(),
            DAILY_SUMMARY_SHEET.to_string(),
        ]
    );

    let schedule = workbook.worksheet_range(SCHEDULE_SHEET).unwrap();
    let header: Vec<String> = schedule.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(header, SCHEDULE_HEADER);
    assert_eq!(
        header,
        ["Date", "Day", "Manager", "Case Code", "Billing Amount", "Daily Load", "Max Load"]
    );
    assert_eq!(schedule.height(), 7);

    // 首行: 01-02 / 天 1 / Ann / C-1 / 100
    let first: Vec<String> = schedule.rows().nth(1).unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(first[..5], ["2026-01-02", "1", "Ann", "C-1", "100"]);

    let summary = workbook.worksheet_range(MANAGER_SUMMARY_SHEET).unwrap();
    let variance_cells: Vec<String> = summary.rows().skip(1).map(|r| r[3].to_string()).collect();
    assert_eq!(variance_cells, ["5", "-5"]);

    let daily = workbook.worksheet_range(DAILY_SUMMARY_SHEET).unwrap();
    assert_eq!(daily.height(), 3);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join(REPORT_JSON_FILE)).unwrap())
            .unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 6);
    assert_eq!(json["validation"]["status"], "MATCH");
}

#[test]
fn test_schedule_without_export() {
    let items = cases(&[100, 90, 80, 20, 10]);
    let workers = managers(&[("W1", 150, 2), ("W2", 200, 3), ("W3", 250, 5)]);
    let config = SchedulerConfig {
        start_date: Some(date(2026, 3, 2)),
        ..SchedulerConfig::default()
    };

    let report = ScheduleApi::new()
        .schedule(&items, workers, &config, date(2000, 1, 1))
        .unwrap();

    assert!(report
        .rows
        .iter()
        .all(|r| r.date.as_deref() == Some("2026-03-02")));
    let actual: Vec<(String, u64, u64, i128)> = report
        .managers
        .iter()
        .map(|m| (m.manager.clone(), m.target_load, m.actual_load, m.variance))
        .collect();
    assert_eq!(
        actual,
        vec![
            ("W1".to_string(), 60, 80, 20),
            ("W2".to_string(), 90, 90, 0),
            ("W3".to_string(), 150, 130, -20),
        ]
    );
}

#[test]
fn test_strict_policy_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let cases_path = write_csv(dir.path(), "cases.csv", &["Case Code,Billing Amount", "BIG,500"]);
    let managers_path = write_csv(dir.path(), "managers.csv", &["Name,Max Load,Ratio", "Ann,100,1"]);
    let out_dir = dir.path().join("out");

    let request = ScheduleRequest {
        cases_path,
        managers_path,
        config: SchedulerConfig {
            overflow_policy: OverflowPolicy::Strict,
            output_dir: Some(out_dir.clone()),
            ..SchedulerConfig::default()
        },
    };

    let err = ScheduleApi::new().run(&request).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Engine(EngineError::OversizedItem { weight: 500, .. })
    ));
    assert!(!out_dir.exists());
}

#[test]
fn test_no_working_days_is_reported() {
    let items = cases(&[10]);
    let workers = managers(&[("A", 100, 1)]);
    let config = SchedulerConfig {
        working_days: Vec::new(),
        ..SchedulerConfig::default()
    };

    let err = ScheduleApi::new()
        .schedule(&items, workers, &config, date(2026, 1, 1))
        .unwrap_err();
    assert!(matches!(err, ApiError::Calendar(_)));
}

#[test]
fn test_empty_manager_list_is_invalid_input() {
    let err = ScheduleApi::new()
        .schedule(&cases(&[10]), Vec::new(), &SchedulerConfig::default(), date(2026, 1, 1))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}
