// ==========================================
// 案件负载排程系统 - 配置管理器
// ==========================================
// 职责: 配置加载、默认值、默认路径
// 存储: JSON 文件
// ==========================================

use crate::calendar::{parse_weekday, WorkCalendar};
use crate::domain::types::OverflowPolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "CASELOAD_SCHEDULER_CONFIG";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value})")]
    InvalidValue { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// SchedulerConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// 排程起始日期（为空时取当天）
    pub start_date: Option<NaiveDate>,

    /// 工作星期（英文名称，如 "Monday"）
    pub working_days: Vec<String>,

    /// 节假日
    pub holidays: Vec<NaiveDate>,

    /// 单个案件超过日上限时的处理方式
    pub overflow_policy: OverflowPolicy,

    /// 导出目录（为空时不导出）
    pub output_dir: Option<PathBuf>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            start_date: None,
            working_days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            holidays: Vec::new(),
            overflow_policy: OverflowPolicy::Allow,
            output_dir: None,
        }
    }
}

impl SchedulerConfig {
    /// 生成工作日历
    ///
    /// # 参数
    /// - `today`: start_date 为空时使用的日期
    pub fn work_calendar(&self, today: NaiveDate) -> ConfigResult<WorkCalendar> {
        let mut calendar = WorkCalendar::weekdays_from(self.start_date.unwrap_or(today));
        calendar.working_days.clear();
        for name in &self.working_days {
            let weekday = parse_weekday(name).map_err(|_| ConfigError::InvalidValue {
                key: "working_days".to_string(),
                value: name.clone(),
            })?;
            calendar.working_days.insert(weekday);
        }
        Ok(calendar.with_holidays(self.holidays.iter().copied()))
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 从 JSON 文件读取配置（缺失字段取默认值）
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<SchedulerConfig> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: SchedulerConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), "配置已加载");
        Ok(config)
    }

    /// 读取配置
    ///
    /// - 显式路径: 必须存在
    /// - 未指定: 使用默认路径，文件不存在时返回默认配置
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<SchedulerConfig> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = default_config_path();
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            debug!(path = %default_path.display(), "默认配置文件不存在，使用默认配置");
            Ok(SchedulerConfig::default())
        }
    }
}

/// 获取默认配置文件路径
///
/// # 返回
/// - 环境变量 CASELOAD_SCHEDULER_CONFIG（非空时）
/// - 用户配置目录/caseload-scheduler/config.json
/// - 回退: ./caseload_scheduler.json
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("caseload-scheduler").join("config.json"),
        None => PathBuf::from("./caseload_scheduler.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"start_date": "2026-03-02", "holidays": ["2026-03-03"], "overflow_policy": "STRICT"}}"#
        )
        .unwrap();

        let config = ConfigManager::load(file.path()).unwrap();
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2026, 3, 2));
        assert_eq!(config.overflow_policy, OverflowPolicy::Strict);
        assert_eq!(config.working_days.len(), 5);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_malformed_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            ConfigManager::load(file.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_work_calendar_from_config() {
        let config = SchedulerConfig {
            working_days: vec!["Saturday".to_string()],
            ..SchedulerConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let calendar = config.work_calendar(today).unwrap();
        assert_eq!(calendar.start_date, today);
        assert!(calendar.working_days.contains(&Weekday::Sat));
        assert_eq!(calendar.working_days.len(), 1);

        let bad = SchedulerConfig {
            working_days: vec!["Someday".to_string()],
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            bad.work_calendar(today),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.to_string_lossy().ends_with(".json"));
    }
}
