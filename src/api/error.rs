// ==========================================
// 案件负载排程系统 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，给出带原因的错误信息
// ==========================================

use crate::calendar::CalendarError;
use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::importer::ImportError;
use crate::report::ExportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("文件导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("排程失败: {0}")]
    Engine(#[from] EngineError),

    #[error("日期映射失败: {0}")]
    Calendar(#[from] CalendarError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("报告导出失败: {0}")]
    Export(#[from] ExportError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
