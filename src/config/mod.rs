// ==========================================
// 案件负载排程系统 - 配置层
// ==========================================
// 职责: 运行配置加载（起始日期、工作日、节假日、超容策略）
// 存储: JSON 文件
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{
    default_config_path, ConfigError, ConfigManager, ConfigResult, SchedulerConfig,
    CONFIG_PATH_ENV,
};
