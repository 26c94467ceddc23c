// ==========================================
// 案件负载排程系统 - 领域类型定义
// ==========================================
// 职责: 运行策略枚举、校验状态枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 超容策略 (Overflow Policy)
// ==========================================
// 单个案件金额超过经理日上限时的处理方式
// 序列化格式: SCREAMING_SNAKE_CASE (与配置文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverflowPolicy {
    #[default]
    Allow,  // 单独占用一天，允许超出日上限
    Strict, // 报告 OversizedItem 并终止
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Allow => write!(f, "ALLOW"),
            OverflowPolicy::Strict => write!(f, "STRICT"),
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALLOW" => Ok(OverflowPolicy::Allow),
            "STRICT" => Ok(OverflowPolicy::Strict),
            other => Err(format!("未知的超容策略: {}", other)),
        }
    }
}

// ==========================================
// 全局校验状态 (Validation Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Match,    // 输入与排程一致
    Mismatch, // 存在丢失或重复
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationStatus::Match => write!(f, "MATCH"),
            ValidationStatus::Mismatch => write!(f, "MISMATCH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_policy_parse() {
        assert_eq!("strict".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Strict);
        assert_eq!(" Allow ".parse::<OverflowPolicy>().unwrap(), OverflowPolicy::Allow);
        assert!("sometimes".parse::<OverflowPolicy>().is_err());
    }

    #[test]
    fn test_overflow_policy_serde() {
        let json = serde_json::to_string(&OverflowPolicy::Strict).unwrap();
        assert_eq!(json, "\"STRICT\"");
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Allow);
    }
}
