// ==========================================
// 案件负载排程系统 - 导入 Trait
// ==========================================
// 职责: 定义文件解析接口与原始表格结构（不包含实现）
// ==========================================

use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 原始数据行（列名 → 去空格后的文本）
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub row_number: usize, // 表格中的行号（表头为第 1 行）
    pub values: HashMap<String, String>,
}

impl RawRow {
    /// 读取字段（缺失或空白返回 None）
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

/// 原始表格（第一张工作表 / 整个 CSV）
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawSheet {
    /// 检查必需列，返回缺失的列名
    pub fn require_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|col| !self.headers.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect()
    }
}

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser / ExcelParser
pub trait FileParser {
    /// 将文件解析为原始表格
    ///
    /// - 第一行为表头，表头去除首尾空格
    /// - 完全空白的行被跳过
    fn parse_to_raw_sheet(&self, file_path: &Path) -> ImportResult<RawSheet>;
}
