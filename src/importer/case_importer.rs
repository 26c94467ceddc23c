// ==========================================
// 案件负载排程系统 - 案件导入器
// ==========================================
// 流程: 文件解析 → 列校验 → 字段映射（按行序分配ID）
// ==========================================

use crate::domain::case::CaseItem;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{FieldMapper, CASE_COLUMNS};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::RawSheet;
use std::path::Path;
use tracing::{info, instrument};

pub struct CaseImporter {
    parser: UniversalFileParser,
    mapper: FieldMapper,
}

impl CaseImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper,
        }
    }

    /// 从 xlsx/xls/csv 文件导入案件
    #[instrument(skip(self, file_path), fields(file = %file_path.as_ref().display()))]
    pub fn import<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<CaseItem>> {
        let sheet = self.parser.parse(file_path)?;
        self.from_sheet(&sheet)
    }

    /// 从已解析的表格映射案件
    pub fn from_sheet(&self, sheet: &RawSheet) -> ImportResult<Vec<CaseItem>> {
        let missing = sheet.require_columns(CASE_COLUMNS);
        if !missing.is_empty() {
            return Err(ImportError::MissingColumns(missing));
        }

        let mut items = Vec::with_capacity(sheet.rows.len());
        for row in &sheet.rows {
            if let Some(item) = self.mapper.map_case(row, items.len() as u64)? {
                items.push(item);
            }
        }

        info!(
            rows = sheet.rows.len(),
            imported = items.len(),
            skipped = sheet.rows.len() - items.len(),
            "案件导入完成"
        );
        Ok(items)
    }
}

impl Default for CaseImporter {
    fn default() -> Self {
        Self::new()
    }
}
