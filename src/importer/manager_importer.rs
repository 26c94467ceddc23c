// ==========================================
// 案件负载排程系统 - 经理配置导入器
// ==========================================
// 流程: 文件解析 → 列校验 → 字段映射 → 过滤无效行 → 重名检查
// ==========================================

use crate::domain::manager::Manager;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{FieldMapper, MANAGER_COLUMNS};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::RawSheet;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument, warn};

pub struct ManagerImporter {
    parser: UniversalFileParser,
    mapper: FieldMapper,
}

impl ManagerImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper,
        }
    }

    /// 从 xlsx/xls/csv 文件导入经理配置
    #[instrument(skip(self, file_path), fields(file = %file_path.as_ref().display()))]
    pub fn import<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<Manager>> {
        let sheet = self.parser.parse(file_path)?;
        self.from_sheet(&sheet)
    }

    /// 从已解析的表格映射经理（保持表格行序）
    pub fn from_sheet(&self, sheet: &RawSheet) -> ImportResult<Vec<Manager>> {
        let missing = sheet.require_columns(MANAGER_COLUMNS);
        if !missing.is_empty() {
            return Err(ImportError::MissingColumns(missing));
        }

        let mut managers = Vec::new();
        let mut seen = HashSet::new();
        for row in &sheet.rows {
            let manager = match self.mapper.map_manager(row)? {
                Some(m) => m,
                None => {
                    warn!(row = row.row_number, "经理配置无效（日上限或比例不为正），已过滤");
                    continue;
                }
            };
            if !seen.insert(manager.name.clone()) {
                return Err(ImportError::DuplicateManager {
                    row: row.row_number,
                    name: manager.name,
                });
            }
            managers.push(manager);
        }

        if managers.is_empty() {
            return Err(ImportError::NoValidManagers);
        }

        info!(imported = managers.len(), "经理配置导入完成");
        Ok(managers)
    }
}

impl Default for ManagerImporter {
    fn default() -> Self {
        Self::new()
    }
}
