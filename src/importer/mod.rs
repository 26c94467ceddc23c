// ==========================================
// 案件负载排程系统 - 导入层
// ==========================================
// 职责: 外部表格导入,生成案件与经理
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod case_importer;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod manager_importer;

// 重导出核心类型
pub use case_importer::CaseImporter;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use importer_trait::{FileParser, RawRow, RawSheet};
pub use manager_importer::ManagerImporter;
