// ==========================================
// 案件负载排程系统 - 字段映射器实现
// ==========================================
// 职责: 源字段 → 领域对象 + 类型转换
// 案件表: Case Code / Billing Amount
// 经理表: Name / Max Load / Ratio
// ==========================================

use crate::domain::case::CaseItem;
use crate::domain::manager::Manager;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::RawRow;

// ===== 标准列名 =====
pub const COL_CASE_CODE: &str = "Case Code";
pub const COL_BILLING_AMOUNT: &str = "Billing Amount";
pub const COL_NAME: &str = "Name";
pub const COL_MAX_LOAD: &str = "Max Load";
pub const COL_RATIO: &str = "Ratio";

pub const CASE_COLUMNS: &[&str] = &[COL_CASE_CODE, COL_BILLING_AMOUNT];
pub const MANAGER_COLUMNS: &[&str] = &[COL_NAME, COL_MAX_LOAD, COL_RATIO];

pub struct FieldMapper;

impl FieldMapper {
    /// 映射案件行
    ///
    /// # 返回
    /// - Ok(Some): 有效案件
    /// - Ok(None): 案件编号或金额为空/为 0，跳过
    /// - Err: 金额无法转换为非负整数
    pub fn map_case(&self, row: &RawRow, id: u64) -> ImportResult<Option<CaseItem>> {
        let (code, amount) = match (row.get(COL_CASE_CODE), row.get(COL_BILLING_AMOUNT)) {
            (Some(code), Some(amount)) => (code, amount),
            _ => return Ok(None),
        };

        let value = self.parse_integer(amount, COL_BILLING_AMOUNT, row.row_number)?;
        if value < 0 {
            return Err(ImportError::TypeConversionError {
                row: row.row_number,
                field: COL_BILLING_AMOUNT.to_string(),
                message: format!("金额不能为负数: {}", amount),
            });
        }
        if value == 0 {
            return Ok(None);
        }

        Ok(Some(CaseItem::new(id, value as u64, code)))
    }

    /// 映射经理行
    ///
    /// # 返回
    /// - Ok(Some): 有效经理
    /// - Ok(None): 名称为空，或日上限/比例不为正，过滤
    /// - Err: 日上限/比例非数值
    pub fn map_manager(&self, row: &RawRow) -> ImportResult<Option<Manager>> {
        let name = match row.get(COL_NAME) {
            Some(name) => name,
            None => return Ok(None),
        };

        let max_load = match row.get(COL_MAX_LOAD) {
            Some(v) => self.parse_integer(v, COL_MAX_LOAD, row.row_number)?,
            None => return Ok(None),
        };
        let ratio = match row.get(COL_RATIO) {
            Some(v) => self.parse_integer(v, COL_RATIO, row.row_number)?,
            None => return Ok(None),
        };

        if max_load <= 0 || ratio <= 0 {
            return Ok(None);
        }

        Ok(Some(Manager::new(name, max_load as u64, ratio as u64)))
    }

    // ==========================================
    // 类型转换
    // ==========================================

    /// 文本 → 整数
    ///
    /// 接受整数文本、带千分位逗号的文本、小数文本（向零截断，
    /// Excel 数值单元格常显示为 "1234.5" 之类）
    fn parse_integer(&self, raw: &str, field: &str, row_number: usize) -> ImportResult<i64> {
        let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();

        if let Ok(v) = cleaned.parse::<i64>() {
            return Ok(v);
        }

        match cleaned.parse::<f64>() {
            Ok(v) if v.is_finite() && v.abs() < i64::MAX as f64 => Ok(v.trunc() as i64),
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: field.to_string(),
                message: format!("无法解析为整数: {}", raw),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow {
            row_number: 2,
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_map_case() {
        let item = FieldMapper
            .map_case(&row(&[("Case Code", "C-7"), ("Billing Amount", "1,250.9")]), 7)
            .unwrap()
            .unwrap();
        assert_eq!(item, CaseItem::new(7, 1250, "C-7"));
    }

    #[test]
    fn test_map_case_skips_blank_and_zero() {
        let mapper = FieldMapper;
        assert!(mapper
            .map_case(&row(&[("Case Code", ""), ("Billing Amount", "10")]), 0)
            .unwrap()
            .is_none());
        assert!(mapper
            .map_case(&row(&[("Case Code", "C-1"), ("Billing Amount", "0")]), 0)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_map_case_rejects_negative_and_text() {
        let mapper = FieldMapper;
        let err = mapper
            .map_case(&row(&[("Case Code", "C-1"), ("Billing Amount", "-5")]), 0)
            .unwrap_err();
        assert!(matches!(err, ImportError::TypeConversionError { row: 2, .. }));

        let err = mapper
            .map_case(&row(&[("Case Code", "C-1"), ("Billing Amount", "abc")]), 0)
            .unwrap_err();
        assert!(matches!(err, ImportError::TypeConversionError { .. }));
    }

    #[test]
    fn test_map_manager_filters_non_positive() {
        let mapper = FieldMapper;
        let manager = mapper
            .map_manager(&row(&[("Name", "Alice"), ("Max Load", "150"), ("Ratio", "2")]))
            .unwrap()
            .unwrap();
        assert_eq!(manager, Manager::new("Alice", 150, 2));

        assert!(mapper
            .map_manager(&row(&[("Name", "Bob"), ("Max Load", "0"), ("Ratio", "2")]))
            .unwrap()
            .is_none());
        assert!(mapper
            .map_manager(&row(&[("Name", "Bob"), ("Max Load", "100"), ("Ratio", "-1")]))
            .unwrap()
            .is_none());
    }
}
