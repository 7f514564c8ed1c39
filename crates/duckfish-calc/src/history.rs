//! 歷史銷售資料讀取
//!
//! 分號分隔、含表頭，至少五欄：期間標籤、（未使用）、魚銷售、鴨子銷售、總銷售。

use csv::{ReaderBuilder, StringRecord, Trim};
use duckfish_core::{DuckfishError, Result, SalesHistory, SalesRecord};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// 最少欄位數
const MIN_COLUMNS: usize = 5;

const LABEL_COLUMN: usize = 0;
const FISH_COLUMN: usize = 2;
const DUCK_COLUMN: usize = 3;
const TOTAL_COLUMN: usize = 4;

/// 歷史銷售讀取器
pub struct SalesReader;

impl SalesReader {
    /// 從檔案讀取
    pub fn read(path: &Path) -> Result<SalesHistory> {
        if !path.exists() {
            return Err(DuckfishError::SalesFileNotFound(path.display().to_string()));
        }

        tracing::info!("讀取歷史銷售資料: {}", path.display());

        let file = File::open(path)?;
        let history = Self::read_from(file)?;

        tracing::info!("歷史銷售資料 {} 期", history.len());
        Ok(history)
    }

    /// 從任意來源讀取
    pub fn read_from<R: Read>(source: R) -> Result<SalesHistory> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let headers = reader.headers().map_err(|e| DuckfishError::MalformedSalesFile {
            row: 1,
            message: e.to_string(),
        })?;
        if headers.len() < MIN_COLUMNS {
            return Err(DuckfishError::MalformedSalesFile {
                row: 1,
                message: format!("表頭只有 {} 欄，至少需要 {} 欄", headers.len(), MIN_COLUMNS),
            });
        }

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            // 檔案列號（表頭為第 1 列）
            let row = idx + 2;
            let record = result.map_err(|e| DuckfishError::MalformedSalesFile {
                row,
                message: e.to_string(),
            })?;

            // 跳過完全空白的行
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            records.push(Self::parse_record(&record, row)?);
        }

        if records.is_empty() {
            return Err(DuckfishError::MalformedSalesFile {
                row: 1,
                message: "沒有任何資料列".to_string(),
            });
        }

        Ok(SalesHistory::new(records))
    }

    fn parse_record(record: &StringRecord, row: usize) -> Result<SalesRecord> {
        if record.len() < MIN_COLUMNS {
            return Err(DuckfishError::MalformedSalesFile {
                row,
                message: format!("只有 {} 欄，至少需要 {} 欄", record.len(), MIN_COLUMNS),
            });
        }

        let field = |col: usize| record.get(col).unwrap_or_default();

        Ok(SalesRecord {
            label: field(LABEL_COLUMN).to_string(),
            fish: parse_number(field(FISH_COLUMN), row, "fish sales")?,
            duck: parse_number(field(DUCK_COLUMN), row, "duck sales")?,
            total: parse_number(field(TOTAL_COLUMN), row, "total sales")?,
        })
    }
}

/// 解析數值，接受小數逗號（如 `1.234,5`）
fn parse_number(raw: &str, row: usize, column: &str) -> Result<Decimal> {
    if raw.is_empty() {
        return Err(DuckfishError::MalformedSalesFile {
            row,
            message: format!("{} 欄位為空", column),
        });
    }

    let normalized = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else {
        raw.to_string()
    };

    Decimal::from_str(&normalized).map_err(|e| DuckfishError::MalformedSalesFile {
        row,
        message: format!("{} 無法解析 '{}': {}", column, raw, e),
    })
}
