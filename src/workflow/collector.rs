//! 题目收集流程 - 流程层
//!
//! 按文件顺序逐行调用行解析，收集所有有效题目

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::question::Question;
use crate::services::row_parser::{parse_row, RowOutcome};
use crate::services::stamper::Stamper;
use crate::utils::logging::truncate_text;

const UTF8_BOM: char = '\u{feff}';
const PREVIEW_CHARS: usize = 50;

/// 解析所有行，保持输入顺序，不去重
pub fn parse_rows<I, R, S>(rows: I, stamper: &mut Stamper) -> Vec<Question>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut questions = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in rows.into_iter().enumerate() {
        match parse_row(row.as_ref(), stamper) {
            RowOutcome::Parsed(parsed) => {
                info!(
                    "Processed question {}: {}",
                    questions.len() + 1,
                    truncate_text(&parsed.question.question, PREVIEW_CHARS)
                );
                debug!("Row {} question type: {:?}", index + 1, parsed.question_type);
                questions.push(parsed.question);
            }
            RowOutcome::Skipped(reason) => {
                skipped += 1;
                debug!("Skipping row {}: {}", index + 1, reason);
            }
        }
    }

    debug!(
        "Collected {} questions, skipped {} rows",
        questions.len(),
        skipped
    );
    questions
}

/// 从 CSV 文本收集题目，开头的 BOM 会被去掉
pub fn collect_from_str(text: &str, stamper: &mut Stamper) -> AppResult<Vec<Question>> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()?;

    let rows = records
        .iter()
        .map(|record| record.iter().collect::<Vec<&str>>());

    Ok(parse_rows(rows, stamper))
}

/// 读取 CSV 文件并收集题目
///
/// 文件无法打开或不是合法 UTF-8 时返回错误，与"文件可读但没有有效行"（空列表）区分
pub fn collect_from_path(csv_file_path: &Path, stamper: &mut Stamper) -> AppResult<Vec<Question>> {
    let path = csv_file_path.display().to_string();
    let content =
        fs::read_to_string(csv_file_path).map_err(|e| AppError::file_read_failed(&path, e))?;

    info!("Reading {} ({} bytes)", path, content.len());
    collect_from_str(&content, stamper)
}
