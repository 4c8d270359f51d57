//! 行解析 - 业务能力层
//!
//! 只处理单行 CSV，把它转换为一道题目或给出跳过原因。
//! 数值字段解析失败时一律回退到默认值，不产生错误。

use std::collections::BTreeMap;

use crate::models::question::{OptionLetter, Question};
use crate::services::normalizer::normalize_text;
use crate::services::stamper::Stamper;

/// 表头行标记，题干以此开头的行会被跳过
pub const HEADER_MARKER: &str = "Text of the question";
/// 单题默认限时（秒）
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30;
/// 有效行的最少列数
pub const MIN_COLUMNS: usize = 8;

const COL_QUESTION: usize = 0;
const COL_TYPE: usize = 1;
const COL_FIRST_OPTION: usize = 2;
const COL_CORRECT_ANSWER: usize = 7;
const COL_TIME_LIMIT: usize = 8;
const COL_IMAGE_LINK: usize = 9;
const COL_EXPLANATION: usize = 10;

/// 行被跳过的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 列数不足
    TooFewColumns { found: usize },
    /// 题干为空
    EmptyQuestion,
    /// 重复出现的表头行
    HeaderRow,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::TooFewColumns { found } => {
                write!(f, "only {} columns, need at least {}", found, MIN_COLUMNS)
            }
            SkipReason::EmptyQuestion => write!(f, "empty question text"),
            SkipReason::HeaderRow => write!(f, "header row"),
        }
    }
}

/// 成功解析的一行
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub question: Question,
    /// 第 1 列的题型，目前不写入输出
    pub question_type: String,
}

/// 单行解析结果
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Parsed(ParsedRow),
    Skipped(SkipReason),
}

impl RowOutcome {
    pub fn into_question(self) -> Option<Question> {
        match self {
            RowOutcome::Parsed(row) => Some(row.question),
            RowOutcome::Skipped(_) => None,
        }
    }
}

/// 解析一行 CSV
///
/// 列布局：0=题干，1=题型，2-6=选项 A-E，7=正确答案序号（1 起），
/// 8=限时秒数，9=图片链接，10=解析
pub fn parse_row<S: AsRef<str>>(row: &[S], stamper: &mut Stamper) -> RowOutcome {
    if row.len() < MIN_COLUMNS {
        return RowOutcome::Skipped(SkipReason::TooFewColumns { found: row.len() });
    }

    let question_text = normalized_cell(row, COL_QUESTION);
    if question_text.is_empty() {
        return RowOutcome::Skipped(SkipReason::EmptyQuestion);
    }
    if question_text.starts_with(HEADER_MARKER) {
        return RowOutcome::Skipped(SkipReason::HeaderRow);
    }

    let question_type = normalized_cell(row, COL_TYPE);
    let options = extract_options(row);
    let correct_answer =
        resolve_correct_answer(row.get(COL_CORRECT_ANSWER).map(|cell| cell.as_ref()));
    let time_limit = resolve_time_limit(row.get(COL_TIME_LIMIT).map(|cell| cell.as_ref()));
    let image_link = non_empty(normalized_cell(row, COL_IMAGE_LINK));
    let explanation = non_empty(normalized_cell(row, COL_EXPLANATION));

    let stamp = stamper.next();

    RowOutcome::Parsed(ParsedRow {
        question: Question {
            id: stamp.id,
            question: question_text,
            options,
            correct_answer,
            time_limit,
            created_at: stamp.created_at,
            image_link,
            explanation,
        },
        question_type,
    })
}

/// 按固定列位置提取选项，空列直接省略，不做压缩
fn extract_options<S: AsRef<str>>(row: &[S]) -> BTreeMap<OptionLetter, String> {
    OptionLetter::ALL
        .iter()
        .enumerate()
        .filter_map(|(offset, &letter)| {
            let text = normalized_cell(row, COL_FIRST_OPTION + offset);
            (!text.is_empty()).then_some((letter, text))
        })
        .collect()
}

/// 解析正确答案序号，缺失、非数字或超出 1..=5 时回退到 A
fn resolve_correct_answer(cell: Option<&str>) -> OptionLetter {
    cell.and_then(|value| value.trim().parse::<i64>().ok())
        .and_then(OptionLetter::from_selector)
        .unwrap_or(OptionLetter::A)
}

/// 解析限时秒数，缺失、空白或无法解析为正整数时使用默认值
fn resolve_time_limit(cell: Option<&str>) -> u32 {
    cell.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_TIME_LIMIT_SECS)
}

fn normalized_cell<S: AsRef<str>>(row: &[S], index: usize) -> String {
    row.get(index)
        .map(|cell| normalize_text(cell.as_ref()))
        .unwrap_or_default()
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}
