//! 输出文档结构
//!
//! 顶层形如 `{"metadata": {...}, "questions": [...]}`

use serde::{Deserialize, Serialize};

use super::bank::QuestionBank;
use super::question::Question;

/// 输出格式版本
pub const FORMAT_VERSION: &str = "1.0";

/// 题目集元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    pub subject: String,
    pub allow_answer_change: bool,
    pub show_results: bool,
    pub created_at: String,
    pub version: String,
    /// 整套题限时（分钟）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

/// `questions` 列表中的一项：单题或题库
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionEntry {
    Bank(QuestionBank),
    Single(Question),
}

/// 最终输出文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub metadata: Metadata,
    pub questions: Vec<QuestionEntry>,
}

impl OutputDocument {
    /// 序列化为带缩进的 JSON，非 ASCII 字符原样保留
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 文档中的题库（若有）
    pub fn bank(&self) -> Option<&QuestionBank> {
        self.questions.iter().find_map(|entry| match entry {
            QuestionEntry::Bank(bank) => Some(bank),
            QuestionEntry::Single(_) => None,
        })
    }

    /// 文档包含的题目总数（展开题库）
    pub fn question_count(&self) -> usize {
        self.questions
            .iter()
            .map(|entry| match entry {
                QuestionEntry::Bank(bank) => bank.questions.len(),
                QuestionEntry::Single(_) => 1,
            })
            .sum()
    }
}
