use serde::{Deserialize, Serialize};

use super::question::Question;

/// 题库类型标记，序列化为 `"questionBank"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankKind {
    #[serde(rename = "questionBank")]
    QuestionBank,
}

/// 题库
///
/// 包含全部题目，实际抽题由答题端在使用时完成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBank {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: BankKind,
    pub name: String,
    /// 不超过 `questions.len()`
    pub questions_to_select: usize,
    pub questions: Vec<Question>,
    /// 界面折叠状态，创建时总为 false
    pub minimized: bool,
    pub created_at: String,
}
