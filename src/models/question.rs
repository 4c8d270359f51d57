use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 选项字母，按列位置固定分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
    E,
}

impl OptionLetter {
    /// 按列顺序排列的全部字母
    pub const ALL: [OptionLetter; 5] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
        OptionLetter::E,
    ];

    /// 从 0 起始的位置获取字母
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 从 1 起始的正确答案序号获取字母
    pub fn from_selector(selector: i64) -> Option<Self> {
        if (1..=5).contains(&selector) {
            Self::from_index((selector - 1) as usize)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
            OptionLetter::E => "E",
        }
    }
}

impl std::fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单道题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub question: String,
    /// 只包含非空选项，键按 A..E 排序
    pub options: BTreeMap<OptionLetter, String>,
    /// 不与 options 交叉校验
    pub correct_answer: OptionLetter,
    /// 单题限时（秒）
    pub time_limit: u32,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}
