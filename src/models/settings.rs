use serde::{Deserialize, Serialize};

/// 默认题目集名称
pub const DEFAULT_SET_NAME: &str = "Imported Question Set";
/// 默认科目
pub const DEFAULT_SUBJECT: &str = "General";
/// 题库抽题数量的默认值
pub const DEFAULT_QUESTIONS_TO_SELECT: usize = 5;

/// 转换参数
///
/// 由交互式提问或 TOML 预设文件获得，创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    pub name: String,
    pub subject: String,
    /// 整套题限时（分钟），None 表示不限时
    pub time_limit_minutes: Option<u32>,
    pub allow_answer_change: bool,
    pub show_results: bool,
    pub create_bank: bool,
    pub bank_name: Option<String>,
    pub questions_to_select: Option<usize>,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_SET_NAME.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            time_limit_minutes: None,
            allow_answer_change: true,
            show_results: true,
            create_bank: false,
            bank_name: None,
            questions_to_select: None,
        }
    }
}

impl ConversionSettings {
    /// 题库名称，未设置时为 "<name> Bank"
    pub fn bank_name(&self) -> String {
        self.bank_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} Bank", self.name))
    }

    /// 配置的抽题数量，未设置或为 0 时取默认值
    pub fn questions_to_select(&self) -> usize {
        self.questions_to_select
            .filter(|&count| count > 0)
            .unwrap_or(DEFAULT_QUESTIONS_TO_SELECT)
    }

    /// 有效的整套题限时，0 视为不限时
    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit_minutes.filter(|&minutes| minutes > 0)
    }
}
