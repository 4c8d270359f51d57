//! # Finals CSV Converter
//!
//! 将 CSV 题目表转换为 Finals Simulator 使用的 JSON 题目集
//!
//! ## 架构设计
//!
//! 与题目相关的逻辑全部是纯函数，I/O 只出现在最外层：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有终端输入输出，只暴露"提问"能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单行或单个值
//! - `normalize_text` - 空白折叠
//! - `parse_row` - 单行 CSV → 题目或跳过原因
//! - `Stamper` - 运行内唯一的 ID 与时间戳
//! - `JsonWriter` - 写输出文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/collector` - 逐行解析整个 CSV，保持顺序
//! - `workflow/assembler` - 题目 + 转换参数 → 输出文档
//!
//! ### ④ 编排层（App）
//! - `app` - 获取输入、询问参数、调用流程层并写出结果

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, RunOutcome};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ConversionSettings, OutputDocument, Question, QuestionBank};
pub use services::{parse_row, Stamper};
pub use workflow::{assemble, collect_from_path, parse_rows};
