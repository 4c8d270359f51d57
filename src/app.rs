use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::Prompter;
use crate::models::loaders::load_settings_preset;
use crate::models::settings::ConversionSettings;
use crate::services::settings_prompt::{ask_input_path, ask_settings};
use crate::services::{JsonWriter, Stamper};
use crate::utils::logging::{log_startup, print_summary};
use crate::workflow::{assemble, collect_from_path};

/// 单次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 输入文件不存在，未做任何处理
    InputNotFound { path: PathBuf },
    /// 输入文件无法读取或解码
    ReadFailed { path: PathBuf, reason: String },
    /// 文件可读，但没有有效题目
    NoQuestions { path: PathBuf },
    /// 输出文件写入失败
    WriteFailed { path: PathBuf, reason: String },
    /// 转换成功
    Converted {
        output_path: PathBuf,
        question_count: usize,
    },
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);
        Ok(Self { config })
    }

    /// 使用标准输入输出运行
    pub fn run(&self, input_arg: Option<String>) -> Result<RunOutcome> {
        let mut prompter = Prompter::stdio();
        self.run_with(input_arg, &mut prompter)
    }

    /// 运行完整转换流程
    ///
    /// 读取 → 询问参数 → 收集题目 → 组装 → 写入，只有全部成功后才写出文件
    pub fn run_with<R: BufRead, W: Write>(
        &self,
        input_arg: Option<String>,
        prompter: &mut Prompter<R, W>,
    ) -> Result<RunOutcome> {
        let input_path = match input_arg {
            Some(arg) => PathBuf::from(arg),
            None => ask_input_path(prompter).context("Failed to read input path")?,
        };

        if !input_path.exists() {
            error!("Error: File '{}' not found!", input_path.display());
            return Ok(RunOutcome::InputNotFound { path: input_path });
        }

        let settings = self.acquire_settings(prompter)?;

        info!("");
        info!("=== Processing CSV File ===");
        info!("Input file: {}", input_path.display());

        let mut stamper = Stamper::new();
        let questions = match collect_from_path(&input_path, &mut stamper) {
            Ok(questions) => questions,
            Err(e) => {
                error!("Error reading CSV file: {}", e);
                warn!("No valid questions found in CSV file!");
                return Ok(RunOutcome::ReadFailed {
                    path: input_path,
                    reason: e.to_string(),
                });
            }
        };

        if questions.is_empty() {
            warn!("No valid questions found in CSV file!");
            return Ok(RunOutcome::NoQuestions { path: input_path });
        }

        info!("Successfully processed {} questions", questions.len());

        let document = assemble(questions, &settings, &mut stamper);
        let writer = JsonWriter::for_input(&input_path, &self.config.output_suffix);

        if let Err(e) = writer.write(&document) {
            error!("Error saving JSON file: {}", e);
            error!("Failed to save output file!");
            return Ok(RunOutcome::WriteFailed {
                path: writer.path().to_path_buf(),
                reason: e.to_string(),
            });
        }

        print_summary(&settings, &document, &writer.path().display().to_string());

        Ok(RunOutcome::Converted {
            output_path: writer.path().to_path_buf(),
            question_count: document.question_count(),
        })
    }

    /// 获取转换参数：有预设文件时直接加载，否则交互式询问
    fn acquire_settings<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<ConversionSettings> {
        match &self.config.preset_file {
            Some(preset) => load_settings_preset(Path::new(preset))
                .with_context(|| format!("Failed to load conversion preset: {}", preset)),
            None => ask_settings(prompter).context("Failed to read conversion settings"),
        }
    }
}
