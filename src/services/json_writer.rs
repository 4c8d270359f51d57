//! 输出写入服务 - 业务能力层
//!
//! 只负责"写 JSON 文件"能力，不关心流程

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::document::OutputDocument;

/// 输出写入服务
///
/// 整个文档先完整序列化，再一次性写入磁盘
pub struct JsonWriter {
    output_path: PathBuf,
}

impl JsonWriter {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// 根据输入文件推导输出路径：`<输入目录>/<文件名><后缀>.json`
    pub fn for_input(input_path: &Path, suffix: &str) -> Self {
        Self::with_path(output_path_for(input_path, suffix))
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    /// 写入文档
    pub fn write(&self, document: &OutputDocument) -> AppResult<()> {
        let json = document.to_pretty_json()?;
        debug!(
            "Writing {} bytes to {}",
            json.len(),
            self.output_path.display()
        );

        fs::write(&self.output_path, json)
            .map_err(|e| AppError::file_write_failed(self.output_path.display().to_string(), e))
    }
}

/// 输出文件路径，与输入文件位于同一目录
pub fn output_path_for(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{}{}.json", stem, suffix);

    match input_path.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
