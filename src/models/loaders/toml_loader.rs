use crate::error::{AppError, AppResult, FileError};
use crate::models::settings::ConversionSettings;
use std::fs;
use std::path::Path;

/// 从 TOML 预设文件加载转换参数
///
/// 缺失的键使用交互模式下的默认值
pub fn load_settings_preset(toml_file_path: &Path) -> AppResult<ConversionSettings> {
    let path = toml_file_path.display().to_string();

    if !toml_file_path.exists() {
        return Err(AppError::file_not_found(path));
    }

    let content =
        fs::read_to_string(toml_file_path).map_err(|e| AppError::file_read_failed(&path, e))?;

    let settings: ConversionSettings = toml::from_str(&content)
        .map_err(|source| AppError::File(FileError::TomlParseFailed { path, source }))?;

    tracing::info!(
        "Loaded conversion preset '{}' from {}",
        settings.name,
        toml_file_path.display()
    );

    Ok(settings)
}
