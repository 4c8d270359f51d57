/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出文件名后缀（不含扩展名）
    pub output_suffix: String,
    /// 预设的转换参数文件（TOML），设置后跳过交互式提问
    pub preset_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            output_suffix: "_finals".to_string(),
            preset_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_suffix: std::env::var("OUTPUT_SUFFIX").ok().filter(|v| !v.trim().is_empty()).unwrap_or(default.output_suffix),
            preset_file: std::env::var("CONVERTER_PRESET").ok().filter(|v| !v.trim().is_empty()).or(default.preset_file),
        }
    }
}
