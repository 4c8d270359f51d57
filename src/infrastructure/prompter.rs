//! 终端交互 - 基础设施层
//!
//! 持有唯一的输入/输出流，只暴露"提问并读取一行"的能力

use std::io::{self, BufRead, Write};

/// 终端提问器
///
/// 职责：
/// - 持有输入输出流
/// - 输出提示并读取一行回答
/// - 不认识 ConversionSettings
/// - 输入结束（EOF）视为空回答
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// 使用标准输入输出
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 输出提示并读取一行，返回去掉首尾空白的回答
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// 输出一行提示信息
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// 取回输出流（用于测试检查提示内容）
    pub fn into_output(self) -> W {
        self.output
    }
}
