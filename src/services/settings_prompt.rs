//! 转换参数提问 - 业务能力层
//!
//! 通过终端逐项询问转换参数，空白或非法输入回退到默认值

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::infrastructure::Prompter;
use crate::models::settings::{
    ConversionSettings, DEFAULT_QUESTIONS_TO_SELECT, DEFAULT_SET_NAME, DEFAULT_SUBJECT,
};

/// 询问输入 CSV 路径，去掉首尾空白和引号
pub fn ask_input_path<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<PathBuf> {
    let answer = prompter.ask("\nEnter path to CSV file: ")?;
    Ok(PathBuf::from(clean_path_answer(&answer)))
}

/// 逐项询问转换参数
pub fn ask_settings<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> io::Result<ConversionSettings> {
    prompter.say("=== Finals Simulator CSV Converter ===\n")?;

    let name = or_default(prompter.ask("Enter question set name: ")?, DEFAULT_SET_NAME);
    let subject = or_default(prompter.ask("Enter subject (optional): ")?, DEFAULT_SUBJECT);

    prompter.say("\n=== Test Configuration ===")?;
    let time_limit_answer =
        prompter.ask("Enter time limit in minutes (leave blank for no limit): ")?;
    let time_limit_minutes = match parse_time_limit(&time_limit_answer) {
        Ok(minutes) => minutes,
        Err(()) => {
            prompter.say("Invalid time limit, setting to no limit")?;
            None
        }
    };

    let allow_answer_change =
        default_yes(&prompter.ask("Allow answer changes during test? (y/n, default: y): ")?);
    let show_results =
        default_yes(&prompter.ask("Show results immediately after test? (y/n, default: y): ")?);

    prompter.say("\n=== Question Bank Configuration ===")?;
    let create_bank = default_no(&prompter.ask("Create as a question bank? (y/n, default: n): ")?);

    let mut bank_name = None;
    let mut questions_to_select = None;

    if create_bank {
        let answer = prompter.ask("Enter bank name: ")?;
        bank_name = Some(or_default(answer, &format!("{} Bank", name)));

        let answer = prompter.ask("How many questions to select from the bank? ")?;
        questions_to_select = Some(match parse_selection_count(&answer) {
            Some(count) => count,
            None => {
                prompter.say(&format!(
                    "Invalid number, defaulting to {} questions",
                    DEFAULT_QUESTIONS_TO_SELECT
                ))?;
                DEFAULT_QUESTIONS_TO_SELECT
            }
        });
    }

    Ok(ConversionSettings {
        name,
        subject,
        time_limit_minutes,
        allow_answer_change,
        show_results,
        create_bank,
        bank_name,
        questions_to_select,
    })
}

fn clean_path_answer(answer: &str) -> &str {
    answer.trim().trim_matches('"')
}

fn or_default(answer: String, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer
    }
}

/// 空白为不限时，非数字返回 Err，0 视为不限时
fn parse_time_limit(answer: &str) -> Result<Option<u32>, ()> {
    if answer.is_empty() {
        return Ok(None);
    }
    answer
        .parse::<u32>()
        .map(|minutes| (minutes > 0).then_some(minutes))
        .map_err(|_| ())
}

/// 只有 "n" 表示否
fn default_yes(answer: &str) -> bool {
    !answer.eq_ignore_ascii_case("n")
}

/// 只有 "y" 表示是
fn default_no(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

/// 抽题数量必须是正整数
fn parse_selection_count(answer: &str) -> Option<usize> {
    answer.parse::<usize>().ok().filter(|&count| count > 0)
}
