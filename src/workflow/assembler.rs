//! 输出文档组装 - 流程层
//!
//! 将收集到的题目和转换参数组合为最终文档，不做任何 I/O

use tracing::debug;

use crate::models::bank::{BankKind, QuestionBank};
use crate::models::document::{Metadata, OutputDocument, QuestionEntry, FORMAT_VERSION};
use crate::models::question::Question;
use crate::models::settings::ConversionSettings;
use crate::services::stamper::Stamper;

/// 组装输出文档
///
/// `create_bank` 为真时全部题目装入一个题库，否则原样作为单题列表
pub fn assemble(
    questions: Vec<Question>,
    settings: &ConversionSettings,
    stamper: &mut Stamper,
) -> OutputDocument {
    let metadata = build_metadata(settings, stamper);

    let entries = if settings.create_bank {
        vec![QuestionEntry::Bank(build_bank(questions, settings, stamper))]
    } else {
        questions.into_iter().map(QuestionEntry::Single).collect()
    };

    OutputDocument {
        metadata,
        questions: entries,
    }
}

fn build_metadata(settings: &ConversionSettings, stamper: &Stamper) -> Metadata {
    Metadata {
        name: settings.name.clone(),
        subject: settings.subject.clone(),
        allow_answer_change: settings.allow_answer_change,
        show_results: settings.show_results,
        created_at: stamper.timestamp(),
        version: FORMAT_VERSION.to_string(),
        time_limit: settings.time_limit(),
    }
}

fn build_bank(
    questions: Vec<Question>,
    settings: &ConversionSettings,
    stamper: &mut Stamper,
) -> QuestionBank {
    let requested = settings.questions_to_select();
    let questions_to_select = requested.min(questions.len());
    if questions_to_select < requested {
        debug!(
            "Bank selection clamped from {} to {} available questions",
            requested, questions_to_select
        );
    }

    let stamp = stamper.next();
    QuestionBank {
        id: stamp.id,
        kind: BankKind::QuestionBank,
        name: settings.bank_name(),
        questions_to_select,
        questions,
        minimized: false,
        created_at: stamp.created_at,
    }
}
