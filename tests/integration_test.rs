use finals_csv_converter::infrastructure::Prompter;
use finals_csv_converter::models::{OptionLetter, OutputDocument, QuestionEntry};
use finals_csv_converter::{App, Config, RunOutcome};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

const SAMPLE_CSV: &str = "\u{feff}Text of the question,Question Type,Option 1,Option 2,Option 3,Option 4,Option 5,Correct Answer,Time in seconds,Image Link,Answer explanation
What is 2+2?,multiple choice,3,4,5,,,2,20,,Basic arithmetic
\"Which gas do plants\nabsorb?\",multiple choice,Oxygen,,Carbon dioxide,,,3,,https://example.com/leaf.png,
,multiple choice,orphan,,,,,1,,,
Ποια είναι η πρωτεύουσα της Ελλάδας;,multiple choice,Αθήνα,Σπάρτη,,,,9,abc,,
";

fn run(config: Config, input: &Path, answers: &str) -> RunOutcome {
    let app = App::initialize(config).unwrap();
    let mut prompter = Prompter::new(Cursor::new(answers.to_string()), Vec::new());
    app.run_with(Some(input.display().to_string()), &mut prompter)
        .unwrap()
}

fn read_document(path: &Path) -> OutputDocument {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_convert_flat_question_set() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("science.csv");
    fs::write(&input, SAMPLE_CSV).unwrap();

    // 名称、科目、限时、允许修改、显示结果、不建题库
    let outcome = run(Config::default(), &input, "Science Quiz\nScience\n20\n\nn\nn\n");

    let expected_output = dir.path().join("science_finals.json");
    assert_eq!(
        outcome,
        RunOutcome::Converted {
            output_path: expected_output.clone(),
            question_count: 3,
        }
    );

    let content = fs::read_to_string(&expected_output).unwrap();
    // 非 ASCII 字符原样写出
    assert!(content.contains("Ποια είναι η πρωτεύουσα της Ελλάδας;"));

    let doc = read_document(&expected_output);
    assert_eq!(doc.metadata.name, "Science Quiz");
    assert_eq!(doc.metadata.subject, "Science");
    assert_eq!(doc.metadata.time_limit, Some(20));
    assert!(doc.metadata.allow_answer_change);
    assert!(!doc.metadata.show_results);
    assert_eq!(doc.questions.len(), 3);

    let questions: Vec<_> = doc
        .questions
        .iter()
        .map(|entry| match entry {
            QuestionEntry::Single(q) => q,
            QuestionEntry::Bank(_) => panic!("unexpected bank"),
        })
        .collect();

    assert_eq!(questions[0].question, "What is 2+2?");
    assert_eq!(questions[0].correct_answer, OptionLetter::B);
    assert_eq!(questions[0].time_limit, 20);
    assert_eq!(questions[0].explanation.as_deref(), Some("Basic arithmetic"));

    assert_eq!(questions[1].question, "Which gas do plants absorb?");
    let letters: Vec<_> = questions[1].options.keys().copied().collect();
    assert_eq!(letters, vec![OptionLetter::A, OptionLetter::C]);
    assert_eq!(questions[1].correct_answer, OptionLetter::C);
    assert_eq!(
        questions[1].image_link.as_deref(),
        Some("https://example.com/leaf.png")
    );
    assert_eq!(questions[1].explanation, None);

    assert_eq!(questions[2].correct_answer, OptionLetter::A);
    assert_eq!(questions[2].time_limit, 30);

    let mut ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_convert_as_bank_with_clamping() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bank.csv");
    fs::write(&input, SAMPLE_CSV).unwrap();

    let outcome = run(Config::default(), &input, "\n\n\n\n\ny\n\n100\n");
    let output_path = match outcome {
        RunOutcome::Converted { output_path, .. } => output_path,
        other => panic!("conversion should succeed: {:?}", other),
    };

    let doc = read_document(&output_path);
    assert_eq!(doc.metadata.name, "Imported Question Set");
    assert_eq!(doc.metadata.time_limit, None);
    assert_eq!(doc.questions.len(), 1);

    let bank = doc.bank().unwrap();
    assert_eq!(bank.name, "Imported Question Set Bank");
    assert_eq!(bank.questions.len(), 3);
    assert_eq!(bank.questions_to_select, 3);
    assert!(!bank.minimized);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(raw["questions"][0]["type"], "questionBank");
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.csv");

    let outcome = run(Config::default(), &input, "");
    assert_eq!(outcome, RunOutcome::InputNotFound { path: input });
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_header_only_file_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    fs::write(
        &input,
        "Text of the question,Question Type,Option 1,Option 2,Option 3,Option 4,Option 5,Correct Answer\n",
    )
    .unwrap();

    let outcome = run(Config::default(), &input, "");
    assert_eq!(outcome, RunOutcome::NoQuestions { path: input });
    assert!(!dir.path().join("empty_finals.json").exists());
}

#[test]
fn test_undecodable_file_reports_read_failure() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("latin1.csv");
    fs::write(&input, b"Caf\xe9 question,mc,a,b,,,,1\n").unwrap();

    let outcome = run(Config::default(), &input, "");
    assert!(matches!(outcome, RunOutcome::ReadFailed { .. }));
    assert!(!dir.path().join("latin1_finals.json").exists());
}

#[test]
fn test_preset_skips_prompts_and_custom_suffix() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("history.csv");
    fs::write(&input, SAMPLE_CSV).unwrap();
    let preset = dir.path().join("preset.toml");
    fs::write(
        &preset,
        "name = \"History Final\"\nsubject = \"History\"\ncreate_bank = true\nquestions_to_select = 2\n",
    )
    .unwrap();

    let config = Config {
        output_suffix: "_quiz".to_string(),
        preset_file: Some(preset.display().to_string()),
        ..Config::default()
    };

    // 没有任何交互输入
    let outcome = run(config, &input, "");
    let (output_path, question_count) = match outcome {
        RunOutcome::Converted {
            output_path,
            question_count,
        } => (output_path, question_count),
        other => panic!("conversion should succeed: {:?}", other),
    };
    assert_eq!(output_path, dir.path().join("history_quiz.json"));
    assert_eq!(question_count, 3);

    let doc = read_document(&output_path);
    assert_eq!(doc.metadata.name, "History Final");
    let bank = doc.bank().unwrap();
    assert_eq!(bank.name, "History Final Bank");
    assert_eq!(bank.questions_to_select, 2);
}
