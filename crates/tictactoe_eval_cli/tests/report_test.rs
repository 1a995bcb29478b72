//! Tests for evaluating batches of boards and rendering results.

use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;
use tictactoe_eval::BoardState;
use tictactoe_eval_cli::{Cli, EvalConfig, Report, collect_inputs, parse_lines, run};

fn render(config: &EvalConfig, inputs: &[&str]) -> (String, tictactoe_eval_cli::Summary) {
    let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
    let mut out = Vec::new();
    let summary = run(config, &inputs, &mut out).expect("Run failed");
    (String::from_utf8(out).expect("Output is UTF-8"), summary)
}

fn config_with(args: &[&str]) -> EvalConfig {
    let cli = Cli::try_parse_from(std::iter::once("tictactoe_eval").chain(args.iter().copied()))
        .expect("Flags should parse");
    EvalConfig::default().with_overrides(&cli)
}

#[test]
fn test_text_output() {
    let (out, summary) = render(&EvalConfig::default(), &["xxxo.oxo.", "ox..ox.xo", "e"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["xxxo.oxo.\tx_wins", "ox..ox.xo\to_wins", "e\tno_winner"]);
    assert_eq!(*summary.x_wins(), 1);
    assert_eq!(*summary.o_wins(), 1);
    assert_eq!(*summary.no_winner(), 1);
    assert_eq!(summary.total(), 3);
    assert!(summary.is_success(true));
}

#[test]
fn test_text_output_explains_unreachable() {
    let (out, summary) = render(&EvalConfig::default(), &["O"]);
    assert!(out.starts_with("O\tunreachable_state ("));
    assert_eq!(summary.count(BoardState::UnreachableState), 1);
    assert!(summary.is_success(false));
    assert!(!summary.is_success(true));
}

#[test]
fn test_text_output_shows_board() {
    let config = config_with(&["--show-board"]);
    let (out, _) = render(&config, &["xxo.oxo.."]);
    assert_eq!(out, "xxo.oxo..\to_wins\nXXO\n.OX\nO..\nO: anti-diagonal\n");
}

#[test]
fn test_winning_lines_listed_in_text_and_json() {
    let (text, _) = render(&config_with(&["--show-board"]), &["xxxo.oxo."]);
    assert_eq!(text, "xxxo.oxo.\tx_wins\nXXX\nO.O\nXO.\nX: row 0\n");

    let (json, _) = render(&config_with(&["--format", "json"]), &["xxxo.oxo."]);
    let record: serde_json::Value = serde_json::from_str(json.trim_end()).expect("Valid JSON");
    assert_eq!(
        record["lines"],
        serde_json::json!([{ "line": "row 0", "player": "X" }])
    );
}

#[test]
fn test_no_lines_without_winner() {
    let (text, _) = render(&config_with(&["--show-board"]), &["xxoooxxxo"]);
    assert_eq!(text, "xxoooxxxo\tno_winner\nXXO\nOOX\nXXO\n");

    let (json, _) = render(&config_with(&["--format", "json"]), &["xxoooxxxo"]);
    let record: serde_json::Value = serde_json::from_str(json.trim_end()).expect("Valid JSON");
    assert!(record.get("lines").is_none());
}

#[test]
fn test_invalid_board_fails_run() {
    let (out, summary) = render(&EvalConfig::default(), &["xxooo", "X"]);
    assert!(out.starts_with("xxooo\tinvalid_board (Invalid board: length 5"));
    assert_eq!(*summary.invalid(), 1);
    assert_eq!(summary.total(), 2);
    assert!(!summary.is_success(false));
}

#[test]
fn test_invalid_length_counts_characters() {
    let (out, summary) = render(&EvalConfig::default(), &["ééé"]);
    assert!(out.contains("Invalid board: length 3 "), "{out}");
    assert_eq!(*summary.invalid(), 1);
}

#[test]
fn test_json_output() {
    let config = config_with(&["--format", "json"]);
    let (out, _) = render(&config, &["XXX...Ooo", ""]);
    let records: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).expect("Valid JSON"))
        .collect();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["board"], "XXX...Ooo");
    assert_eq!(records[0]["state"], "unreachable_state");
    assert_eq!(records[0]["reason"], "multiple_lines_per_orientation");
    assert_eq!(records[0]["x_count"], 3);
    assert_eq!(records[0]["o_count"], 3);
    assert_eq!(records[0]["side"], 3);
    assert_eq!(records[0]["lines"].as_array().map(Vec::len), Some(2));

    assert_eq!(records[1]["board"], "");
    assert!(records[1].get("state").is_none());
    assert!(records[1].get("lines").is_none());
    assert!(records[1]["error"].as_str().unwrap().contains("length 0"));
}

#[test]
fn test_report_state() {
    assert_eq!(Report::evaluate("XXO.").state(), Some(BoardState::XWins));
    assert_eq!(Report::evaluate("XXO").state(), None);
}

#[test]
fn test_parse_lines_skips_blank_lines() {
    let boards = parse_lines("xxxo.oxo.\r\n\n ox..ox.x\nO\n");
    assert_eq!(boards, vec!["xxxo.oxo.", " ox..ox.x", "O"]);
}

#[test]
fn test_collect_inputs_prefers_arguments() {
    let cli = Cli::try_parse_from(["tictactoe_eval", "--file", "/nonexistent", "X", "O"])
        .expect("Flags should parse");
    assert_eq!(collect_inputs(&cli).expect("Arguments"), vec!["X", "O"]);
}

#[test]
fn test_collect_inputs_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"xxoooxxxo\n\nX....X....X....X\n")
        .expect("Failed to write boards");
    let path = file.path().to_str().expect("Invalid path").to_string();
    let cli = Cli::try_parse_from(["tictactoe_eval", "--file", path.as_str()])
        .expect("Flags should parse");
    let inputs = collect_inputs(&cli).expect("File should be read");
    assert_eq!(inputs, vec!["xxoooxxxo", "X....X....X....X"]);

    let (out, _) = render(&EvalConfig::default(), &["xxoooxxxo"]);
    assert_eq!(out, "xxoooxxxo\tno_winner\n");
}

#[test]
fn test_collect_inputs_missing_file() {
    let cli = Cli::try_parse_from(["tictactoe_eval", "--file", "/nonexistent/boards.txt"])
        .expect("Flags should parse");
    let err = collect_inputs(&cli).unwrap_err();
    assert!(err.to_string().contains("Failed to read board file"));
}
