//! Per-board results and the run summary.

use crate::config::{EvalConfig, OutputFormat};
use derive_getters::Getters;
use serde::Serialize;
use std::io::Write;
use strum::IntoEnumIterator;
use tictactoe_eval::rules::winning_lines;
use tictactoe_eval::{Assessment, Board, BoardError, BoardState, Player, UnreachableReason};
use tracing::{debug, info, instrument, warn};

/// Result of evaluating one input line.
#[derive(Debug, Clone)]
pub struct Report {
    /// The raw input, as given.
    input: String,
    /// The parsed board and its assessment, or the parse error.
    outcome: Result<(Board, Assessment), BoardError>,
}

impl Report {
    /// Parses and evaluates one input.
    #[instrument(skip(input), fields(length = input.chars().count()))]
    pub fn evaluate(input: &str) -> Self {
        let input = input.to_string();
        let outcome = Board::new(&input).map(|board| {
            let assessment = board.assess();
            (board, assessment)
        });
        if let Err(e) = &outcome {
            warn!(input = %input, error = %e, "Invalid board");
        }
        Self { input, outcome }
    }

    /// The raw input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The classification, if the input parsed.
    pub fn state(&self) -> Option<BoardState> {
        self.outcome
            .as_ref()
            .ok()
            .map(|(_, assessment)| *assessment.state())
    }

    /// Renders the report as one text record.
    pub fn to_text(&self, show_board: bool) -> String {
        match &self.outcome {
            Ok((board, assessment)) => {
                let mut line = format!("{}\t{}", self.input, assessment.state());
                if let Some(reason) = assessment.reason() {
                    line.push_str(&format!(" ({})", reason.description()));
                }
                if show_board {
                    line.push('\n');
                    line.push_str(&board.to_string());
                    for (kind, player) in winning_lines(board) {
                        line.push_str(&format!("\n{}: {}", player, kind));
                    }
                }
                line
            }
            Err(e) => format!("{}\tinvalid_board ({})", self.input, e),
        }
    }

    /// Renders the report as one JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let record = match &self.outcome {
            Ok((board, assessment)) => JsonRecord {
                board: &self.input,
                state: Some(*assessment.state()),
                reason: *assessment.reason(),
                x_count: Some(*assessment.x_count()),
                o_count: Some(*assessment.o_count()),
                side: Some(*assessment.side()),
                lines: winning_lines(board)
                    .into_iter()
                    .map(|(kind, player)| LineRecord {
                        line: kind.to_string(),
                        player,
                    })
                    .collect(),
                error: None,
            },
            Err(e) => JsonRecord {
                board: &self.input,
                state: None,
                reason: None,
                x_count: None,
                o_count: None,
                side: None,
                lines: Vec::new(),
                error: Some(e.to_string()),
            },
        };
        serde_json::to_string(&record)
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    board: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<BoardState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<UnreachableReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    o_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    side: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    lines: Vec<LineRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// A completed line and its owner.
#[derive(Serialize)]
struct LineRecord {
    line: String,
    player: Player,
}

/// Counts of results across a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Summary {
    /// Boards with no winner.
    no_winner: usize,
    /// Boards won by X.
    x_wins: usize,
    /// Boards won by O.
    o_wins: usize,
    /// Well-formed but unreachable boards.
    unreachable: usize,
    /// Inputs whose length is not a positive perfect square.
    invalid: usize,
}

impl Summary {
    /// Adds one report to the counts.
    pub fn record(&mut self, report: &Report) {
        match report.state() {
            Some(BoardState::NoWinner) => self.no_winner += 1,
            Some(BoardState::XWins) => self.x_wins += 1,
            Some(BoardState::OWins) => self.o_wins += 1,
            Some(BoardState::UnreachableState) => self.unreachable += 1,
            None => self.invalid += 1,
        }
    }

    /// Number of boards in the given state.
    pub fn count(&self, state: BoardState) -> usize {
        match state {
            BoardState::NoWinner => self.no_winner,
            BoardState::XWins => self.x_wins,
            BoardState::OWins => self.o_wins,
            BoardState::UnreachableState => self.unreachable,
        }
    }

    /// Total number of inputs seen.
    pub fn total(&self) -> usize {
        BoardState::iter().map(|state| self.count(state)).sum::<usize>() + self.invalid
    }

    /// Checks if the run should exit successfully.
    pub fn is_success(&self, fail_on_unreachable: bool) -> bool {
        self.invalid == 0 && !(fail_on_unreachable && self.unreachable > 0)
    }
}

/// Evaluates every input and writes one record per input.
///
/// # Errors
///
/// Fails only when writing to `out` fails.
#[instrument(skip(config, inputs, out), fields(count = inputs.len()))]
pub fn run(config: &EvalConfig, inputs: &[String], out: &mut impl Write) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();
    for input in inputs {
        let report = Report::evaluate(input);
        summary.record(&report);
        let record = match config.output() {
            OutputFormat::Text => report.to_text(*config.show_board()),
            OutputFormat::Json => report.to_json()?,
        };
        writeln!(out, "{}", record)?;
        debug!(input = %report.input(), state = ?report.state(), "Board reported");
    }
    out.flush()?;

    info!(
        total = summary.total(),
        no_winner = summary.no_winner,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        unreachable = summary.unreachable,
        invalid = summary.invalid,
        "Evaluation complete"
    );
    Ok(summary)
}

/// Splits board input text into boards, one per line.
///
/// Line endings are stripped and blank lines skipped. Other whitespace is
/// kept: a space is an empty square.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
