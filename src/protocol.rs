//! Text protocol of the command-line search tool
//!
//! Input is a board string, a side selector and a depth; output is one line
//! `row,col,score`. In the board string `'1'` is an empty cell, `'2'` a white
//! disc and `'3'` a black disc. Every other character is skipped, so callers
//! may separate rows with spaces or commas.

use crate::board::{Board, Disc, Move, Side};
use crate::error::{ProtocolError, ProtocolResult};

/// Line printed on stdout when the request cannot be served
pub const FAILURE_LINE: &str = "0,0,0";

/// Smallest accepted depth. `-1` behaves like `0`.
pub const MIN_DEPTH: i32 = -1;

/// Decode a board string for a `size` x `size` board.
pub fn decode_board(text: &str, size: usize) -> ProtocolResult<Board> {
    let cells: Vec<Disc> = text
        .chars()
        .filter_map(|c| match c {
            '1' => Some(Disc::Empty),
            '2' => Some(Disc::White),
            '3' => Some(Disc::Black),
            _ => None,
        })
        .collect();

    let expected = size * size;
    if cells.len() != expected {
        return Err(ProtocolError::CellCount {
            expected,
            found: cells.len(),
        });
    }

    Ok(Board::from_cells(size, &cells)?)
}

/// Encode a board in the same alphabet, rows concatenated
pub fn encode_board(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|disc| match disc {
            Disc::Empty => '1',
            Disc::White => '2',
            Disc::Black => '3',
        })
        .collect()
}

/// `"0"` selects Black (first mover), `"1"` selects White.
pub fn parse_side(text: &str) -> ProtocolResult<Side> {
    match text.trim() {
        "0" => Ok(Side::Black),
        "1" => Ok(Side::White),
        other => Err(ProtocolError::InvalidSide(other.to_string())),
    }
}

pub fn validate_depth(depth: i32) -> ProtocolResult<i32> {
    if depth < MIN_DEPTH {
        return Err(ProtocolError::InvalidDepth(depth));
    }
    Ok(depth)
}

/// Format a score with six significant digits and no trailing zeros,
/// switching to exponent notation for very small or large magnitudes.
pub fn format_score(score: f32) -> String {
    const PRECISION: i32 = 6;

    let value = f64::from(score);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Exponent after rounding to the target precision
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..PRECISION).contains(&exp) {
        let decimals = (PRECISION - 1 - exp) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    }
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Result line for a search: `row,col,score`, `-1,-1,score` for a pass.
pub fn format_result(best_move: Move, score: f32) -> String {
    let (row, col) = best_move.coords();
    format!("{row},{col},{}", format_score(score))
}
