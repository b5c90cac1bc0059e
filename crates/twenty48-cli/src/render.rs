//! Color rendering and the fixed-cadence redraw loop.
//!
//! The loop only ever reads the board, through the shared mutex, so it
//! can never observe a line mid-resolution. It repaints only when the
//! grid differs from the last frame it drew.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use twenty48_core::Board;

/// Tile background colors by merge tier, empty first.
const TILE_BACKGROUND: [(u8, u8, u8); 12] = [
    (0xCD, 0xC1, 0xB4),
    (0xEE, 0xE4, 0xDA),
    (0xEE, 0xE1, 0xC9),
    (0xF3, 0xB2, 0x7A),
    (0xF6, 0x96, 0x64),
    (0xF7, 0x7C, 0x5F),
    (0xF7, 0x5F, 0x3B),
    (0xED, 0xD0, 0x73),
    (0xED, 0xCC, 0x62),
    (0xED, 0xC9, 0x50),
    (0xED, 0xC5, 0x3F),
    (0xED, 0xC2, 0x2E),
];

const FOREGROUND_DARK: (u8, u8, u8) = (0x77, 0x6E, 0x65);
const FOREGROUND_LIGHT: (u8, u8, u8) = (0xF9, 0xF6, 0xF2);

/// Background for an exponent. Tiers past the palette clamp to the last
/// entry instead of indexing out of bounds; the board itself has no cap.
fn tile_background(exponent: u8) -> (u8, u8, u8) {
    let tier = (exponent as usize).min(TILE_BACKGROUND.len() - 1);
    TILE_BACKGROUND[tier]
}

fn tile_foreground(exponent: u8) -> (u8, u8, u8) {
    if exponent < 3 {
        FOREGROUND_DARK
    } else {
        FOREGROUND_LIGHT
    }
}

fn tile_label(exponent: u8) -> String {
    if exponent == 0 {
        return String::new();
    }
    if exponent < 64 {
        (1u64 << exponent).to_string()
    } else {
        format!("2^{exponent}")
    }
}

/// Paint the board as ANSI truecolor text, one line per row.
pub fn paint(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..4 {
        for col in 0..4 {
            let exponent = board.get(row, col);
            let (br, bg, bb) = tile_background(exponent);
            let (fr, fg, fb) = tile_foreground(exponent);
            let label = tile_label(exponent);
            out.push_str(&format!(
                "\x1b[48;2;{br};{bg};{bb}m\x1b[38;2;{fr};{fg};{fb}m{label:^7}\x1b[0m"
            ));
        }
        out.push('\n');
    }
    out
}

/// Redraw `board` every `tick` until `stop` is raised.
pub fn run(board: Arc<Mutex<Board>>, tick: Duration, stop: Arc<AtomicBool>) {
    let mut last_drawn: Option<Board> = None;
    while !stop.load(Ordering::Relaxed) {
        let snapshot = *board.lock().expect("board lock poisoned");
        if last_drawn != Some(snapshot) {
            print!("{}", paint(&snapshot));
            last_drawn = Some(snapshot);
        }
        std::thread::sleep(tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_clamps_background_tiers_past_the_palette() {
        assert_eq!(tile_background(11), TILE_BACKGROUND[11]);
        assert_eq!(tile_background(12), TILE_BACKGROUND[11]);
        assert_eq!(tile_background(200), TILE_BACKGROUND[11]);
    }

    #[test]
    fn it_switches_foreground_at_the_third_tier() {
        assert_eq!(tile_foreground(1), FOREGROUND_DARK);
        assert_eq!(tile_foreground(2), FOREGROUND_DARK);
        assert_eq!(tile_foreground(3), FOREGROUND_LIGHT);
    }

    #[test]
    fn it_labels_tiles_with_powers_of_two() {
        assert_eq!(tile_label(0), "");
        assert_eq!(tile_label(1), "2");
        assert_eq!(tile_label(11), "2048");
        assert_eq!(tile_label(64), "2^64");
    }

    #[test]
    fn it_paints_four_rows() {
        let board = Board::new();
        let painted = paint(&board);
        assert_eq!(painted.lines().count(), 4);
    }
}
