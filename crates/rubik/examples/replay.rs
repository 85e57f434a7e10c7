//! Scramble a cube with a seeded random sequence, replay the inverse, and print
//! the first, middle, and last snapshots.
//!
//! Run: cargo run -p rubik --example replay

use rubik::api::{draw_scramble, ReplayToken, ScrambleSession, SessionCfg, Token};

fn main() {
    let scramble = draw_scramble(12, ReplayToken { seed: 2024, index: 0 });
    let line: Vec<String> = scramble.iter().map(|m| m.to_string()).collect();
    println!("scramble: {}", line.join(" "));

    let tokens = scramble.into_iter().map(Token::Move).collect();
    let report = match ScrambleSession::run(SessionCfg::default(), tokens) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("session failed: {e}");
            return;
        }
    };
    let moves: Vec<String> = report.moves.iter().map(|m| m.to_string()).collect();
    println!("inverse:  {}", moves.join(" "));

    let mid = report.scramble_len;
    for (label, idx) in [("start", 0), ("scrambled", mid), ("end", report.snapshots.len() - 1)] {
        println!("-- {label} (snapshot {idx})");
        print!("{}", report.snapshots[idx]);
    }
    println!("final solved: {}", report.final_solved);
}
