//! Example walking a session through a short scripted game.
//!
//! This demonstrates the operation set a presentation layer drives:
//! selection, value submission (including rejected input), hints, undo, and
//! starting a new game.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play_session
//! ```

use nanpure_core::Position;
use nanpure_game::{CellState, Session, SessionSnapshot};

fn main() {
    let mut session = Session::with_removals(40);
    println!("New game ({} givens):", session.given_count());
    print_snapshot(&session.snapshot());

    let pos = Position::ALL
        .into_iter()
        .find(|&pos| session.cell(pos).is_empty())
        .expect("a carved puzzle has empty cells");

    session.select(pos);
    println!("Selected {pos}");

    let outcome = session.submit_value(pos, "x");
    println!("Submitted \"x\" at {pos}: {outcome:?}");

    let outcome = session.submit_value(pos, "5");
    println!("Submitted \"5\" at {pos}: {outcome:?}");

    session.undo();
    println!("Undid the edit; cell is {:?} again", session.cell(pos));

    session.select(pos);
    let outcome = session.hint();
    println!(
        "Hint at {pos}: {outcome:?} ({} hints left)",
        session.hints_remaining()
    );

    print_snapshot(&session.snapshot());
}

fn print_snapshot(snapshot: &SessionSnapshot) {
    for y in 0..9 {
        print!("  ");
        for x in 0..9 {
            let pos = Position::new(x, y);
            let ch = match snapshot.cell(pos) {
                CellState::Given(digit) | CellState::Filled(digit) => digit.to_string(),
                CellState::Empty if snapshot.has_format_error(pos) => "!".to_string(),
                CellState::Empty => ".".to_string(),
            };
            print!("{ch}");
        }
        println!();
    }
    println!(
        "  hints: {}, undo available: {}",
        snapshot.hints_remaining(),
        snapshot.can_undo()
    );
}
