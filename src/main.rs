use faan_calc::evaluate_board;
use faan_calc::game::{FaanFlags, GameContext, ToggleState};
use faan_calc::input::CalculatorInput;
use faan_calc::tiles::Wind;
use faan_calc::win_type::WinType;

/// A helper function to create the example `CalculatorInput`.
fn create_example_input() -> CalculatorInput {
    // --- 1. Define the Seating ---
    // South round. The dealer sits West and the winner sits North,
    // so the winner counts as South from the dealer.
    let context = GameContext::new(Wind::South, Wind::North, Wind::West, false);

    // --- 2. Define the Selections ---
    // Full flush won on a self-draw; self-draw is known, robbing a gong is not.
    let mut toggles = ToggleState::new();
    toggles
        .set(WinType::AllOneSuit, true)
        .set(WinType::SelfDraw, true)
        .set(WinType::CleanDoor, false);

    // --- 3. Define the Flags ---
    let flags = FaanFlags {
        all_dragons_toggled: false,
        is_self_draw: true,
        kong_number: 0,
    };

    CalculatorInput {
        context,
        toggles,
        flags,
    }
}

fn load_input(path: &str) -> Result<CalculatorInput, String> {
    let json = std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    CalculatorInput::from_json(&json).map_err(|e| e.to_string())
}

fn main() {
    println!("--- Hong Kong Mahjong Faan Calculator ---");

    // 1. Get the input: a JSON file if one is given, otherwise the example.
    let input = match std::env::args().nth(1) {
        Some(path) => match load_input(&path) {
            Ok(input) => input,
            Err(error_message) => {
                println!("!!! Error loading input: {} !!!", error_message);
                return;
            }
        },
        None => create_example_input(),
    };

    // 2. Evaluate every win type
    let board = evaluate_board(&input);

    // 3. Print the board
    println!("\nWin types for {:?}\n", input.context);
    for status in &board {
        println!("{}", status);
    }
}
