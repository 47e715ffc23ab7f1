pub mod types;
pub use types::*;
pub mod error;
pub use error::*;
pub mod graph;
pub use graph::*;
pub mod rule_tables;
pub use rule_tables::*;
pub mod eligibility_checker;
pub use eligibility_checker::*;
pub mod score_calculator;
pub use score_calculator::*;

use strum::IntoEnumIterator;

use crate::implements::input::CalculatorInput;
use crate::implements::scoring::WinTypeStatus;
use crate::implements::win_type::WinType;

/// Evaluates every win type in catalog order. Nothing is summed.
pub fn evaluate_board(input: &CalculatorInput) -> Vec<WinTypeStatus> {
    log::debug!(
        "Evaluating board: context={:?}, {} toggles on",
        input.context,
        input.toggles.toggled_on().count()
    );

    WinType::iter()
        .map(|win_type| evaluate_status(input, win_type))
        .collect()
}

/// Evaluates a single win type given by its camelCase name.
pub fn evaluate_win_type(input: &CalculatorInput, name: &str) -> Result<WinTypeStatus> {
    let win_type = name
        .parse::<WinType>()
        .map_err(|_| CalculatorError::UnknownWinType(name.to_string()))?;
    Ok(evaluate_status(input, win_type))
}

fn evaluate_status(input: &CalculatorInput, win_type: WinType) -> WinTypeStatus {
    // 1. Eligibility
    let reason = disabled_reason(win_type, &input.context, &input.toggles);

    // 2. Faan
    let faan = calculate_faan(win_type, &input.context, &input.flags);

    WinTypeStatus {
        win_type,
        disabled: reason.is_some(),
        reason,
        faan,
    }
}
