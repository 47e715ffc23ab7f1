//! # Hong Kong Mahjong Faan Calculator
//!
//! This module gives the faan value of a single win type under the current
//! game context. It never sums several win types into a hand total.


// --- Imports from sibling modules ---
use super::types::{
    game::{FaanFlags, GameContext},
    scoring::SELF_DRAW_PENALTY_FAAN,
    win_type::WinType,
};

// --- Main Public Function ---

/// Calculates the faan a single win type is worth.
///
/// # Arguments
/// * `win_type` - The win type being scored.
/// * `game` - The seating context, used by the wind types.
/// * `flags` - Extra selections. Only `all_dragons_toggled` affects the
///   result today; `is_self_draw` and `kong_number` are accepted for
///   future tiers (e.g. 十八羅漢 by kong count) and ignored.
///
/// # Returns
/// * The faan value, or `SELF_DRAW_PENALTY_FAAN` for 包自摸.
pub fn calculate_faan(win_type: WinType, game: &GameContext, flags: &FaanFlags) -> i32 {
    match win_type {
        // --- Limit Hands (13 faan) ---
        WinType::BigFourHappiness
        | WinType::ThirteenOrphans
        | WinType::AllKongs
        | WinType::AllHonorTiles
        | WinType::HeavenlyHand
        | WinType::EarthlyHand => 13,

        // --- 8 Faan ---
        WinType::FourConcealedTriplets => 8,
        WinType::SevenRobsOne | WinType::FlowerKing => 8,
        WinType::ThreeGreatScholars => 8,

        // --- 7, 6, 4, 3 Faan ---
        WinType::AllOneSuit => 7,
        WinType::SmallFourHappiness => 6,
        WinType::ThreeLesserScholars => 4,
        WinType::AllInTriplets | WinType::MixedOneSuit => 3,

        // --- 1 Faan ---
        WinType::CleanDoor
        | WinType::CommonHand
        | WinType::SelfDraw
        | WinType::Flower
        | WinType::Season
        | WinType::SelfDrawAfterGong
        | WinType::SelfDrawLastTile
        | WinType::RobbingAGong
        | WinType::OnlyTerminals => 1,

        // --- Context Dependent ---
        WinType::RedDragon | WinType::GreenDragon | WinType::WhiteDragon => {
            if flags.all_dragons_toggled {
                6 // 大三元 bonus per dragon
            } else {
                1
            }
        }
        WinType::East | WinType::South | WinType::West | WinType::North => {
            get_wind_faan(win_type, game)
        }

        // Not additive; the caller handles it.
        WinType::SelfDrawPenalty => SELF_DRAW_PENALTY_FAAN,
    }
}

// --- Helper Functions ---

/// One faan for matching the round wind, one for matching the winner's
/// wind relative to the dealer. Unknown winds never match.
fn get_wind_faan(win_type: WinType, game: &GameContext) -> i32 {
    let Some(wind) = win_type.wind() else {
        return 0;
    };
    let is_game_wind = game.game_wind == Some(wind);
    let is_winner_wind = game.winner_wind() == Some(wind);

    match (is_game_wind, is_winner_wind) {
        (true, true) => 2,
        (true, false) | (false, true) => 1,
        (false, false) => 0,
    }
}
