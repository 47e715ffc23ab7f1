//! # Win Type Eligibility
//!
//! Decides whether a win type can currently be selected. The checks run in a
//! fixed order and the first one that applies decides the result:
//!
//! 1. Incomplete seating context: everything stays enabled.
//! 2. 包自摸 is always enabled.
//! 3. Wind types: only the round wind and the winner's relative wind.
//! 4. 地胡 for a non-dealer needs self-draw not to be explicitly off.
//! 5. Dependency graph: disabled when a required type is explicitly off.
//! 6. Exclusion graph: disabled when an excluded type is explicitly on.

use super::rule_tables::{dependency_graph, exclusion_graph};
use super::types::{
    game::{GameContext, ToggleState},
    scoring::DisabledReason,
    win_type::WinType,
};

// --- Main Public Functions ---

/// Returns `true` when `win_type` must not be selectable.
pub fn is_disabled(win_type: WinType, context: &GameContext, toggles: &ToggleState) -> bool {
    disabled_reason(win_type, context, toggles).is_some()
}

/// Explains why `win_type` is disabled.
///
/// # Arguments
/// * `win_type` - The candidate being checked.
/// * `context` - Round, seat and dealer winds plus dealer status.
/// * `toggles` - The caller's current selections. Only explicit values count.
///
/// # Returns
/// * `Some(reason)` naming the rule that disabled the candidate, or `None`.
pub fn disabled_reason(
    win_type: WinType,
    context: &GameContext,
    toggles: &ToggleState,
) -> Option<DisabledReason> {
    // --- 1. Seating must be fully known ---
    let (Some(game_wind), Some(seat_wind), Some(dealer_wind)) =
        (context.game_wind, context.seat_wind, context.dealer_wind)
    else {
        return None;
    };

    // --- 2. Penalty ---
    if win_type == WinType::SelfDrawPenalty {
        return None;
    }

    // --- 3. Winds ---
    if let Some(wind) = win_type.wind() {
        let winner_wind = seat_wind.seat_wind(dealer_wind);
        if wind != game_wind && wind != winner_wind {
            log::trace!("{win_type} disabled: not round wind {game_wind} or winner wind {winner_wind}");
            return Some(DisabledReason::WrongWind);
        }
        return None;
    }

    // --- 4. Earthly hand ---
    // TODO: other non-dealer, non-self-draw combinations are not covered yet.
    if win_type == WinType::EarthlyHand
        && toggles.is_off(WinType::SelfDraw)
        && !context.is_winner_dealer
    {
        log::trace!("{win_type} disabled: non-dealer without self-draw");
        return Some(DisabledReason::EarthlyHandWithoutSelfDraw);
    }

    // --- 5. Dependencies ---
    if let Some(required) = dependency_graph()
        .destinations(&win_type)
        .find(|required| toggles.is_off(**required))
    {
        log::trace!("{win_type} disabled: requires {required}");
        return Some(DisabledReason::MissingRequirement(*required));
    }

    // --- 6. Exclusions ---
    let exclusions = exclusion_graph();
    if let Some(excluded) = exclusions
        .destinations(&win_type)
        .find(|excluded| toggles.is_on(**excluded))
    {
        log::trace!("{win_type} disabled: excludes selected {excluded}");
        return Some(DisabledReason::Excludes(*excluded));
    }
    if let Some(selected) = toggles
        .toggled_on()
        .find(|selected| exclusions.has_edge(selected, &win_type))
    {
        log::trace!("{win_type} disabled: excluded by selected {selected}");
        return Some(DisabledReason::ExcludedBy(selected));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implements::types::tiles::Wind;

    fn all_east() -> GameContext {
        GameContext::new(Wind::East, Wind::East, Wind::East, false)
    }

    fn toggles(entries: &[(WinType, bool)]) -> ToggleState {
        entries.iter().copied().collect()
    }

    #[test]
    fn incomplete_context_enables_everything() {
        let mut context = all_east();
        context.dealer_wind = None;
        let selected = toggles(&[(WinType::AllOneSuit, true), (WinType::SelfDraw, false)]);

        assert!(!is_disabled(WinType::South, &context, &selected));
        assert!(!is_disabled(WinType::MixedOneSuit, &context, &selected));
        assert!(!is_disabled(WinType::EarthlyHand, &GameContext::default(), &selected));
    }

    #[test]
    fn penalty_is_never_disabled() {
        let selected = toggles(&[(WinType::SelfDraw, true), (WinType::CommonHand, true)]);
        assert!(!is_disabled(WinType::SelfDrawPenalty, &all_east(), &selected));
    }

    #[test]
    fn only_round_and_winner_winds_stay_enabled() {
        let context = all_east();
        assert!(!is_disabled(WinType::East, &context, &ToggleState::new()));
        assert!(is_disabled(WinType::South, &context, &ToggleState::new()));
        assert!(is_disabled(WinType::West, &context, &ToggleState::new()));
        assert!(is_disabled(WinType::North, &context, &ToggleState::new()));
    }

    #[test]
    fn winner_wind_is_relative_to_dealer() {
        // Winner sits West with dealer South, so the winner's wind is South.
        let context = GameContext::new(Wind::East, Wind::West, Wind::South, false);
        let none = ToggleState::new();

        assert!(!is_disabled(WinType::East, &context, &none));
        assert!(!is_disabled(WinType::South, &context, &none));
        assert_eq!(
            disabled_reason(WinType::West, &context, &none),
            Some(DisabledReason::WrongWind)
        );
        assert!(is_disabled(WinType::North, &context, &none));
    }

    #[test]
    fn wind_check_ignores_exclusions() {
        let selected = toggles(&[(WinType::AllOneSuit, true)]);
        assert!(!is_disabled(WinType::East, &all_east(), &selected));
    }

    #[test]
    fn earthly_hand_needs_self_draw_for_non_dealer() {
        let selected = toggles(&[(WinType::SelfDraw, false)]);
        assert_eq!(
            disabled_reason(WinType::EarthlyHand, &all_east(), &selected),
            Some(DisabledReason::EarthlyHandWithoutSelfDraw)
        );

        let dealer = GameContext::new(Wind::East, Wind::East, Wind::East, true);
        assert!(!is_disabled(WinType::EarthlyHand, &dealer, &selected));
    }

    #[test]
    fn absent_self_draw_is_not_off() {
        assert!(!is_disabled(WinType::EarthlyHand, &all_east(), &ToggleState::new()));
    }

    #[test]
    fn dependency_fires_on_explicit_false_only() {
        let off = toggles(&[(WinType::HeavenlyHand, false)]);
        assert_eq!(
            disabled_reason(WinType::SelfDraw, &all_east(), &off),
            Some(DisabledReason::MissingRequirement(WinType::HeavenlyHand))
        );

        let on = toggles(&[(WinType::HeavenlyHand, true)]);
        assert!(!is_disabled(WinType::SelfDraw, &all_east(), &on));
        assert!(!is_disabled(WinType::SelfDraw, &all_east(), &ToggleState::new()));
    }

    #[test]
    fn dependency_is_one_directional() {
        let off = toggles(&[(WinType::SelfDraw, false)]);
        assert!(!is_disabled(WinType::HeavenlyHand, &all_east(), &off));
    }

    #[test]
    fn exclusion_disables_both_sides() {
        let all_one_suit = toggles(&[(WinType::AllOneSuit, true)]);
        assert_eq!(
            disabled_reason(WinType::MixedOneSuit, &all_east(), &all_one_suit),
            Some(DisabledReason::ExcludedBy(WinType::AllOneSuit))
        );
        assert!(is_disabled(WinType::RedDragon, &all_east(), &all_one_suit));

        let mixed = toggles(&[(WinType::MixedOneSuit, true)]);
        assert_eq!(
            disabled_reason(WinType::AllOneSuit, &all_east(), &mixed),
            Some(DisabledReason::Excludes(WinType::MixedOneSuit))
        );
    }

    #[test]
    fn exclusion_ignores_explicit_false() {
        let selected = toggles(&[(WinType::AllOneSuit, false)]);
        assert!(!is_disabled(WinType::MixedOneSuit, &all_east(), &selected));
    }

    #[test]
    fn self_draw_and_robbing_a_gong_exclude_each_other() {
        let self_draw = toggles(&[(WinType::SelfDraw, true)]);
        assert!(is_disabled(WinType::RobbingAGong, &all_east(), &self_draw));

        let robbing = toggles(&[(WinType::RobbingAGong, true)]);
        assert!(is_disabled(WinType::SelfDraw, &all_east(), &robbing));
    }

    #[test]
    fn clean_door_and_concealed_triplets() {
        let clean_door = toggles(&[(WinType::CleanDoor, true)]);
        assert_eq!(
            disabled_reason(WinType::FourConcealedTriplets, &all_east(), &clean_door),
            Some(DisabledReason::ExcludedBy(WinType::CleanDoor))
        );
    }

    #[test]
    fn unrelated_selection_leaves_type_enabled() {
        let selected = toggles(&[(WinType::Flower, true), (WinType::Season, true)]);
        assert!(!is_disabled(WinType::ThirteenOrphans, &all_east(), &selected));
        assert!(!is_disabled(WinType::AllKongs, &all_east(), &selected));
    }
}
