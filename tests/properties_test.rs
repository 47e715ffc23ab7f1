use faan_calc::game::{FaanFlags, GameContext, ToggleState};
use faan_calc::tiles::Wind;
use faan_calc::win_type::WinType;
use faan_calc::{calculate_faan, is_disabled};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn win_type_strategy() -> impl Strategy<Value = WinType> {
    prop::sample::select(WinType::iter().collect::<Vec<_>>())
}

fn wind_strategy() -> impl Strategy<Value = Option<Wind>> {
    prop::option::of(prop::sample::select(Wind::iter().collect::<Vec<_>>()))
}

fn context_strategy() -> impl Strategy<Value = GameContext> {
    (wind_strategy(), wind_strategy(), wind_strategy(), any::<bool>()).prop_map(
        |(game_wind, seat_wind, dealer_wind, is_winner_dealer)| GameContext {
            game_wind,
            seat_wind,
            dealer_wind,
            is_winner_dealer,
        },
    )
}

fn toggles_strategy() -> impl Strategy<Value = ToggleState> {
    prop::collection::vec((win_type_strategy(), any::<bool>()), 0..10)
        .prop_map(|entries| entries.into_iter().collect())
}

fn fixed_faan(win_type: WinType) -> Option<i32> {
    match win_type {
        WinType::BigFourHappiness
        | WinType::ThirteenOrphans
        | WinType::AllKongs
        | WinType::AllHonorTiles
        | WinType::HeavenlyHand
        | WinType::EarthlyHand => Some(13),
        WinType::SmallFourHappiness => Some(6),
        WinType::FourConcealedTriplets | WinType::SevenRobsOne | WinType::FlowerKing => Some(8),
        WinType::AllOneSuit => Some(7),
        WinType::ThreeLesserScholars => Some(4),
        WinType::AllInTriplets | WinType::MixedOneSuit => Some(3),
        WinType::CleanDoor
        | WinType::CommonHand
        | WinType::SelfDraw
        | WinType::Flower
        | WinType::Season
        | WinType::SelfDrawAfterGong
        | WinType::SelfDrawLastTile
        | WinType::RobbingAGong
        | WinType::OnlyTerminals => Some(1),
        _ => None,
    }
}

proptest! {
    /// Property: 包自摸 can always be selected
    #[test]
    fn prop_penalty_never_disabled(
        context in context_strategy(),
        toggles in toggles_strategy()
    ) {
        prop_assert!(!is_disabled(WinType::SelfDrawPenalty, &context, &toggles));
    }

    /// Property: fixed-value types ignore context and flags
    #[test]
    fn prop_fixed_faan_ignores_context(
        win_type in win_type_strategy(),
        context in context_strategy(),
        all_dragons_toggled in any::<bool>(),
        is_self_draw in any::<bool>(),
        kong_number in 0u8..5
    ) {
        let flags = FaanFlags { all_dragons_toggled, is_self_draw, kong_number };
        if let Some(expected) = fixed_faan(win_type) {
            prop_assert_eq!(calculate_faan(win_type, &context, &flags), expected);
        }
    }

    /// Property: wind faan is between 0 and 2, and an enabled wind is worth at least 1
    #[test]
    fn prop_wind_faan_bounds(
        wind in prop::sample::select(Wind::iter().collect::<Vec<_>>()),
        context in context_strategy()
    ) {
        let win_type = WinType::from(wind);
        let faan = calculate_faan(win_type, &context, &FaanFlags::default());
        prop_assert!((0..=2).contains(&faan));

        let seated = context.game_wind.is_some()
            && context.seat_wind.is_some()
            && context.dealer_wind.is_some();
        if seated && !is_disabled(win_type, &context, &ToggleState::new()) {
            prop_assert!(faan >= 1);
        }
    }

    /// Property: missing seating leaves every type enabled
    #[test]
    fn prop_unknown_round_wind_enables_all(
        win_type in win_type_strategy(),
        toggles in toggles_strategy(),
        is_winner_dealer in any::<bool>()
    ) {
        let context = GameContext {
            game_wind: None,
            seat_wind: Some(Wind::East),
            dealer_wind: Some(Wind::East),
            is_winner_dealer,
        };
        prop_assert!(!is_disabled(win_type, &context, &toggles));
    }
}
