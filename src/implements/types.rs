/// # Wind Definitions
///
/// This module defines the four compass winds and the seat relation
/// used to find a player's wind relative to the dealer.
pub mod tiles {
    use serde::{Deserialize, Serialize};
    use strum_macros::{Display, EnumIter, EnumString};

    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
        Serialize, Deserialize, Display, EnumIter, EnumString,
    )]
    #[serde(rename_all = "camelCase")]
    #[strum(serialize_all = "camelCase")]
    /// Represents the four wind directions.
    pub enum Wind {
        East,  // 東
        South, // 南
        West,  // 西
        North, // 北
    }

    impl Wind {
        /// Turn order, starting from the dealer's seat.
        const ROTATION: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

        fn position(self) -> usize {
            match self {
                Wind::East => 0,
                Wind::South => 1,
                Wind::West => 2,
                Wind::North => 3,
            }
        }

        /// Maps an absolute seat wind to the wind of that seat counted from
        /// the dealer. The dealer's own seat is always East.
        ///
        /// # Arguments
        /// * `dealer_wind` - The absolute seat wind of the dealer (莊).
        pub fn seat_wind(self, dealer_wind: Wind) -> Wind {
            let offset = (self.position() + 4 - dealer_wind.position()) % 4;
            Self::ROTATION[offset]
        }
    }
}

/// # Win Type Catalog
///
/// The closed set of bonus patterns a player can toggle, and the fixed
/// classification sets derived from it.
pub mod win_type {
    use super::tiles::Wind;
    use once_cell::sync::Lazy;
    use serde::{Deserialize, Serialize};
    use std::collections::HashSet;
    use strum_macros::{Display, EnumIter, EnumString};

    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
        Serialize, Deserialize, Display, EnumIter, EnumString,
    )]
    #[serde(rename_all = "camelCase")]
    #[strum(serialize_all = "camelCase")]
    /// Represents a single bonus pattern (番種).
    /// Declaration order is the catalog order used when listing every type.
    pub enum WinType {
        SelfDraw,              // 自摸
        SelfDrawPenalty,       // 包自摸
        CleanDoor,             // 門清
        RedDragon,             // 中
        GreenDragon,           // 發
        WhiteDragon,           // 白
        ThreeGreatScholars,    // 大三元
        ThreeLesserScholars,   // 小三元
        Flower,                // 花
        Season,                // 季節
        East,                  // 東
        South,                 // 南
        West,                  // 西
        North,                 // 北
        BigFourHappiness,      // 大四喜
        SmallFourHappiness,    // 小四喜
        SelfDrawAfterGong,     // 槓上開花
        SelfDrawLastTile,      // 海底撈月
        AllInTriplets,         // 對對胡
        CommonHand,            // 平胡
        MixedOneSuit,          // 混一色
        AllHonorTiles,         // 字一色
        AllOneSuit,            // 清一色
        RobbingAGong,          // 搶槓
        SevenRobsOne,          // 七搶一
        FlowerKing,            // 八仙過海
        FourConcealedTriplets, // 四暗刻
        HeavenlyHand,          // 天胡
        EarthlyHand,           // 地胡
        ThirteenOrphans,       // 十三么
        AllKongs,              // 十八羅漢
        OnlyTerminals,         // 么九
    }

    impl WinType {
        /// Returns the compass wind this type stands for, if it is a wind type.
        pub fn wind(self) -> Option<Wind> {
            match self {
                WinType::East => Some(Wind::East),
                WinType::South => Some(Wind::South),
                WinType::West => Some(Wind::West),
                WinType::North => Some(Wind::North),
                _ => None,
            }
        }

        pub fn is_wind(self) -> bool {
            self.wind().is_some()
        }

        pub fn is_dragon(self) -> bool {
            matches!(
                self,
                WinType::RedDragon | WinType::GreenDragon | WinType::WhiteDragon
            )
        }
    }

    impl From<Wind> for WinType {
        fn from(wind: Wind) -> Self {
            match wind {
                Wind::East => WinType::East,
                Wind::South => WinType::South,
                Wind::West => WinType::West,
                Wind::North => WinType::North,
            }
        }
    }

    // --- Classification Sets ---

    pub static WINDS: Lazy<HashSet<WinType>> = Lazy::new(|| {
        HashSet::from([WinType::East, WinType::South, WinType::West, WinType::North])
    });

    pub static DRAGONS: Lazy<HashSet<WinType>> = Lazy::new(|| {
        HashSet::from([WinType::WhiteDragon, WinType::RedDragon, WinType::GreenDragon])
    });

    pub static CONCEALED_TRIPLETS: Lazy<HashSet<WinType>> =
        Lazy::new(|| HashSet::from([WinType::FourConcealedTriplets]));

    /// Every type that needs an honor tile: winds, dragons, and the
    /// scholar/happiness hands built from them.
    pub static WIND_AND_DRAGONS: Lazy<HashSet<WinType>> = Lazy::new(|| {
        let mut set = HashSet::from([
            WinType::ThreeLesserScholars,
            WinType::BigFourHappiness,
            WinType::SmallFourHappiness,
        ]);
        set.extend(WINDS.iter().copied());
        set.extend(DRAGONS.iter().copied());
        set
    });
}

/// # Game State and Context
///
/// This module defines everything the caller owns and passes in per call:
/// the seating context, the current toggle selections, and scoring flags.
pub mod game {
    use super::tiles::Wind;
    use super::win_type::WinType;
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    /// Seating context of the current hand. Any wind may still be unknown.
    pub struct GameContext {
        pub game_wind: Option<Wind>,   // 圈風 (Round wind)
        pub seat_wind: Option<Wind>,   // Winner's absolute seat
        pub dealer_wind: Option<Wind>, // Dealer's absolute seat
        pub is_winner_dealer: bool,    // 莊家食糊 (Did the dealer win?)
    }

    impl GameContext {
        pub fn new(game_wind: Wind, seat_wind: Wind, dealer_wind: Wind, is_winner_dealer: bool) -> Self {
            Self {
                game_wind: Some(game_wind),
                seat_wind: Some(seat_wind),
                dealer_wind: Some(dealer_wind),
                is_winner_dealer,
            }
        }

        /// The winner's wind counted from the dealer, once both seats are known.
        pub fn winner_wind(&self) -> Option<Wind> {
            Some(self.seat_wind?.seat_wind(self.dealer_wind?))
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    /// The caller's current selections.
    ///
    /// A type can be explicitly on, explicitly off, or absent. Absent is
    /// not the same as off: the rules only react to explicit values.
    pub struct ToggleState {
        toggled: BTreeMap<WinType, bool>,
    }

    impl ToggleState {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set(&mut self, win_type: WinType, on: bool) -> &mut Self {
            self.toggled.insert(win_type, on);
            self
        }

        /// Forgets any selection for `win_type`, returning it to unknown.
        pub fn clear(&mut self, win_type: WinType) -> &mut Self {
            self.toggled.remove(&win_type);
            self
        }

        pub fn get(&self, win_type: WinType) -> Option<bool> {
            self.toggled.get(&win_type).copied()
        }

        pub fn is_on(&self, win_type: WinType) -> bool {
            self.get(win_type) == Some(true)
        }

        pub fn is_off(&self, win_type: WinType) -> bool {
            self.get(win_type) == Some(false)
        }

        /// Types explicitly toggled on, in catalog order.
        pub fn toggled_on(&self) -> impl Iterator<Item = WinType> + '_ {
            self.toggled
                .iter()
                .filter(|(_, on)| **on)
                .map(|(win_type, _)| *win_type)
        }
    }

    impl FromIterator<(WinType, bool)> for ToggleState {
        fn from_iter<I: IntoIterator<Item = (WinType, bool)>>(iter: I) -> Self {
            Self {
                toggled: iter.into_iter().collect(),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    /// Extra inputs to faan calculation.
    pub struct FaanFlags {
        pub all_dragons_toggled: bool, // 中發白 all selected
        // Accepted but not yet part of any formula.
        pub is_self_draw: bool,
        pub kong_number: u8,
    }
}

/// # Calculator Input
///
/// The full request accepted by the board evaluation, loadable from JSON.
pub mod input {
    use super::game::{FaanFlags, GameContext, ToggleState};
    use crate::implements::error::Result;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CalculatorInput {
        pub context: GameContext,
        pub toggles: ToggleState,
        pub flags: FaanFlags,
    }

    impl CalculatorInput {
        /// Parses an input document. Missing sections fall back to defaults.
        pub fn from_json(json: &str) -> Result<Self> {
            Ok(serde_json::from_str(json)?)
        }
    }
}

/// # Evaluation Results
///
/// This module defines what the evaluators report back for a win type.
pub mod scoring {
    use super::win_type::WinType;
    use serde::Serialize;
    use std::fmt;

    /// Faan reported for `SelfDrawPenalty`. It is not additive; callers
    /// must special-case it rather than sum it.
    pub const SELF_DRAW_PENALTY_FAAN: i32 = i32::MIN;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    /// The rule that disabled a win type.
    pub enum DisabledReason {
        /// Wind is neither the round wind nor the winner's relative wind.
        WrongWind,
        /// 地胡 for a non-dealer when self-draw was explicitly turned off.
        EarthlyHandWithoutSelfDraw,
        /// A type this one depends on was explicitly turned off.
        MissingRequirement(WinType),
        /// This type excludes another type that is toggled on.
        Excludes(WinType),
        /// Another type that is toggled on excludes this one.
        ExcludedBy(WinType),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    /// One row of the board: a win type, whether it may be selected, and its faan.
    pub struct WinTypeStatus {
        pub win_type: WinType,
        pub disabled: bool,
        pub reason: Option<DisabledReason>,
        pub faan: i32,
    }

    impl fmt::Display for WinTypeStatus {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = self.win_type.to_string();
            if self.faan == SELF_DRAW_PENALTY_FAAN {
                write!(f, "{:<22} special", name)?;
            } else {
                write!(f, "{:<22} {:>2} faan", name, self.faan)?;
            }
            match self.reason {
                Some(reason) => write!(f, "  [disabled: {:?}]", reason),
                None => Ok(()),
            }
        }
    }
}
