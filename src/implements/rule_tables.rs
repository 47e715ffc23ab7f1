//! # Rule Tables
//!
//! Fixed domain knowledge about which win types cannot be combined and which
//! depend on each other. Each table is turned into a `DirectedGraph` once and
//! shared read-only for the life of the process.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::graph::DirectedGraph;
use super::types::win_type::{
    WinType, CONCEALED_TRIPLETS, DRAGONS, WINDS, WIND_AND_DRAGONS,
};

/// Maps a win type to the set of win types it is related to.
pub type RuleTable = BTreeMap<WinType, BTreeSet<WinType>>;

/// Edge (A -> B): A and B cannot both be selected (清一色 vs 混一色, ...).
pub static EXCLUSION_TABLE: Lazy<RuleTable> = Lazy::new(|| {
    BTreeMap::from([
        (WinType::SelfDraw, set_of(&[WinType::RobbingAGong], &[])),
        (
            WinType::AllOneSuit,
            set_of(
                &[WinType::MixedOneSuit, WinType::AllHonorTiles],
                &[&*WIND_AND_DRAGONS],
            ),
        ),
        (WinType::AllHonorTiles, set_of(&[WinType::MixedOneSuit], &[])),
        (
            WinType::CommonHand,
            set_of(
                &[
                    WinType::Flower,
                    WinType::Season,
                    WinType::FlowerKing,
                    WinType::SevenRobsOne,
                    WinType::SelfDrawAfterGong,
                    WinType::AllHonorTiles,
                    WinType::AllInTriplets,
                    WinType::FourConcealedTriplets,
                ],
                &[&*WIND_AND_DRAGONS],
            ),
        ),
        (
            WinType::BigFourHappiness,
            set_of(
                &[WinType::ThreeLesserScholars, WinType::SmallFourHappiness],
                &[&*WINDS],
            ),
        ),
        (
            WinType::SmallFourHappiness,
            set_of(&[WinType::ThreeLesserScholars], &[&*WINDS]),
        ),
        (WinType::ThreeLesserScholars, set_of(&[], &[&*DRAGONS])),
        (WinType::CleanDoor, set_of(&[], &[&*CONCEALED_TRIPLETS])),
        (WinType::FourConcealedTriplets, BTreeSet::new()),
    ])
});

/// Edge (A -> B): A is disabled once B is explicitly turned off.
pub static DEPENDENCY_TABLE: Lazy<RuleTable> = Lazy::new(|| {
    BTreeMap::from([(
        WinType::SelfDraw,
        set_of(&[WinType::HeavenlyHand, WinType::EarthlyHand], &[]),
    )])
});

static EXCLUSION_GRAPH: Lazy<DirectedGraph<WinType>> =
    Lazy::new(|| build_graph(&EXCLUSION_TABLE));

static DEPENDENCY_GRAPH: Lazy<DirectedGraph<WinType>> =
    Lazy::new(|| build_graph(&DEPENDENCY_TABLE));

fn set_of(members: &[WinType], groups: &[&HashSet<WinType>]) -> BTreeSet<WinType> {
    members
        .iter()
        .copied()
        .chain(groups.iter().flat_map(|group| group.iter().copied()))
        .collect()
}

/// Builds a graph with one edge from every key to each member of its set.
/// Keys with an empty set still get a vertex.
pub fn build_graph(table: &RuleTable) -> DirectedGraph<WinType> {
    let mut graph = DirectedGraph::new();
    for (key, members) in table {
        let from = graph.create_vertex(*key);
        for member in members {
            let to = graph.create_vertex(*member);
            graph.add_edge(from, to);
        }
    }
    graph
}

pub fn exclusion_graph() -> &'static DirectedGraph<WinType> {
    &EXCLUSION_GRAPH
}

pub fn dependency_graph() -> &'static DirectedGraph<WinType> {
    &DEPENDENCY_GRAPH
}
