use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::prelude::*;

pub(crate) mod active;
pub(crate) mod center;
pub(crate) mod islands;
pub(crate) mod phased;
pub(crate) mod random;

pub use active::ActivePawns;
pub use center::{CenterOccupying, WeightGrid};
pub use islands::{islands, Island, PawnAccumulation};
pub use phased::{pawn_ratio, FirstCenterThenAggressive, GroupThenFight, TakeMiddleStayInGroup};
pub use random::Random;

type Constructor = fn() -> Box<dyn Heuristic>;

fn construct<H: Heuristic + Default + 'static>() -> Box<dyn Heuristic>
{
    Box::<H>::default()
}

lazy_static! {
    /// The name-to-heuristic registry the driver resolves user choices against.
    static ref REGISTRY: HashMap<&'static str, Constructor> = {
        let mut map: HashMap<&'static str, Constructor> = HashMap::new();
        map.insert("active", construct::<ActivePawns>);
        map.insert("center", construct::<CenterOccupying>);
        map.insert("accumulation", construct::<PawnAccumulation>);
        map.insert("random", construct::<Random>);
        map.insert("first_center_then_aggressive", construct::<FirstCenterThenAggressive>);
        map.insert("group_then_fight", construct::<GroupThenFight>);
        map.insert("take_middle_stay_in_group", construct::<TakeMiddleStayInGroup>);
        map
    };
}

/// Lists every registered heuristic name.
pub fn available() -> Vec<&'static str>
{
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Resolves a heuristic by its registry name.
pub fn lookup(name: &str) -> Result<Box<dyn Heuristic>>
{
    match REGISTRY.get(name)
    {
        | Some(constructor) => Ok(constructor()),
        | None =>
        {
            let err_msg = format!("'{}' is not a known heuristic. Available: {}", name, available().join(", "));
            Err(Error::new(Kind::InvalidHeuristicName, err_msg))
        }
    }
}
