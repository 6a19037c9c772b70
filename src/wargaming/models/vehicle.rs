use serde::Deserialize;

use crate::wargaming::TankId;

/// An encyclopedia vehicle entry. Only the fields the ratings need.
#[derive(Deserialize, Debug, Clone)]
pub struct Vehicle {
    pub tank_id: TankId,
    pub name: String,
    pub tier: i32,
}
