//! Game configuration and movement edge policy.

use serde::{Deserialize, Serialize};

/// How firefighter movement behaves at the board edge.
///
/// Edge policy governs movement only; fire propagation never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Stepping off one edge re-enters from the opposite edge.
    #[default]
    Wrap,
    /// Stepping off the edge leaves the position unchanged.
    Clamp,
}

/// Tunable parameters for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells (columns).
    pub width: usize,
    /// Board height in cells (rows).
    pub height: usize,
    /// Movement behavior at the board edge.
    pub edge_policy: EdgePolicy,
    /// Water charges the firefighter starts with.
    pub initial_charges: u32,
    /// Moves allowed before movement becomes a no-op. `None` = unlimited.
    pub turn_limit: Option<u32>,
    /// Points earned for dousing a burning cell.
    pub fire_bonus: u32,
    /// Points lost for flooding a house (score never drops below zero).
    pub house_penalty: u32,
    /// Sampling attempts allowed when placing the firefighter on a house.
    pub placement_attempts: usize,
    /// Milliseconds between propagation ticks. Consumed by the frontends;
    /// the core never touches a clock.
    pub fire_interval_ms: u64,
}

impl Default for GameConfig {
    /// Values of the original arcade game: an 18x9 board (1800x900 window
    /// at 100 px blocks), 12 charges, fire advancing every two seconds.
    fn default() -> Self {
        Self {
            width: 18,
            height: 9,
            edge_policy: EdgePolicy::Wrap,
            initial_charges: 12,
            turn_limit: None,
            fire_bonus: 10,
            house_penalty: 5,
            placement_attempts: 1000,
            fire_interval_ms: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_original_board() {
        let config = GameConfig::default();
        assert_eq!(config.width, 18);
        assert_eq!(config.height, 9);
        assert_eq!(config.edge_policy, EdgePolicy::Wrap);
        assert_eq!(config.initial_charges, 12);
        assert_eq!(config.turn_limit, None);
        assert_eq!(config.fire_interval_ms, 2000);
    }

    #[test]
    fn test_default_edge_policy_wraps() {
        assert_eq!(EdgePolicy::default(), EdgePolicy::Wrap);
    }
}
