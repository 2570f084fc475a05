//! Gameplay outcome events
//!
//! Wins, losses, and pickups are modelled as explicit signals returned from
//! the update step, never as errors. The host reacts by advancing, rebuilding,
//! or replacing the universe.

/// An outcome produced by a single update step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player collected something
    PointsCollected {
        /// Score value of the collected body
        points: u32,
        /// Universe score after collection
        total: u32,
    },

    /// The score reached the level's target; the level is complete
    TargetPointsReached,

    /// The player touched the goal planet; the level is complete
    GoalReached,

    /// The player was destroyed; the level should restart
    PlayerLost,
}

impl GameEvent {
    /// Whether this event ends the level successfully
    pub fn is_win(self) -> bool {
        matches!(self, Self::GoalReached | Self::TargetPointsReached)
    }
}
