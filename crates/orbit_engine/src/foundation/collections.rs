//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a body in a universe's arena
    ///
    /// Handles stay valid across insertions and removals of other bodies,
    /// which makes them safe to store as long-lived back-references
    /// (debris orbits, player attachments).
    pub struct BodyHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<BodyHandle, T>;
