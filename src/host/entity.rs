//! Entity identity and per-frame snapshots

use crate::core::types::DVec3;

/// Opaque identity of an entity in the host's live collection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// Transient view of one live entity, taken once per traversal pass.
/// Never stored across frames; the id is only valid against the host
/// collection it was snapshotted from.
#[derive(Clone, Copy, Debug)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub position: DVec3,
}

/// State of the controlled entity (the local viewpoint), queried from the
/// host once per frame. Absent before spawn.
#[derive(Clone, Copy, Debug)]
pub struct PlayerState {
    /// World position of the controlled entity
    pub position: DVec3,
    /// Whether the entity is in non-colliding observer mode
    pub spectator: bool,
}
