use galena_protocol::packets::Packet;

use crate::entity::EntityId;
use crate::position::ChunkPosition;

// user defined world collaborators

/// Spatial index over entities, keyed by chunk.
pub trait ChunkMap {
    /// Moves `entity_id` into `chunk`'s member list, removing it from its
    /// previous chunk.
    fn reassign_chunk(&mut self, entity_id: EntityId, chunk: ChunkPosition);

    /// Builds the full-state packet for `chunk`. Implementations answer an
    /// empty chunk rather than fail.
    fn chunk_data_packet(&self, chunk: ChunkPosition) -> Packet;
}

/// Recomputes which connections can see a given entity.
pub trait EntityTracker {
    fn update_viewer(&mut self, entity_id: EntityId);
}
