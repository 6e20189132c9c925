pub mod chunk_send_queue;
pub mod remove_queue;

pub use chunk_send_queue::ChunkSendQueue;
pub use remove_queue::EntityRemoveQueue;

use crate::entity::EntityId;
use crate::position::Position;
use crate::transport::PacketSink;
use crate::world::{ChunkMap, EntityTracker};

/// Everything one connection knows about the world: which entities still
/// owe the client a destroy notification and which chunks still await a
/// full send.
pub struct PlayerView {
    entity_id: EntityId,
    pub remove_queue: EntityRemoveQueue,
    pub chunk_send_queue: ChunkSendQueue,
}

impl PlayerView {
    pub fn new(entity_id: EntityId) -> Self {
        Self {
            entity_id,
            remove_queue: EntityRemoveQueue::new(),
            chunk_send_queue: ChunkSendQueue::new(),
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn flush_remove_queue(&mut self, sink: &mut impl PacketSink) {
        self.remove_queue.flush(sink);
    }

    /// Brings the view back in sync after the owning entity already moved
    /// to `to`. Movement validation happened before this point.
    pub fn handle_teleport(
        &mut self,
        to: Position,
        world: &mut impl ChunkMap,
        tracker: &mut impl EntityTracker,
        sink: &mut impl PacketSink,
    ) {
        let chunk = to.chunk();
        world.reassign_chunk(self.entity_id, chunk);

        // If the destination chunk is still queued, the client must have it
        // before any entity updates that reference it: send immediately and
        // unqueue.
        if self.chunk_send_queue.cancel(chunk) {
            log::debug!(
                "fast-forwarding queued chunk {:?} for entity {}",
                chunk,
                self.entity_id.as_i32()
            );
            sink.send_packet(world.chunk_data_packet(chunk));
        }

        tracker.update_viewer(self.entity_id);
    }
}
