use std::collections::VecDeque;

use galena_protocol::packets::DestroyEntity;

use crate::entity::EntityId;
use crate::transport::PacketSink;

/// FIFO of entities that left this connection's view and still owe the
/// client a destroy notification. Duplicates are kept; the client treats
/// destroys idempotently.
#[derive(Debug, Default)]
pub struct EntityRemoveQueue {
    pending: VecDeque<EntityId>,
}

impl EntityRemoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity_id: EntityId) {
        self.pending.push_back(entity_id);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drains the queue into `DestroyEntity` packets, oldest first: batches
    /// of exactly [`DestroyEntity::MAX_IDS`] while more than that remain,
    /// then the remainder in one final packet. An empty queue sends nothing.
    pub fn flush(&mut self, sink: &mut impl PacketSink) {
        if self.pending.is_empty() {
            return;
        }

        if self.pending.len() > DestroyEntity::MAX_IDS {
            log::debug!("flushing {} entity removals in batches", self.pending.len());
        }

        while self.pending.len() > DestroyEntity::MAX_IDS {
            let entity_ids = self.drain_ids(DestroyEntity::MAX_IDS);
            sink.send_packet(DestroyEntity { entity_ids }.into());
        }

        let entity_ids = self.drain_ids(self.pending.len());
        sink.send_packet(DestroyEntity { entity_ids }.into());
    }

    fn drain_ids(&mut self, count: usize) -> Vec<i32> {
        self.pending.drain(..count).map(|id| id.as_i32()).collect()
    }
}
