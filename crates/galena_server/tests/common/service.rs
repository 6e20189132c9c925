use galena_protocol::packets::{MapChunk, Packet};
use galena_server::entity::EntityId;
use galena_server::player::PlayerView;
use galena_server::position::{ChunkPosition, Coordinate, Position, Rotation};
use galena_server::world::{ChunkMap, EntityTracker};

use super::FakePlayerConnection;

pub fn create_view_and_connection() -> (PlayerView, TestChunkMap, TestTracker, FakePlayerConnection)
{
    (
        PlayerView::new(EntityId::new(1)),
        TestChunkMap::new(),
        TestTracker::new(),
        FakePlayerConnection::new(),
    )
}

/// A position whose block coordinates land inside `chunk`.
pub fn position_in_chunk(chunk: ChunkPosition) -> Position {
    Position {
        coord: Coordinate {
            x: chunk.x as f64 * ChunkPosition::BLOCK_WIDTH_F + 8.0,
            y: 64.0,
            z: chunk.z as f64 * ChunkPosition::BLOCK_WIDTH_F + 8.0,
        },
        rot: Rotation::default(),
    }
}

/// The packet `TestChunkMap` answers for `chunk`.
pub fn chunk_packet(chunk: ChunkPosition) -> Packet {
    MapChunk {
        chunk_x: chunk.x,
        chunk_z: chunk.z,
        full_chunk: true,
        primary_bit_mask: 1,
        add_bit_mask: 0,
        compressed_data: vec![],
    }
    .into()
}

pub struct TestChunkMap {
    pub reassignments: Vec<(EntityId, ChunkPosition)>,
}

impl TestChunkMap {
    pub fn new() -> Self {
        Self {
            reassignments: vec![],
        }
    }
}

impl ChunkMap for TestChunkMap {
    fn reassign_chunk(&mut self, entity_id: EntityId, chunk: ChunkPosition) {
        self.reassignments.push((entity_id, chunk));
    }

    fn chunk_data_packet(&self, chunk: ChunkPosition) -> Packet {
        chunk_packet(chunk)
    }
}

pub struct TestTracker {
    pub refreshed: Vec<EntityId>,
}

impl TestTracker {
    pub fn new() -> Self {
        Self { refreshed: vec![] }
    }
}

impl EntityTracker for TestTracker {
    fn update_viewer(&mut self, entity_id: EntityId) {
        self.refreshed.push(entity_id);
    }
}
