use std::collections::HashMap;

use galena_protocol::field::FieldValue;
use galena_protocol::packets::MapChunk;
use galena_protocol::packets::Packet;
use galena_protocol::packets::PacketType;
use galena_server::entity::EntityId;
use galena_server::player::PlayerView;
use galena_server::position::ChunkPosition;
use galena_server::position::Coordinate;
use galena_server::position::Position;
use galena_server::position::Rotation;
use galena_server::transport::PacketSink;
use galena_server::world::ChunkMap;
use galena_server::world::EntityTracker;
use rand::Rng;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Erased construction and field access, the way a packet listener that
    // only knows ids and field names works with packets.
    let mut kick = Packet::from_id(255)?;
    kick.write_field("reason", FieldValue::String("Server is restarting".into()))?;
    println!("built by id: {:?}", kick);
    println!("reason reads back: {:?}", kick.read_field("reason")?);

    let ty = PacketType::from_legacy_name("Packet29DestroyEntity")?;
    println!("{} resolves to {:?} (id {})", ty.legacy_name(), ty, ty.id());
    println!("MapChunk fields: {:?}", MapChunk::FIELDS);

    let mut world = FlatChunkMap::new();
    let mut tracker = ConsoleTracker;
    let mut conn = ConsoleSink { sent: 0 };

    let entity_id = EntityId::new(rand::thread_rng().gen_range(1..=4096));
    let mut view = PlayerView::new(entity_id);
    log::info!("view created for entity {}", entity_id.as_i32());

    // The join promises the 3x3 chunks around spawn.
    println!("\n-- join --");
    for x in 0..3 {
        for z in 0..3 {
            view.chunk_send_queue.enqueue(ChunkPosition { x, z });
        }
    }
    println!("{} chunk sends pending", view.chunk_send_queue.len());

    // The scheduled sender gets through a few of them per tick.
    println!("\n-- tick: scheduled chunk sends --");
    for _ in 0..3 {
        if let Some(chunk) = view.chunk_send_queue.pop_front() {
            conn.send_packet(world.chunk_data_packet(chunk));
        }
    }
    println!("{} chunk sends pending", view.chunk_send_queue.len());

    // Teleport into chunk (2, 2), whose send is still pending: the view
    // fast-forwards that send instead of leaving the client without it.
    println!("\n-- teleport --");
    let destination = Position {
        coord: Coordinate {
            x: 36.0,
            y: 64.0,
            z: 36.0,
        },
        rot: Rotation::default(),
    };
    view.handle_teleport(destination, &mut world, &mut tracker, &mut conn);
    println!(
        "destination pending afterwards: {}",
        view.chunk_send_queue.contains(destination.chunk())
    );

    // Everything the old viewpoint showed leaves the view at once; the
    // flush batches the destroy notifications under the wire limit.
    println!("\n-- flush removals --");
    for id in 0..300 {
        view.remove_queue.push(EntityId::new(id));
    }
    view.flush_remove_queue(&mut conn);

    println!("\nsent {} packets in total", conn.sent);
    Ok(())
}

// transport

struct ConsoleSink {
    sent: usize,
}

impl PacketSink for ConsoleSink {
    fn send_packet_filtered(&mut self, packet: Packet, _through_listeners: bool) {
        self.sent += 1;
        match packet {
            Packet::MapChunk(chunk) => {
                println!("  -> chunk ({}, {})", chunk.chunk_x, chunk.chunk_z)
            }
            Packet::DestroyEntity(destroy) => {
                println!("  -> destroy x{}", destroy.entity_ids.len())
            }
            other => println!("  -> {:?}", other),
        }
    }
}

// world

struct FlatChunkMap {
    members: HashMap<EntityId, ChunkPosition>,
}

impl FlatChunkMap {
    fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }
}

impl ChunkMap for FlatChunkMap {
    fn reassign_chunk(&mut self, entity_id: EntityId, chunk: ChunkPosition) {
        self.members.insert(entity_id, chunk);
    }

    fn chunk_data_packet(&self, chunk: ChunkPosition) -> Packet {
        // A flat world: one stone layer, nothing else.
        MapChunk {
            chunk_x: chunk.x,
            chunk_z: chunk.z,
            full_chunk: true,
            primary_bit_mask: 1,
            add_bit_mask: 0,
            compressed_data: vec![0; 64],
        }
        .into()
    }
}

// tracker

struct ConsoleTracker;

impl EntityTracker for ConsoleTracker {
    fn update_viewer(&mut self, entity_id: EntityId) {
        println!("  refreshed viewers of entity {}", entity_id.as_i32());
    }
}
