use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror::Error;

use crate::{packet_fields, register_packets};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no packet type is registered for id {0}")]
pub struct UnknownPacketType(pub u8);

// Wire id and upstream class name for every packet the registry knows.
register_packets! {
    PacketType, Packet,
    KeepAlive(0, "Packet0KeepAlive"),
    Login(1, "Packet1Login"),
    Handshake(2, "Packet2Handshake"),
    Chat(3, "Packet3Chat"),
    UpdateTime(4, "Packet4UpdateTime"),
    SpawnPosition(6, "Packet6SpawnPosition"),
    UseEntity(7, "Packet7UseEntity"),
    UpdateHealth(8, "Packet8UpdateHealth"),
    Respawn(9, "Packet9Respawn"),
    Flying(10, "Packet10Flying"),
    PlayerPosition(11, "Packet11PlayerPosition"),
    PlayerLook(12, "Packet12PlayerLook"),
    PlayerLookMove(13, "Packet13PlayerLookMove"),
    BlockDig(14, "Packet14BlockDig"),
    BlockItemSwitch(16, "Packet16BlockItemSwitch"),
    EntityLocationAction(17, "Packet17EntityLocationAction"),
    ArmAnimation(18, "Packet18ArmAnimation"),
    EntityAction(19, "Packet19EntityAction"),
    Collect(22, "Packet22Collect"),
    VehicleSpawn(23, "Packet23VehicleSpawn"),
    EntityPainting(25, "Packet25EntityPainting"),
    AddExpOrb(26, "Packet26AddExpOrb"),
    EntityVelocity(28, "Packet28EntityVelocity"),
    DestroyEntity(29, "Packet29DestroyEntity"),
    Entity(30, "Packet30Entity"),
    RelEntityMove(31, "Packet31RelEntityMove"),
    EntityLook(32, "Packet32EntityLook"),
    RelEntityMoveLook(33, "Packet33RelEntityMoveLook"),
    EntityTeleport(34, "Packet34EntityTeleport"),
    EntityHeadRotation(35, "Packet35EntityHeadRotation"),
    EntityStatus(38, "Packet38EntityStatus"),
    AttachEntity(39, "Packet39AttachEntity"),
    MobEffect(41, "Packet41MobEffect"),
    RemoveMobEffect(42, "Packet42RemoveMobEffect"),
    SetExperience(43, "Packet43SetExperience"),
    MapChunk(51, "Packet51MapChunk"),
    MultiBlockChange(52, "Packet52MultiBlockChange"),
    BlockChange(53, "Packet53BlockChange"),
    PlayNoteBlock(54, "Packet54PlayNoteBlock"),
    BlockBreakAnimation(55, "Packet55BlockBreakAnimation"),
    MapChunkBulk(56, "Packet56MapChunkBulk"),
    Explosion(60, "Packet60Explosion"),
    WorldEvent(61, "Packet61WorldEvent"),
    NamedSoundEffect(62, "Packet62NamedSoundEffect"),
    Bed(70, "Packet70Bed"),
    Weather(71, "Packet71Weather"),
    OpenWindow(100, "Packet100OpenWindow"),
    CloseWindow(101, "Packet101CloseWindow"),
    CraftProgressBar(105, "Packet105CraftProgressBar"),
    Transaction(106, "Packet106Transaction"),
    ButtonClick(108, "Packet108ButtonClick"),
    UpdateSign(130, "Packet130UpdateSign"),
    ItemData(131, "Packet131ItemData"),
    TileEntityData(132, "Packet132TileEntityData"),
    Statistic(200, "Packet200Statistic"),
    PlayerInfo(201, "Packet201PlayerInfo"),
    Abilities(202, "Packet202Abilities"),
    TabComplete(203, "Packet203TabComplete"),
    LocaleAndViewDistance(204, "Packet204LocaleAndViewDistance"),
    ClientCommand(205, "Packet205ClientCommand"),
    CustomPayload(250, "Packet250CustomPayload"),
    KeyResponse(252, "Packet252KeyResponse"),
    KeyRequest(253, "Packet253KeyRequest"),
    GetInfo(254, "Packet254GetInfo"),
    KickDisconnect(255, "Packet255KickDisconnect"),
}

// Keep Alive
packet_fields! {
    pub struct KeepAlive {
        pub keep_alive_id: i32,
    }
}

// Login
packet_fields! {
    pub struct Login {
        pub entity_id: i32,
        pub level_type: String,
        pub game_mode: i8,
        pub dimension: i8,
        pub difficulty: i8,
        pub world_height: i8,
        pub max_players: i8,
    }
}

// Handshake
packet_fields! {
    pub struct Handshake {
        pub protocol_version: i8,
        pub username: String,
        pub server_host: String,
        pub server_port: i32,
    }
}

// Chat
packet_fields! {
    pub struct Chat {
        pub message: String,
    }
}

// Update Time
packet_fields! {
    pub struct UpdateTime {
        pub world_age: i64,
        pub time_of_day: i64,
    }
}

// Spawn Position
packet_fields! {
    pub struct SpawnPosition {
        pub x: i32,
        pub y: i32,
        pub z: i32,
    }
}

// Use Entity
packet_fields! {
    pub struct UseEntity {
        pub player_entity_id: i32,
        pub target_entity_id: i32,
        pub left_click: bool,
    }
}

// Update Health
packet_fields! {
    pub struct UpdateHealth {
        pub health: i16,
        pub food: i16,
        pub saturation: f32,
    }
}

// Respawn
packet_fields! {
    pub struct Respawn {
        pub dimension: i32,
        pub difficulty: i8,
        pub game_mode: i8,
        pub world_height: i16,
        pub level_type: String,
    }
}

// Flying
packet_fields! {
    pub struct Flying {
        pub on_ground: bool,
    }
}

// Player Position
packet_fields! {
    pub struct PlayerPosition {
        pub x: f64,
        pub y: f64,
        pub stance: f64,
        pub z: f64,
        pub on_ground: bool,
    }
}

// Player Look
packet_fields! {
    pub struct PlayerLook {
        pub yaw: f32,
        pub pitch: f32,
        pub on_ground: bool,
    }
}

// Player Look Move
packet_fields! {
    pub struct PlayerLookMove {
        pub x: f64,
        pub y: f64,
        pub stance: f64,
        pub z: f64,
        pub yaw: f32,
        pub pitch: f32,
        pub on_ground: bool,
    }
}

// Block Dig
packet_fields! {
    pub struct BlockDig {
        pub status: i8,
        pub x: i32,
        pub y: i8,
        pub z: i32,
        pub face: i8,
    }
}

// Block Item Switch
packet_fields! {
    pub struct BlockItemSwitch {
        pub slot_id: i16,
    }
}

// Entity Location Action
packet_fields! {
    pub struct EntityLocationAction {
        pub entity_id: i32,
        pub action: i8,
        pub x: i32,
        pub y: i8,
        pub z: i32,
    }
}

// Arm Animation
packet_fields! {
    pub struct ArmAnimation {
        pub entity_id: i32,
        pub animation: i8,
    }
}

// Entity Action
packet_fields! {
    pub struct EntityAction {
        pub entity_id: i32,
        pub action: i8,
    }
}

// Collect
packet_fields! {
    pub struct Collect {
        pub collected_entity_id: i32,
        pub collector_entity_id: i32,
    }
}

// Vehicle Spawn
packet_fields! {
    pub struct VehicleSpawn {
        pub entity_id: i32,
        pub entity_type: i8,
        pub x: i32,
        pub y: i32,
        pub z: i32,
        pub object_data: i32,
        pub speed_x: i16,
        pub speed_y: i16,
        pub speed_z: i16,
    }
}

// Entity Painting
packet_fields! {
    pub struct EntityPainting {
        pub entity_id: i32,
        pub title: String,
        pub x: i32,
        pub y: i32,
        pub z: i32,
        pub direction: i32,
    }
}

// Add Exp Orb
packet_fields! {
    pub struct AddExpOrb {
        pub entity_id: i32,
        pub x: i32,
        pub y: i32,
        pub z: i32,
        pub experience: i16,
    }
}

// Entity Velocity
packet_fields! {
    pub struct EntityVelocity {
        pub entity_id: i32,
        pub motion_x: i16,
        pub motion_y: i16,
        pub motion_z: i16,
    }
}

// Destroy Entity
packet_fields! {
    /// Tells the client to forget a batch of entities. Removal queues fill
    /// these up to [`DestroyEntity::MAX_IDS`] ids at a time.
    pub struct DestroyEntity {
        pub entity_ids: Vec<i32>,
    }
}

impl DestroyEntity {
    /// The wire format counts ids with a single signed byte, so one packet
    /// carries at most 127 of them.
    pub const MAX_IDS: usize = 127;
}

// Entity
packet_fields! {
    pub struct Entity {
        pub entity_id: i32,
    }
}

// Rel Entity Move
packet_fields! {
    pub struct RelEntityMove {
        pub entity_id: i32,
        pub delta_x: i8,
        pub delta_y: i8,
        pub delta_z: i8,
    }
}

// Entity Look
packet_fields! {
    pub struct EntityLook {
        pub entity_id: i32,
        pub yaw: i8,
        pub pitch: i8,
    }
}

// Rel Entity Move Look
packet_fields! {
    pub struct RelEntityMoveLook {
        pub entity_id: i32,
        pub delta_x: i8,
        pub delta_y: i8,
        pub delta_z: i8,
        pub yaw: i8,
        pub pitch: i8,
    }
}

// Entity Teleport
packet_fields! {
    pub struct EntityTeleport {
        pub entity_id: i32,
        pub x: i32,
        pub y: i32,
        pub z: i32,
        pub yaw: i8,
        pub pitch: i8,
    }
}

// Entity Head Rotation
packet_fields! {
    pub struct EntityHeadRotation {
        pub entity_id: i32,
        pub head_yaw: i8,
    }
}

// Entity Status
packet_fields! {
    pub struct EntityStatus {
        pub entity_id: i32,
        pub status: i8,
    }
}

// Attach Entity
packet_fields! {
    pub struct AttachEntity {
        pub entity_id: i32,
        pub vehicle_entity_id: i32,
    }
}

// Mob Effect
packet_fields! {
    pub struct MobEffect {
        pub entity_id: i32,
        pub effect_id: i8,
        pub amplifier: i8,
        pub duration: i16,
    }
}

// Remove Mob Effect
packet_fields! {
    pub struct RemoveMobEffect {
        pub entity_id: i32,
        pub effect_id: i8,
    }
}

// Set Experience
packet_fields! {
    pub struct SetExperience {
        pub experience: f32,
        pub level: i16,
        pub total_experience: i16,
    }
}

// Map Chunk
packet_fields! {
    /// A full or partial column of chunk data. This is the packet a pending
    /// region send resolves to.
    pub struct MapChunk {
        pub chunk_x: i32,
        pub chunk_z: i32,
        pub full_chunk: bool,
        pub primary_bit_mask: i32,
        pub add_bit_mask: i32,
        pub compressed_data: Vec<u8>,
    }
}

// Multi Block Change
packet_fields! {
    pub struct MultiBlockChange {
        pub chunk_x: i32,
        pub chunk_z: i32,
        pub record_count: i16,
        pub records: Vec<u8>,
    }
}

// Block Change
packet_fields! {
    pub struct BlockChange {
        pub x: i32,
        pub y: i8,
        pub z: i32,
        pub block_id: i16,
        pub block_metadata: i8,
    }
}

// Play Note Block
packet_fields! {
    pub struct PlayNoteBlock {
        pub x: i32,
        pub y: i16,
        pub z: i32,
        pub instrument: i8,
        pub pitch: i8,
        pub block_id: i16,
    }
}

// Block Break Animation
packet_fields! {
    pub struct BlockBreakAnimation {
        pub entity_id: i32,
        pub x: i32,
        pub y: i32,
        pub z: i32,
        pub stage: i8,
    }
}

// Map Chunk Bulk
packet_fields! {
    pub struct MapChunkBulk {
        pub chunk_x: Vec<i32>,
        pub chunk_z: Vec<i32>,
        pub primary_bit_masks: Vec<i32>,
        pub add_bit_masks: Vec<i32>,
        pub compressed_data: Vec<u8>,
    }
}

// Explosion
packet_fields! {
    /// Affected blocks are packed three signed byte offsets per record.
    pub struct Explosion {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub radius: f32,
        pub affected_blocks: Vec<u8>,
        pub push_x: f32,
        pub push_y: f32,
        pub push_z: f32,
    }
}

// World Event
packet_fields! {
    pub struct WorldEvent {
        pub effect_id: i32,
        pub x: i32,
        pub y: i8,
        pub z: i32,
        pub data: i32,
        pub disable_relative_volume: bool,
    }
}

// Named Sound Effect
packet_fields! {
    pub struct NamedSoundEffect {
        pub sound_name: String,
        pub x: i32,
        pub y: i32,
        pub z: i32,
        pub volume: f32,
        pub pitch: i8,
    }
}

// Bed
packet_fields! {
    pub struct Bed {
        pub reason: i8,
        pub game_mode: i8,
    }
}

// Weather
packet_fields! {
    pub struct Weather {
        pub entity_id: i32,
        pub x: i32,
        pub y: i32,
        pub z: i32,
        pub strike_type: i8,
    }
}

// Open Window
packet_fields! {
    pub struct OpenWindow {
        pub window_id: i8,
        pub inventory_type: i8,
        pub window_title: String,
        pub slot_count: i8,
    }
}

// Close Window
packet_fields! {
    pub struct CloseWindow {
        pub window_id: i8,
    }
}

// Craft Progress Bar
packet_fields! {
    pub struct CraftProgressBar {
        pub window_id: i8,
        pub progress_bar_id: i16,
        pub value: i16,
    }
}

// Transaction
packet_fields! {
    pub struct Transaction {
        pub window_id: i8,
        pub action_number: i16,
        pub accepted: bool,
    }
}

// Button Click
packet_fields! {
    pub struct ButtonClick {
        pub window_id: i8,
        pub button_id: i8,
    }
}

// Update Sign
packet_fields! {
    pub struct UpdateSign {
        pub x: i32,
        pub y: i16,
        pub z: i32,
        pub lines: Vec<String>,
    }
}

// Item Data
packet_fields! {
    pub struct ItemData {
        pub item_type: i16,
        pub item_id: i16,
        pub data: Vec<u8>,
    }
}

// Tile Entity Data
packet_fields! {
    pub struct TileEntityData {
        pub x: i32,
        pub y: i16,
        pub z: i32,
        pub action: i8,
        pub nbt_data: Vec<u8>,
    }
}

// Statistic
packet_fields! {
    pub struct Statistic {
        pub statistic_id: i32,
        pub amount: i8,
    }
}

// Player Info
packet_fields! {
    pub struct PlayerInfo {
        pub player_name: String,
        pub online: bool,
        pub ping: i16,
    }
}

// Abilities
packet_fields! {
    pub struct Abilities {
        pub invulnerable: bool,
        pub flying: bool,
        pub allow_flying: bool,
        pub creative_mode: bool,
        pub fly_speed: f32,
        pub walk_speed: f32,
    }
}

// Tab Complete
packet_fields! {
    pub struct TabComplete {
        pub text: String,
    }
}

// Locale And View Distance
packet_fields! {
    pub struct LocaleAndViewDistance {
        pub locale: String,
        pub view_distance: i8,
        pub chat_flags: i8,
        pub difficulty: i8,
        pub show_cape: bool,
    }
}

// Client Command
packet_fields! {
    pub struct ClientCommand {
        pub payload: i8,
    }
}

// Custom Payload
packet_fields! {
    pub struct CustomPayload {
        pub channel: String,
        pub data: Vec<u8>,
    }
}

// Key Response
packet_fields! {
    pub struct KeyResponse {
        pub shared_secret: Vec<u8>,
        pub verify_token: Vec<u8>,
    }
}

// Key Request
packet_fields! {
    pub struct KeyRequest {
        pub server_id: String,
        pub public_key: Vec<u8>,
        pub verify_token: Vec<u8>,
    }
}

// Get Info
packet_fields! {
    /// Server list ping. Clients from 1.4.5 on send a single magic byte of 1.
    pub struct GetInfo {
        pub magic: i8,
    }
}

// Kick Disconnect
packet_fields! {
    pub struct KickDisconnect {
        pub reason: String,
    }
}
