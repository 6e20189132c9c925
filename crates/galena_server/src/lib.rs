pub mod entity;
pub mod player;
pub mod position;
pub mod transport;
pub mod world;
