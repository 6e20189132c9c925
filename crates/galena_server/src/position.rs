use std::fmt::Debug;

// Coordinate (x, y, z)

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    pub fn chunk(self) -> ChunkPosition {
        ChunkPosition::containing(self.x, self.z)
    }
}

// Rotation (yaw, pitch)

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub yaw: f32,
    pub pitch: f32,
}

// Position (x, y, z, yaw, pitch)

#[derive(Clone, Copy, PartialEq)]
pub struct Position {
    pub coord: Coordinate,
    pub rot: Rotation,
}

impl Position {
    pub fn chunk(self) -> ChunkPosition {
        self.coord.chunk()
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Position")
            .field("x", &self.coord.x)
            .field("y", &self.coord.y)
            .field("z", &self.coord.z)
            .field("yaw", &self.rot.yaw)
            .field("pitch", &self.rot.pitch)
            .finish()
    }
}

// ChunkPosition (chunk x, chunk z)

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPosition {
    pub x: i32,
    pub z: i32,
}

impl ChunkPosition {
    pub const BLOCK_WIDTH_F: f64 = 16.0;

    #[inline(always)]
    pub fn to_chunk_coordinate(f: f64) -> i32 {
        (f / ChunkPosition::BLOCK_WIDTH_F).floor() as i32
    }

    /// The chunk containing block coordinates (x, z).
    pub fn containing(x: f64, z: f64) -> ChunkPosition {
        ChunkPosition {
            x: Self::to_chunk_coordinate(x),
            z: Self::to_chunk_coordinate(z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_coordinates_floor_towards_negative_infinity() {
        assert_eq!(ChunkPosition::to_chunk_coordinate(0.0), 0);
        assert_eq!(ChunkPosition::to_chunk_coordinate(15.9), 0);
        assert_eq!(ChunkPosition::to_chunk_coordinate(16.0), 1);
        assert_eq!(ChunkPosition::to_chunk_coordinate(-0.5), -1);
        assert_eq!(ChunkPosition::to_chunk_coordinate(-16.0), -1);
        assert_eq!(ChunkPosition::to_chunk_coordinate(-16.1), -2);
    }

    #[test]
    fn positions_resolve_to_their_chunk() {
        let position = Position {
            coord: Coordinate {
                x: 36.0,
                y: 64.0,
                z: -3.0,
            },
            rot: Rotation::default(),
        };

        assert_eq!(position.chunk(), ChunkPosition { x: 2, z: -1 });
    }
}
