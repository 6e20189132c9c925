#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EntityId(i32);

impl EntityId {
    pub fn new(id: i32) -> Self {
        EntityId(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}
