use std::collections::VecDeque;

use crate::position::ChunkPosition;

/// Chunks this connection has been promised but not yet sent, in promise
/// order. Entries are unique.
#[derive(Debug, Default)]
pub struct ChunkSendQueue {
    pending: VecDeque<ChunkPosition>,
}

impl ChunkSendQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pending send. Returns false when the chunk is already
    /// queued.
    pub fn enqueue(&mut self, chunk: ChunkPosition) -> bool {
        if self.contains(chunk) {
            return false;
        }
        self.pending.push_back(chunk);
        true
    }

    /// Removes a pending send, keeping the order of the rest. Returns
    /// whether the chunk was queued.
    pub fn cancel(&mut self, chunk: ChunkPosition) -> bool {
        match self.pending.iter().position(|pending| *pending == chunk) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    /// Ordered drain hook for the scheduled chunk sender.
    pub fn pop_front(&mut self) -> Option<ChunkPosition> {
        self.pending.pop_front()
    }

    pub fn contains(&self, chunk: ChunkPosition) -> bool {
        self.pending.contains(&chunk)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChunkPosition> + '_ {
        self.pending.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::ChunkSendQueue;
    use crate::position::ChunkPosition;

    fn chunk(x: i32, z: i32) -> ChunkPosition {
        ChunkPosition { x, z }
    }

    #[test]
    fn enqueue_rejects_duplicates() {
        let mut queue = ChunkSendQueue::new();

        assert!(queue.enqueue(chunk(0, 0)));
        assert!(queue.enqueue(chunk(1, 0)));
        assert!(!queue.enqueue(chunk(0, 0)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn cancel_reports_presence_exactly_once() {
        let mut queue = ChunkSendQueue::new();
        queue.enqueue(chunk(3, -2));

        assert!(!queue.cancel(chunk(9, 9)));
        assert!(queue.cancel(chunk(3, -2)));
        assert!(!queue.cancel(chunk(3, -2)));
        assert!(queue.is_empty());
    }

    #[test]
    fn cancel_keeps_the_order_of_the_rest() {
        let mut queue = ChunkSendQueue::new();
        for x in 0..4 {
            queue.enqueue(chunk(x, 0));
        }

        queue.cancel(chunk(1, 0));

        let left: Vec<i32> = queue.iter().map(|chunk| chunk.x).collect();
        assert_eq!(left, [0, 2, 3]);
    }

    #[test]
    fn pop_front_drains_in_enqueue_order() {
        let mut queue = ChunkSendQueue::new();
        queue.enqueue(chunk(5, 5));
        queue.enqueue(chunk(6, 5));

        assert_eq!(queue.pop_front(), Some(chunk(5, 5)));
        assert_eq!(queue.pop_front(), Some(chunk(6, 5)));
        assert_eq!(queue.pop_front(), None);
    }
}
