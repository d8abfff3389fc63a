//! Binary min-heap priority queue.
//!
//! Entries are kept in a `Vec` laid out as an implicit binary tree: the
//! children of index `i` sit at `2i + 1` and `2i + 2`. Every parent's
//! priority is ≤ both of its children's.
//!
//! The heap never deduplicates. Pushing the same element again with a
//! better priority leaves the old entry in place; callers drop such stale
//! entries when they surface.

/// An element paired with its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<T, P> {
    pub element: T,
    pub priority: P,
}

/// A min-priority queue.
///
/// Ties are not FIFO: among equal priorities the dequeue order follows the
/// heap layout.
#[derive(Debug, Clone)]
pub struct MinHeap<T, P = i32> {
    heap: Vec<Entry<T, P>>,
}

impl<T, P: Ord> MinHeap<T, P> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Insert `element` with `priority`. O(log n).
    pub fn enqueue(&mut self, element: T, priority: P) {
        self.heap.push(Entry { element, priority });
        self.bubble_up();
    }

    /// Remove and return the entry with the smallest priority. O(log n).
    ///
    /// The last leaf replaces the root and is sifted down.
    pub fn dequeue(&mut self) -> Option<Entry<T, P>> {
        let end = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(end);
        }
        let min = std::mem::replace(&mut self.heap[0], end);
        self.bubble_down();
        Some(min)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Move the newest leaf up while it is strictly smaller than its parent.
    fn bubble_up(&mut self) {
        let mut index = self.heap.len() - 1;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].priority >= self.heap[parent].priority {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    /// Move the root down, swapping with the smaller child until neither
    /// child is smaller. The right child is chosen only when it is strictly
    /// smaller than the left.
    fn bubble_down(&mut self) {
        let len = self.heap.len();
        let mut index = 0;
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut swap = None;

            if left < len && self.heap[left].priority < self.heap[index].priority {
                swap = Some(left);
            }
            if right < len {
                let rp = &self.heap[right].priority;
                let beats = match swap {
                    None => *rp < self.heap[index].priority,
                    Some(l) => *rp < self.heap[l].priority,
                };
                if beats {
                    swap = Some(right);
                }
            }

            let Some(child) = swap else {
                break;
            };
            self.heap.swap(index, child);
            index = child;
        }
    }
}

impl<T, P: Ord> Default for MinHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
