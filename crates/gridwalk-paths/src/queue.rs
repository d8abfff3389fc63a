//! FIFO work-list backed by a doubly-linked list.
//!
//! Links live in a slot arena and refer to each other by index, so the list
//! owns every element outright. Freed slots are recycled, which keeps
//! `push_back` and `pop_front` O(1) amortized.

#[derive(Debug, Clone)]
struct Link<T> {
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A first-in first-out queue.
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    links: Vec<Link<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Append `value` at the back.
    pub fn push_back(&mut self, value: T) {
        let link = Link {
            value: Some(value),
            prev: self.tail,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(i) => {
                self.links[i] = link;
                i
            }
            None => {
                self.links.push(link);
                self.links.len() - 1
            }
        };
        match self.tail {
            Some(t) => self.links[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Remove and return the earliest-added element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let h = self.head?;
        let link = &mut self.links[h];
        let value = link.value.take();
        self.head = link.next.take();
        match self.head {
            Some(n) => self.links[n].prev = None,
            None => self.tail = None,
        }
        self.free.push(h);
        self.len -= 1;
        value
    }

    /// The element at the front, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|h| self.links[h].value.as_ref())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterate front to back. The iterator is double-ended.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

/// Iterator over a [`LinkedQueue`], front to back or back to front.
pub struct Iter<'a, T> {
    queue: &'a LinkedQueue<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let link = &self.queue.links[self.front?];
        self.front = link.next;
        self.remaining -= 1;
        link.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = &self.queue.links[self.back?];
        self.back = link.prev;
        self.remaining -= 1;
        link.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = LinkedQueue::new();
        q.push_back("a");
        q.push_back("b");
        q.push_back("c");
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop_front(), Some("a"));
        assert_eq!(q.pop_front(), Some("b"));
        assert_eq!(q.pop_front(), Some("c"));
        assert_eq!(q.pop_front(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut q = LinkedQueue::<i32>::new();
        assert!(q.is_empty());
        assert_eq!(q.pop_front(), None);
        assert_eq!(q.front(), None);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut q = LinkedQueue::new();
        q.push_back(1);
        q.push_back(2);
        assert_eq!(q.pop_front(), Some(1));
        q.push_back(3);
        assert_eq!(q.front(), Some(&2));
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(q.pop_front(), Some(2));
        assert_eq!(q.pop_front(), Some(3));
        // Single-element drain must reset both ends.
        q.push_back(4);
        assert_eq!(q.front(), Some(&4));
        assert_eq!(q.iter().count(), 1);
        assert_eq!(q.pop_front(), Some(4));
        assert!(q.is_empty());
    }

    #[test]
    fn slots_are_recycled() {
        let mut q = LinkedQueue::new();
        for round in 0..10 {
            q.push_back(round);
            q.push_back(round + 100);
            assert_eq!(q.pop_front(), Some(round));
            assert_eq!(q.pop_front(), Some(round + 100));
        }
        assert!(q.links.len() <= 2);
    }

    #[test]
    fn iter_follows_links() {
        let mut q: LinkedQueue<i32> = (1..=4).collect();
        q.pop_front();
        q.push_back(5);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert_eq!(q.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
        let mut it = q.iter();
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn random_interleaving_matches_vecdeque() {
        let mut q = LinkedQueue::new();
        let mut reference = VecDeque::new();
        for i in 0..2000 {
            if rand::random_bool(0.6) {
                q.push_back(i);
                reference.push_back(i);
            } else {
                assert_eq!(q.pop_front(), reference.pop_front());
            }
            assert_eq!(q.len(), reference.len());
            assert_eq!(q.is_empty(), reference.is_empty());
        }
        while let Some(v) = reference.pop_front() {
            assert_eq!(q.pop_front(), Some(v));
        }
        assert!(q.is_empty());
    }
}
