//! Ordered doubly linked list with head and tail sentinels.
//!
//! This is the backing container for element children, attribute lists, the
//! lexer's finished-token queue, and the parser's stack of open elements.
//!
//! # Design
//!
//! The list lives in a slot arena (`Vec` of slots) instead of heap-allocated
//! nodes, so cursors are plain indices and no `unsafe` is required. Two
//! sentinel slots occupy fixed positions: the head sentinel precedes the
//! first item and the tail sentinel follows the last one. Freed slots are
//! recycled through a free list.
//!
//! The sentinels give every real node a physical predecessor and successor,
//! which keeps insertion and removal branch-free and makes the cursor range
//! `[begin, end)` well formed on an empty list: `begin() == end()` exactly
//! when the list holds no items.

/// Arena index of the head sentinel.
const HEAD: usize = 0;
/// Arena index of the tail sentinel.
const TAIL: usize = 1;

#[derive(Debug, Clone)]
struct Slot<T> {
    /// `None` for the two sentinels and for freed slots.
    value: Option<T>,
    prev: usize,
    next: usize,
}

/// A position in a [`NodeList`].
///
/// Cursors are plain arena indices: cheap to copy and compare, and stable
/// across insertions elsewhere in the list. A cursor pointing at a removed
/// item is invalidated (its slot may be recycled); the sentinel cursors
/// returned by [`NodeList::end`] and [`NodeList::rend`] are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(usize);

/// Doubly linked list with O(1) push/pop at either end and bidirectional
/// cursor traversal.
#[derive(Debug, Clone)]
pub struct NodeList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> NodeList<T> {
    /// Creates an empty list holding only the two sentinels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![
                Slot {
                    value: None,
                    prev: HEAD,
                    next: TAIL,
                },
                Slot {
                    value: None,
                    prev: HEAD,
                    next: TAIL,
                },
            ],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns `true` if the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends `value` after the current last item.
    pub fn push_back(&mut self, value: T) {
        let prev = self.slots[TAIL].prev;
        let idx = self.alloc(Slot {
            value: Some(value),
            prev,
            next: TAIL,
        });
        self.slots[prev].next = idx;
        self.slots[TAIL].prev = idx;
        self.len += 1;
    }

    /// Removes and returns the last item, or `None` on an empty list.
    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.slots[TAIL].prev;
        if idx == HEAD {
            return None;
        }
        self.unlink(idx)
    }

    /// Removes and returns the first item, or `None` on an empty list.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.slots[HEAD].next;
        if idx == TAIL {
            return None;
        }
        self.unlink(idx)
    }

    /// Removes every item. Sentinels and capacity are kept.
    pub fn clear(&mut self) {
        self.slots.truncate(2);
        self.slots[HEAD].next = TAIL;
        self.slots[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    /// Borrows the first item.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(self.begin())
    }

    /// Borrows the last item.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.get(self.rbegin())
    }

    /// Mutably borrows the last item.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let idx = self.slots[TAIL].prev;
        self.slots[idx].value.as_mut()
    }

    /// Cursor at the first item, or [`end`](Self::end) on an empty list.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor(self.slots[HEAD].next)
    }

    /// Past-the-last cursor (the tail sentinel).
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor(TAIL)
    }

    /// Cursor at the last item, or [`rend`](Self::rend) on an empty list.
    #[must_use]
    pub fn rbegin(&self) -> Cursor {
        Cursor(self.slots[TAIL].prev)
    }

    /// Before-the-first cursor (the head sentinel).
    #[must_use]
    pub fn rend(&self) -> Cursor {
        Cursor(HEAD)
    }

    /// Cursor one step forward. Saturates at [`end`](Self::end).
    #[must_use]
    pub fn next(&self, cursor: Cursor) -> Cursor {
        Cursor(self.slots[cursor.0].next)
    }

    /// Cursor one step backward. Saturates at [`rend`](Self::rend).
    #[must_use]
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        Cursor(self.slots[cursor.0].prev)
    }

    /// Borrows the item under `cursor`; `None` for the sentinel cursors.
    #[must_use]
    pub fn get(&self, cursor: Cursor) -> Option<&T> {
        self.slots[cursor.0].value.as_ref()
    }

    /// Mutably borrows the item under `cursor`.
    pub fn get_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        self.slots[cursor.0].value.as_mut()
    }

    /// Iterates the items front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.begin(),
        }
    }

    fn alloc(&mut self, slot: Slot<T>) -> usize {
        if let Some(idx) = self.free.pop() {
            self.slots[idx] = slot;
            idx
        } else {
            self.slots.push(slot);
            self.slots.len() - 1
        }
    }

    fn unlink(&mut self, idx: usize) -> Option<T> {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        let value = self.slots[idx].value.take();
        self.free.push(idx);
        self.len -= 1;
        value
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for NodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for NodeList<T> {}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

/// Front-to-back borrowing iterator over a [`NodeList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a NodeList<T>,
    cursor: Cursor,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.cursor)?;
        self.cursor = self.list.next(self.cursor);
        Some(item)
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_coincident_cursors() {
        let list: NodeList<i32> = NodeList::new();
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        assert_eq!(list.rbegin(), list.rend());
        assert!(list.get(list.begin()).is_none());
    }

    #[test]
    fn push_back_preserves_order() {
        let list: NodeList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn pop_back_reverses_push_order() {
        let mut list: NodeList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.begin(), list.end());
    }

    #[test]
    fn pop_front_drains_in_order() {
        let mut list: NodeList<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_front(), Some("b"));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut list = NodeList::new();
        list.push_back(1);
        assert_eq!(list.pop_back(), Some(1));
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn cursors_saturate_at_sentinels() {
        let list: NodeList<i32> = [7].into_iter().collect();
        assert_eq!(list.next(list.end()), list.end());
        assert_eq!(list.prev(list.rend()), list.rend());
        assert_eq!(list.next(list.rend()), list.begin());
        assert_eq!(list.prev(list.end()), list.rbegin());
    }

    #[test]
    fn back_mut_edits_in_place() {
        let mut list: NodeList<String> = [String::from("x")].into_iter().collect();
        if let Some(s) = list.back_mut() {
            s.push('y');
        }
        assert_eq!(list.back().map(String::as_str), Some("xy"));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut list: NodeList<i32> = [1, 2].into_iter().collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        list.push_back(9);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a: NodeList<i32> = [1, 2].into_iter().collect();
        let b: NodeList<i32> = [2, 1].into_iter().collect();
        let c: NodeList<i32> = [1, 2].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }
}
