use serde::{Deserialize, Serialize};

use crate::EngineError;

/// The direction in which turns pass around the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Join order.
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "clockwise"),
            Direction::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Slot<T> {
    member: T,
    next: usize,
    prev: usize,
}

/// The cyclic turn order, with a cursor on the member whose turn it is.
///
/// Members live in an arena of slots linked by index in both directions,
/// so stepping backwards is as cheap as stepping forwards. The first
/// slot is always the head of the ring and the last slot its tail.
///
/// There is no removal of single members: the roster is fixed once a
/// game starts, and [`Self::rebuild()`] replaces it wholesale.
#[derive(Clone, Debug)]
pub struct TurnRing<T> {
    slots: Vec<Slot<T>>,
    /// `None` iff there are no slots.
    cursor: Option<usize>,
    direction: Direction,
}

impl<T> Default for TurnRing<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            cursor: None,
            direction: Direction::Clockwise,
        }
    }
}

impl<T: Copy> TurnRing<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ring with the members in the given order, the cursor on the first one.
    pub fn from_roster(roster: impl IntoIterator<Item = T>) -> Self {
        let mut ring = Self::new();
        for member in roster {
            ring.insert_at_end(member);
        }
        ring
    }

    /// Inserts a member between the tail and the head.
    ///
    /// The first member inserted gets the cursor.
    pub fn insert_at_end(&mut self, member: T) {
        let idx = self.slots.len();
        if idx == 0 {
            self.slots.push(Slot {
                member,
                next: 0,
                prev: 0,
            });
            self.cursor = Some(0);
            return;
        }
        let tail = idx - 1;
        self.slots.push(Slot {
            member,
            next: 0,
            prev: tail,
        });
        self.slots[tail].next = idx;
        self.slots[0].prev = idx;
    }

    /// Replaces all members. The cursor goes to the first one and the
    /// direction is reset.
    pub fn rebuild(&mut self, roster: impl IntoIterator<Item = T>) {
        *self = Self::from_roster(roster);
    }

    pub fn current(&self) -> Result<T, EngineError> {
        self.cursor
            .map(|idx| self.slots[idx].member)
            .ok_or(EngineError::EmptyStructure)
    }

    /// The member that [`Self::advance()`] would move the cursor to.
    pub fn peek_next(&self) -> Result<T, EngineError> {
        self.cursor
            .map(|idx| self.slots[self.step(idx)].member)
            .ok_or(EngineError::EmptyStructure)
    }

    /// Moves the cursor one member along the current direction.
    ///
    /// With a single member the cursor stays where it is, and on an
    /// empty ring this does nothing.
    pub fn advance(&mut self) {
        if let Some(idx) = self.cursor {
            self.cursor = Some(self.step(idx));
        }
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Flips the direction. The cursor does not move.
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reversed();
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// One full lap starting at the cursor, in the current direction.
    pub fn turn_order(&self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.slots.len());
        if let Some(start) = self.cursor {
            let mut idx = start;
            for _ in 0..self.slots.len() {
                order.push(self.slots[idx].member);
                idx = self.step(idx);
            }
        }
        order
    }

    fn step(&self, idx: usize) -> usize {
        match self.direction {
            Direction::Clockwise => self.slots[idx].next,
            Direction::CounterClockwise => self.slots[idx].prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::RingSize;

    fn ring_of(size: usize) -> TurnRing<usize> {
        TurnRing::from_roster(0..size)
    }

    fn links_are_consistent<T>(ring: &TurnRing<T>) -> bool {
        ring.slots.iter().enumerate().all(|(idx, slot)| {
            ring.slots[slot.next].prev == idx && ring.slots[slot.prev].next == idx
        })
    }

    quickcheck! {
        fn full_lap_returns_to_start(size: RingSize, steps_before: u8, reversed: bool) -> bool {
            let mut ring = ring_of(size.0);
            ring.advance_by(steps_before as usize);
            if reversed {
                ring.reverse_direction();
            }
            let start = ring.current().unwrap();
            let mut seen = vec![false; size.0];
            for _ in 0..size.0 {
                seen[ring.current().unwrap()] = true;
                ring.advance();
            }
            ring.current().unwrap() == start && seen.into_iter().all(|s| s)
        }
    }

    quickcheck! {
        fn backward_step_is_structural_predecessor(size: RingSize, steps: u8) -> bool {
            let mut ring = ring_of(size.0);
            ring.advance_by(steps as usize);
            let before = ring.current().unwrap();
            ring.reverse_direction();
            ring.advance();
            let after = ring.current().unwrap();
            ring.reverse_direction();
            ring.advance();
            links_are_consistent(&ring) && ring.current().unwrap() == before
                && (size.0 == 1 || after == (before + size.0 - 1) % size.0)
        }
    }

    quickcheck! {
        fn double_reverse_is_identity(size: RingSize, steps: u8) -> bool {
            let mut ring = ring_of(size.0);
            ring.advance_by(steps as usize);
            let order = ring.turn_order();
            let direction = ring.direction();
            ring.reverse_direction();
            ring.reverse_direction();
            ring.turn_order() == order && ring.direction() == direction
        }
    }

    #[test]
    fn empty_ring() {
        let mut ring = TurnRing::<usize>::new();
        assert_eq!(ring.current(), Err(EngineError::EmptyStructure));
        assert_eq!(ring.peek_next(), Err(EngineError::EmptyStructure));
        ring.advance();
        assert!(ring.turn_order().is_empty());
        assert!(ring.is_empty());
    }

    #[test]
    fn single_member_is_a_self_loop() {
        let mut ring = ring_of(1);
        ring.advance();
        assert_eq!(ring.current(), Ok(0));
        ring.reverse_direction();
        ring.advance_by(3);
        assert_eq!(ring.current(), Ok(0));
        assert!(links_are_consistent(&ring));
    }

    #[test]
    fn stepping_both_ways() {
        let mut ring = TurnRing::from_roster(['A', 'B', 'C']);
        assert_eq!(ring.peek_next(), Ok('B'));
        ring.advance_by(2);
        assert_eq!(ring.current(), Ok('C'));
        ring.reverse_direction();
        assert_eq!(ring.direction(), Direction::CounterClockwise);
        // Reversing does not move the cursor
        assert_eq!(ring.current(), Ok('C'));
        ring.advance();
        assert_eq!(ring.current(), Ok('B'));
        ring.advance_by(2);
        assert_eq!(ring.current(), Ok('C'));
        assert_eq!(ring.turn_order(), vec!['C', 'B', 'A']);
        ring.reverse_direction();
        assert_eq!(ring.turn_order(), vec!['C', 'A', 'B']);
    }

    #[test]
    fn rebuild_resets_cursor_and_direction() {
        let mut ring = TurnRing::from_roster(['A', 'B', 'C']);
        ring.advance();
        ring.reverse_direction();
        ring.rebuild(['X', 'Y']);
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.current(), Ok('X'));
        assert_eq!(ring.direction(), Direction::Clockwise);
        assert!(links_are_consistent(&ring));
    }
}
