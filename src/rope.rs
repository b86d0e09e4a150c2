use std::collections::HashSet;

use glam::IVec2;
use itertools::Itertools;

use crate::debugln;
use crate::motion::{Direction, Motion};

/// A head knot dragging a chain of follower knots across an infinite
/// grid. Every knot stays within one square (king-move adjacency) of
/// the knot ahead of it; the positions the last knot touches are
/// recorded.
#[derive(Debug)]
pub struct Rope {
    head: IVec2,
    followers: Vec<IVec2>,
    visited: HashSet<IVec2>,
    lower_bound: IVec2,
    upper_bound: IVec2,
}

impl Rope {
    /// Creates a rope with `followers` knots trailing the head, all at
    /// the origin. The origin counts as visited before any motion.
    pub fn new(followers: usize) -> Self {
        assert!(followers >= 1, "a rope needs at least one follower");
        const ZERO: IVec2 = IVec2::ZERO;

        let mut visited = HashSet::new();
        visited.insert(ZERO);

        Self {
            head: ZERO,
            followers: vec![ZERO; followers],
            visited,
            lower_bound: ZERO,
            upper_bound: ZERO,
        }
    }

    #[inline]
    pub fn apply(&mut self, motion: Motion) {
        debugln!("== {:?} {} ==", motion.direction, motion.distance);
        for _ in 0..motion.distance {
            self.move_head_one(motion.direction);
        }
    }

    pub fn move_head_one(&mut self, dir: Direction) {
        self.head += IVec2::from(dir);
        self.update_bounds(self.head);

        let mut leader = self.head;
        for i in 0..self.followers.len() {
            if Self::is_touching(leader, self.followers[i]) {
                // This link still holds, so every link behind it does
                // too; nothing further down moves this step.
                break;
            }
            let step = (leader - self.followers[i]).clamp(IVec2::NEG_ONE, IVec2::ONE);
            self.followers[i] += step;
            self.update_bounds(self.followers[i]);
            leader = self.followers[i];
        }

        self.visited.insert(self.tail());
        debug_assert!(self.chain_is_adjacent());
    }

    /// Returns the number of unique positions that the tail visited.
    pub fn visited_positions(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn tail(&self) -> IVec2 {
        self.followers[self.followers.len() - 1]
    }

    #[inline]
    fn is_touching(leader: IVec2, follower: IVec2) -> bool {
        let delta = (leader - follower).abs();
        delta.x <= 1 && delta.y <= 1
    }

    fn chain_is_adjacent(&self) -> bool {
        std::iter::once(self.head)
            .chain(self.followers.iter().copied())
            .tuple_windows()
            .all(|(leader, follower)| Self::is_touching(leader, follower))
    }

    #[inline]
    fn update_bounds(&mut self, new_pos: IVec2) {
        self.lower_bound = self.lower_bound.min(new_pos);
        self.upper_bound = self.upper_bound.max(new_pos);
    }

    /// Draws everything seen so far, top row first: `H` for the head,
    /// `1..9` for followers (`?` past nine), `#` for visited squares.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in (self.lower_bound.y..=self.upper_bound.y).rev() {
            for x in self.lower_bound.x..=self.upper_bound.x {
                let pos = IVec2::new(x, y);
                let c = if pos == self.head {
                    'H'
                } else if let Some(i) = self.followers.iter().position(|&f| f == pos) {
                    char::from_digit(i as u32 + 1, 10).unwrap_or('?')
                } else if self.visited.contains(&pos) {
                    '#'
                } else {
                    '.'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}
