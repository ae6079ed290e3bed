//! Ordered, positionally addressed storage of segments
//!
//! Each slot either holds a [`Segment`] or is a tombstone left behind by a
//! removal that did not reindex. Tombstones keep the positions of the
//! remaining segments stable; accessing one is an out-of-range error.

use crate::models::{RawName, Segment, Side};
use thiserror::Error;

/// Collection errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("No segment at position {0}")]
    OutOfRange(usize),
}

#[derive(Debug, Clone, Default)]
pub struct SegmentCollection {
    slots: Vec<Option<Segment>>,
}

impl SegmentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front, shifting every existing position by one
    pub fn append_left(&mut self, segment: Segment) {
        self.slots.insert(0, Some(segment));
    }

    pub fn append_right(&mut self, segment: Segment) {
        self.slots.push(Some(segment));
    }

    pub fn append(&mut self, segment: Segment, side: Side) {
        match side {
            Side::Left => self.append_left(segment),
            Side::Right => self.append_right(segment),
        }
    }

    /// Mark the segment at `pos` as disabled
    pub fn disable_at(&mut self, pos: usize) -> Result<(), CollectionError> {
        self.slot_mut(pos)?.disable();
        Ok(())
    }

    /// Remove the segment at `pos`
    ///
    /// Without `reindex` the slot becomes a tombstone. With it, every
    /// tombstone is dropped and positions are renumbered densely.
    pub fn remove_at(&mut self, pos: usize, reindex: bool) -> Result<Segment, CollectionError> {
        let removed = self
            .slots
            .get_mut(pos)
            .and_then(Option::take)
            .ok_or(CollectionError::OutOfRange(pos))?;

        if reindex {
            self.slots.retain(Option::is_some);
        }

        Ok(removed)
    }

    /// Replace the segment at `pos`, keeping the position
    ///
    /// With a replacement, `resolve` runs on the new segment before it
    /// supersedes the old one. Without one, `resolve` runs on the existing
    /// segment in place.
    pub fn replace_at<F>(
        &mut self,
        pos: usize,
        replacement: Option<Segment>,
        resolve: F,
    ) -> Result<&Segment, CollectionError>
    where
        F: FnOnce(&mut Segment),
    {
        let slot = self.slot_mut(pos)?;
        match replacement {
            Some(mut segment) => {
                resolve(&mut segment);
                *slot = segment;
            }
            None => resolve(&mut *slot),
        }
        Ok(slot)
    }

    pub fn get_at(&self, pos: usize) -> Result<&Segment, CollectionError> {
        self.slots
            .get(pos)
            .and_then(Option::as_ref)
            .ok_or(CollectionError::OutOfRange(pos))
    }

    /// Number of present segments; tombstones are not counted
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Present segments in render order
    pub fn all(&self) -> Vec<&Segment> {
        self.slots.iter().flatten().collect()
    }

    /// Positions that currently hold a segment
    pub fn positions(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.as_ref().map(|_| pos))
            .collect()
    }

    /// Append one resolved segment per name, in order, at the right end
    pub fn load_from_sequence<I, F>(&mut self, names: I, mut resolve: F)
    where
        I: IntoIterator<Item = RawName>,
        F: FnMut(&mut Segment),
    {
        for name in names {
            let mut segment = Segment::new(name, false);
            resolve(&mut segment);
            self.append_right(segment);
        }
    }

    /// Replace the whole collection with literal title/link segments
    pub fn load_from_pairs<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.slots = pairs
            .into_iter()
            .map(|(title, link)| Some(Segment::linked(title, link)))
            .collect();
    }

    fn slot_mut(&mut self, pos: usize) -> Result<&mut Segment, CollectionError> {
        self.slots
            .get_mut(pos)
            .and_then(Option::as_mut)
            .ok_or(CollectionError::OutOfRange(pos))
    }
}
