//! Registry of everything already placed in the room.
//!
//! Each entry carries a [`Tag`] so collision checks can exempt pairs that are
//! allowed to overlap: access strips may share floor with each other, and a
//! bedside table stands in the bed-side access strip it serves.

use glam::DVec2;
use roomplan_core::Rect;

use crate::document::ItemKind;
use crate::keepout::{KeepOutKind, KeepOutZone};

/// Clearance reserved for human approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    BedSide,
    WardrobeFront,
    ChairPullback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    KeepOut(KeepOutKind),
    Solid(ItemKind),
    Access(AccessKind),
}

impl Tag {
    fn may_overlap(&self, existing: &Tag) -> bool {
        match (self, existing) {
            (Tag::Access(_), Tag::Access(_)) => true,
            (Tag::Solid(kind), Tag::Access(AccessKind::BedSide)) => kind.is_bedside_table(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub rect: Rect,
    pub tag: Tag,
}

/// Ordered set of occupied rectangles, owned by one layout call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupiedSet {
    entries: Vec<Entry>,
}

impl OccupiedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rect: Rect, tag: Tag) {
        self.entries.push(Entry { rect, tag });
    }

    pub fn insert_keep_out(&mut self, zone: &KeepOutZone) {
        self.insert(zone.rect, Tag::KeepOut(zone.kind));
    }

    /// First registered entry that a candidate with `tag` may not overlap.
    pub fn first_conflict(&self, rect: &Rect, tag: Tag) -> Option<&Entry> {
        self.conflicts_where(rect, tag, |_| false)
    }

    pub fn collides(&self, rect: &Rect, tag: Tag) -> bool {
        self.first_conflict(rect, tag).is_some()
    }

    /// Like [`collides`](Self::collides) but ignores entries matching `skip`.
    pub fn collides_except(&self, rect: &Rect, tag: Tag, skip: impl Fn(&Entry) -> bool) -> bool {
        self.conflicts_where(rect, tag, skip).is_some()
    }

    fn conflicts_where(&self, rect: &Rect, tag: Tag, skip: impl Fn(&Entry) -> bool) -> Option<&Entry> {
        self.entries
            .iter()
            .filter(|entry| !skip(*entry))
            .find(|entry| !tag.may_overlap(&entry.tag) && rect.intersects(&entry.rect))
    }

    /// Rectangles registered under `tag`, in insertion order.
    pub fn rects_with(&self, tag: Tag) -> impl Iterator<Item = Rect> + '_ {
        self.entries.iter().filter(move |entry| entry.tag == tag).map(|entry| entry.rect)
    }

    /// Move every entry matching `select` by `delta`.
    pub fn translate_where(&mut self, delta: DVec2, select: impl Fn(&Entry) -> bool) {
        for entry in self.entries.iter_mut() {
            if select(&*entry) {
                entry.rect = entry.rect.translate(delta);
            }
        }
    }
}
