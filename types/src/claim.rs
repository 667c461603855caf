//! Fabric claim types.
//!
//! Rectangles are measured in whole inches from the top-left corner of the
//! fabric. Edges are half-open: a rect covers `left..left + width` by
//! `top..top + height`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClaimId(u32);

impl ClaimId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[must_use]
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge. Widened so `left + width` cannot overflow.
    #[must_use]
    pub const fn right(&self) -> u64 {
        self.left as u64 + self.width as u64
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> u64 {
        self.top as u64 + self.height as u64
    }

    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The region covered by both rects, or `None` when they share no cell.
    ///
    /// Rects that merely touch along an edge do not intersect.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= u64::from(left) || bottom <= u64::from(top) {
            return None;
        }

        Some(Rect {
            left,
            top,
            width: (right - u64::from(left)) as u32,
            height: (bottom - u64::from(top)) as u32,
        })
    }

    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Every `(x, y)` cell in the rect, column by column.
    #[must_use]
    pub fn cells(&self) -> Cells {
        Cells {
            rect: *self,
            x: u64::from(self.left),
            y: u64::from(self.top),
        }
    }
}

/// Iterator over the cells of a [`Rect`], produced by [`Rect::cells`].
#[derive(Debug, Clone)]
pub struct Cells {
    rect: Rect,
    x: u64,
    y: u64,
}

impl Iterator for Cells {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rect.is_empty() || self.x >= self.rect.right() {
            return None;
        }

        let cell = (self.x, self.y);
        self.y += 1;
        if self.y >= self.rect.bottom() {
            self.y = u64::from(self.rect.top);
            self.x += 1;
        }
        Some(cell)
    }
}

/// One elf's claim: an ID and the rect of fabric it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Claim {
    pub id: ClaimId,
    pub rect: Rect,
}

impl Claim {
    #[must_use]
    pub const fn new(id: ClaimId, rect: Rect) -> Self {
        Self { id, rect }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} @ {},{}: {}x{}",
            self.id, self.rect.left, self.rect.top, self.rect.width, self.rect.height
        )
    }
}
