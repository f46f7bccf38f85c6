use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::MoveError;

/// Number of rows and columns in the Elevens layout.
pub const GRID_SIZE: usize = 3;
/// Number of slots in the layout.
pub const SLOT_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A validated position on the 3x3 grid.
///
/// Deserialized slots go through [`Slot::new`], so a slot off the grid can
/// never be constructed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawSlot")]
pub struct Slot {
    row: usize,
    col: usize,
}

/// Wire form of a [`Slot`] before bounds checking.
#[derive(Deserialize)]
struct RawSlot {
    row: i32,
    col: i32,
}

impl TryFrom<RawSlot> for Slot {
    type Error = MoveError;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        Slot::new(raw.row, raw.col).ok_or(MoveError::OutOfBounds {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Slot {
    /// Returns `None` unless both coordinates lie in `0..3`.
    pub fn new(row: i32, col: i32) -> Option<Slot> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Slot { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// All nine slots in row-major order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT).map(|i| Slot {
            row: i / GRID_SIZE,
            col: i % GRID_SIZE,
        })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 layout. Each slot owns at most one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    slots: [[Option<Card>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Option<Card>; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { slots: rows }
    }

    pub fn get(&self, slot: Slot) -> Option<&Card> {
        self.slots[slot.row][slot.col].as_ref()
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Fills empty cells in row-major order with cards from `next` until it
    /// returns `None`. Occupied cells are never touched. Returns the number placed.
    pub(crate) fn fill_empty_with(&mut self, mut next: impl FnMut() -> Option<Card>) -> usize {
        let mut filled = 0;
        for cell in self.slots.iter_mut().flatten() {
            if cell.is_some() {
                continue;
            }
            match next() {
                Some(card) => {
                    *cell = Some(card);
                    filled += 1;
                }
                None => break,
            }
        }
        filled
    }

    pub(crate) fn take(&mut self, slot: Slot) -> Option<Card> {
        self.slots[slot.row][slot.col].take()
    }

    /// Occupied slots with their cards, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Slot, &Card)> + '_ {
        Slot::all().filter_map(move |s| self.get(s).map(|c| (s, c)))
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn empty_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::all().filter(move |&s| !self.is_occupied(s))
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let cells = self.slots.map(|row| {
            row.map(|cell| match cell {
                Some(card) => CellView::Card(card.display_name()),
                None => CellView::Empty,
            })
        });
        GridSnapshot { cells }
    }
}

/// What a presentation layer shows for one slot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum CellView {
    /// Display name of the card in the slot
    Card(String),
    /// Nothing in the slot
    Empty,
}

/// Render-friendly copy of the grid; owns no cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Rows of cells, top row first
    pub cells: [[CellView; GRID_SIZE]; GRID_SIZE],
}

impl GridSnapshot {
    pub fn cell(&self, slot: Slot) -> &CellView {
        &self.cells[slot.row][slot.col]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    CellView::Card(name) => name.as_str(),
                    CellView::Empty => "(empty)",
                })
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}
