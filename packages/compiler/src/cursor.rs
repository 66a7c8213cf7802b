use crate::request::{CellAddress, Location, Range};

/// First insertable index of any coordinate space (body or cell)
pub const CELL_START_INDEX: usize = 1;

/// Units an inline object occupies once inserted
pub const INLINE_OBJECT_UNITS: usize = 1;

/// Units a table occupies in the space it was inserted into, whatever its size
pub const TABLE_UNITS: usize = 1;

/// Insertion cursor for one coordinate space
///
/// Owned by exactly one compile call. Entering a cell never touches the
/// parent cursor: `with_location` hands out a fresh child starting at
/// `CELL_START_INDEX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    location: Option<CellAddress>,
}

impl Cursor {
    pub fn new(index: usize, location: Option<CellAddress>) -> Self {
        Self { index, location }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn location(&self) -> Option<&CellAddress> {
        self.location.as_ref()
    }

    pub fn is_nested(&self) -> bool {
        self.location.is_some()
    }

    /// Move forward by `units`, returning the new index
    pub fn advance(&mut self, units: usize) -> usize {
        self.index += units;
        self.index
    }

    /// Child cursor for the cell at `address`
    pub fn with_location(&self, address: CellAddress) -> Cursor {
        Cursor::new(CELL_START_INDEX, Some(address))
    }

    /// Address of cell `(row, column)` of a table inserted at the current index
    pub fn cell_address(&self, row_index: usize, column_index: usize) -> CellAddress {
        CellAddress::new(self.index, row_index, column_index)
    }

    /// Insertion point at the current index
    pub fn here(&self) -> Location {
        Location::new(self.index, self.location)
    }

    /// Range of `units` starting at the current index
    pub fn span(&self, units: usize) -> Range {
        Range::new(self.index, self.index + units, self.location)
    }

    /// Range from `start` up to the current index
    pub fn range_from(&self, start: usize) -> Range {
        Range::new(start, self.index, self.location)
    }
}
