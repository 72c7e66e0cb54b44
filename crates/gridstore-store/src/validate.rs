//! Layout validation.

use gridstore_core::limits::{PAGE_SIZE, PAGE_SIZE_MAX};

use crate::error::LayoutError;
use crate::page::LOCAL_SPAN_MAX;
use crate::store::CellStore;

impl<T> CellStore<T> {
    /// Walk the whole index and report the first broken invariant.
    ///
    /// Checks that columns are sorted and non-empty, pages are non-empty,
    /// within the entry cap and ordered by row without overlap, entries
    /// are strictly ascending with in-range local rows, and every arena
    /// position is valid and referenced once.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut referenced = vec![false; self.arena.len()];
        for (position, column) in self.columns.iter().enumerate() {
            let number = column.number();
            if position > 0 {
                let previous = self.columns[position - 1].number();
                if previous >= number {
                    return Err(LayoutError::ColumnsOutOfOrder {
                        position,
                        number,
                        previous,
                    });
                }
            }
            if column.is_empty() {
                return Err(LayoutError::EmptyColumn { column: number });
            }
            for (p, page) in column.pages().iter().enumerate() {
                if page.is_empty() {
                    return Err(LayoutError::EmptyPage { column: number, page: p });
                }
                if page.len() > PAGE_SIZE_MAX as usize {
                    return Err(LayoutError::PageOverflow {
                        column: number,
                        page: p,
                        len: page.len(),
                    });
                }
                if !(0..PAGE_SIZE).contains(&page.offset()) {
                    return Err(LayoutError::BadLocalRow { column: number, page: p });
                }
                if p > 0 && column.pages()[p - 1].max_row() >= page.min_row() {
                    return Err(LayoutError::PagesOverlap { column: number, page: p });
                }
                if page.min_row() < 0 {
                    return Err(LayoutError::NegativeRow {
                        column: number,
                        row: page.min_row(),
                    });
                }
                let mut last_local = -1;
                for (entry, cell) in page.entries().iter().enumerate() {
                    let local = i32::from(cell.local_row());
                    if local < 0 || local >= LOCAL_SPAN_MAX {
                        return Err(LayoutError::BadLocalRow { column: number, page: p });
                    }
                    if local <= last_local {
                        return Err(LayoutError::EntriesOutOfOrder {
                            column: number,
                            page: p,
                            entry,
                        });
                    }
                    last_local = local;
                    let raw = cell.pos().raw();
                    let Some(seen) = usize::try_from(raw)
                        .ok()
                        .and_then(|i| referenced.get_mut(i))
                    else {
                        return Err(LayoutError::DanglingPosition {
                            column: number,
                            row: page.base() + local,
                            position: raw,
                        });
                    };
                    if *seen {
                        return Err(LayoutError::SharedPosition { position: raw });
                    }
                    *seen = true;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::CellStore;

    #[test]
    fn fresh_and_edited_stores_validate() {
        let mut store = CellStore::new();
        assert_eq!(store.validate(), Ok(()));
        for row in (0..5000).step_by(3) {
            store.set(row, row % 7 + 1, row);
        }
        store.insert_rows(100, 1500);
        store.delete_rows(40, 700);
        store.insert_columns(2, 3);
        store.delete(10, 1, 2000, 4, true);
        assert_eq!(store.validate(), Ok(()));
    }
}
