//! Grid limits and page geometry.
//!
//! Rows are grouped into pages of `PAGE_SIZE` rows. A row's nominal page
//! is `row >> PAGE_BITS`; structural edits may later move a page's
//! entries away from their nominal page, which is why pages also carry
//! an offset (see `gridstore-store`).

/// Number of rows in a worksheet grid.
pub const MAX_ROWS: i32 = 1_048_576;

/// Number of columns in a worksheet grid.
pub const MAX_COLUMNS: i32 = 16_384;

/// log2 of the nominal page span.
pub const PAGE_BITS: u32 = 10;

/// Nominal number of rows covered by one page.
pub const PAGE_SIZE: i32 = 1 << PAGE_BITS;

/// Hard cap on the number of entries a single page may hold.
pub const PAGE_SIZE_MAX: i32 = PAGE_SIZE << 1;

/// The nominal page number of `row`.
#[inline]
pub fn page_of(row: i32) -> i16 {
    (row >> PAGE_BITS) as i16
}

/// The first row of nominal page `page`.
#[inline]
pub fn page_start(page: i16) -> i32 {
    i32::from(page) << PAGE_BITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_geometry() {
        assert_eq!(PAGE_SIZE, 1024);
        assert_eq!(PAGE_SIZE_MAX, 2048);
        assert_eq!(page_of(0), 0);
        assert_eq!(page_of(1023), 0);
        assert_eq!(page_of(1024), 1);
        assert_eq!(page_start(3), 3072);
    }

    #[test]
    fn last_row_fits_page_number() {
        let last = page_of(MAX_ROWS);
        assert_eq!(last, 1024);
        assert_eq!(page_start(last), MAX_ROWS);
    }
}
