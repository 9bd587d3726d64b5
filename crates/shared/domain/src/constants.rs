//! Domain-level constants.
//!
//! These constants define paging rules for user records.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum allowed records per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`
pub fn clamp_page_size(per_page: u64) -> u64 {
    per_page.clamp(1, MAX_PAGE_SIZE)
}
