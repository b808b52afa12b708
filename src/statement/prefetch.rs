use std::num::NonZeroU32;

/// Effective prefetch limit derived from a statement's two prefetch knobs.
///
/// A row count of zero disables the row limit, leaving the memory size as the
/// only bound. A memory size of zero with a non-zero row count disables the
/// memory limit instead. When both are set, whichever is reached first wins.
///
/// ```rust
/// use sql_stmt_config::prelude::*;
///
/// let mut cfg = StatementConfig::new();
/// cfg.set_prefetch_row_count(500);
/// cfg.set_prefetch_memory_size(0);
/// assert_eq!(cfg.prefetch_limit(), PrefetchLimit::Rows(500));
/// assert_eq!(cfg.prefetch_limit().bound(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefetchLimit {
    /// Only the memory size bounds prefetching.
    MemoryBytes(u32),
    /// Only the row count bounds prefetching.
    Rows(u32),
    /// Both knobs are active.
    RowsAndMemory { rows: u32, memory_bytes: u32 },
}

impl PrefetchLimit {
    #[must_use]
    pub fn from_settings(row_count: u32, memory_size: u32) -> Self {
        match (row_count, memory_size) {
            (0, memory_bytes) => PrefetchLimit::MemoryBytes(memory_bytes),
            (rows, 0) => PrefetchLimit::Rows(rows),
            (rows, memory_bytes) => PrefetchLimit::RowsAndMemory { rows, memory_bytes },
        }
    }

    /// The governing value: the single active knob, or the smaller of the two.
    #[must_use]
    pub fn bound(self) -> u32 {
        match self {
            PrefetchLimit::MemoryBytes(memory_bytes) => memory_bytes,
            PrefetchLimit::Rows(rows) => rows,
            PrefetchLimit::RowsAndMemory { rows, memory_bytes } => rows.min(memory_bytes),
        }
    }

    /// Number of rows to prefetch when rows average `row_size` bytes.
    #[must_use]
    pub fn rows_for_row_size(self, row_size: NonZeroU32) -> u32 {
        match self {
            PrefetchLimit::MemoryBytes(memory_bytes) => memory_bytes / row_size,
            PrefetchLimit::Rows(rows) => rows,
            PrefetchLimit::RowsAndMemory { rows, memory_bytes } => {
                rows.min(memory_bytes / row_size)
            }
        }
    }

    #[must_use]
    pub fn row_limit(self) -> Option<u32> {
        match self {
            PrefetchLimit::MemoryBytes(_) => None,
            PrefetchLimit::Rows(rows) | PrefetchLimit::RowsAndMemory { rows, .. } => Some(rows),
        }
    }

    #[must_use]
    pub fn memory_limit(self) -> Option<u32> {
        match self {
            PrefetchLimit::Rows(_) => None,
            PrefetchLimit::MemoryBytes(memory_bytes)
            | PrefetchLimit::RowsAndMemory { memory_bytes, .. } => Some(memory_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_size(bytes: u32) -> NonZeroU32 {
        NonZeroU32::new(bytes).unwrap()
    }

    #[test]
    fn zero_row_count_leaves_memory_alone() {
        let limit = PrefetchLimit::from_settings(0, 4096);
        assert_eq!(limit, PrefetchLimit::MemoryBytes(4096));
        assert_eq!(limit.row_limit(), None);
        assert_eq!(limit.rows_for_row_size(row_size(64)), 64);
    }

    #[test]
    fn memory_can_dominate_row_count() {
        let limit = PrefetchLimit::from_settings(1_000, 4096);
        assert_eq!(limit.rows_for_row_size(row_size(64)), 64);
        assert_eq!(limit.rows_for_row_size(row_size(1)), 1_000);
    }

    #[test]
    fn both_zero_prefetches_nothing_extra() {
        let limit = PrefetchLimit::from_settings(0, 0);
        assert_eq!(limit, PrefetchLimit::MemoryBytes(0));
        assert_eq!(limit.bound(), 0);
    }
}
