use std::num::NonZeroU32;

use sql_stmt_config::prelude::*;

#[test]
fn prefetch_setters_never_fail_and_round_trip() {
    let mut cfg = StatementConfig::new();
    for value in [0, 1, 500, u32::MAX] {
        cfg.set_prefetch_row_count(value);
        cfg.set_prefetch_memory_size(value);
        assert_eq!(cfg.prefetch_row_count(), value);
        assert_eq!(cfg.prefetch_memory_size(), value);
    }
}

#[test]
fn zero_row_count_uses_memory_size_alone() {
    let cfg = StatementConfig::new();
    let limit = cfg.prefetch_limit();
    assert_eq!(limit, PrefetchLimit::MemoryBytes(134_217_728));
    assert_eq!(limit.bound(), 134_217_728);
    assert_eq!(limit.row_limit(), None);
    assert_eq!(limit.memory_limit(), Some(134_217_728));
}

#[test]
fn non_zero_row_count_takes_minimum_of_both() {
    let mut cfg = StatementConfig::new();
    cfg.set_prefetch_row_count(100);
    cfg.set_prefetch_memory_size(4096);
    let limit = cfg.prefetch_limit();
    assert_eq!(
        limit,
        PrefetchLimit::RowsAndMemory {
            rows: 100,
            memory_bytes: 4096
        }
    );
    assert_eq!(limit.bound(), 100);

    cfg.set_prefetch_memory_size(50);
    assert_eq!(cfg.prefetch_limit().bound(), 50);
}

#[test]
fn either_knob_may_dominate_by_row_size() {
    let mut cfg = StatementConfig::new();
    cfg.set_prefetch_row_count(1_000);
    cfg.set_prefetch_memory_size(64 * 1024);
    let limit = cfg.prefetch_limit();

    // 64 KiB of 1 KiB rows: memory governs
    assert_eq!(limit.rows_for_row_size(NonZeroU32::new(1024).unwrap()), 64);
    // 64 KiB of 16 byte rows: row count governs
    assert_eq!(limit.rows_for_row_size(NonZeroU32::new(16).unwrap()), 1_000);
}

#[test]
fn zero_memory_with_row_count_is_row_bounded() {
    let mut cfg = StatementConfig::new();
    cfg.set_prefetch_row_count(500);
    cfg.set_prefetch_memory_size(0);
    let limit = cfg.prefetch_limit();
    assert_eq!(limit, PrefetchLimit::Rows(500));
    assert_eq!(limit.bound(), 500);
    assert_eq!(limit.memory_limit(), None);
    assert_eq!(limit.rows_for_row_size(NonZeroU32::new(1 << 20).unwrap()), 500);
}

#[test]
fn reset_drops_prefetch_edits() {
    let mut cfg = StatementConfig::new();
    cfg.set_prefetch_row_count(500);
    cfg.set_prefetch_memory_size(0);
    cfg.reset();
    assert_eq!(cfg.prefetch_limit(), PrefetchLimit::MemoryBytes(1 << 27));
}
