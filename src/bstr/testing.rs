//! Allocators for exercising exhaustion and leak tracking in tests.

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::alloc::BstrAllocator;
use super::layout;

/// Heap allocator that refuses requests once `budget` allocations were made
/// and counts the blocks still live.
#[derive(Debug)]
pub struct BoundedAllocator {
    budget: AtomicUsize,
    live: AtomicUsize,
    released: AtomicUsize,
}

impl BoundedAllocator {
    /// Allocator granting at most `budget` allocations.
    pub fn new(budget: usize) -> Self {
        Self {
            budget: AtomicUsize::new(budget),
            live: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    /// Allocator that only tracks.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Allocator that refuses every request.
    pub fn exhausted() -> Self {
        Self::new(0)
    }

    /// Blocks allocated and not yet released.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Blocks released so far.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    fn block_layout(units: u32) -> Option<Layout> {
        let size = layout::block_size(units)?;
        Layout::from_size_align(size, layout::BLOCK_ALIGN).ok()
    }
}

unsafe impl BstrAllocator for BoundedAllocator {
    fn allocate(&self, units: u32) -> Option<NonNull<u16>> {
        self.budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .ok()?;
        let block_layout = Self::block_layout(units)?;
        let block = NonNull::new(unsafe { alloc(block_layout) })?;
        self.live.fetch_add(1, Ordering::SeqCst);
        Some(unsafe { layout::init_block(block, units) })
    }

    unsafe fn release(&self, bstr: NonNull<u16>) {
        let units = layout::byte_len(bstr) / 2;
        let block_layout =
            Self::block_layout(units).expect("released block was allocated with this layout");
        dealloc(layout::block_start(bstr).as_ptr(), block_layout);
        self.live.fetch_sub(1, Ordering::SeqCst);
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Allocator for paths that must fail before any allocation is attempted.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnreachableAllocator;

unsafe impl BstrAllocator for UnreachableAllocator {
    fn allocate(&self, units: u32) -> Option<NonNull<u16>> {
        panic!("allocator reached for {units} code units");
    }

    unsafe fn release(&self, _bstr: NonNull<u16>) {
        panic!("allocator reached on release");
    }
}
