// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-only allocators and element trackers.

// Std imports
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    vec::Vec,
};

// Core imports
use core::{alloc::Layout, ptr::NonNull};

// External imports - allocator-api2
use allocator_api2::alloc::{AllocError, Allocator, Global};

#[derive(Default)]
struct Ledger {
    blocks: RefCell<Vec<(usize, Layout)>>,
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    last_layout: Cell<Option<Layout>>,
    fail_after: Cell<Option<usize>>,
}

/// Wraps [`Global`] and records every block it hands out.
///
/// `deallocate` asserts that the pointer is live and that the layout matches
/// the one used to allocate it.
#[derive(Clone, Default)]
pub(crate) struct CountingAlloc(Rc<Ledger>);

impl CountingAlloc {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Lets `n` more allocations succeed, then fails every later one.
    pub(crate) fn fail_after(&self, n: usize) {
        self.0.fail_after.set(Some(n));
    }

    pub(crate) fn allocations(&self) -> usize {
        self.0.allocations.get()
    }

    pub(crate) fn deallocations(&self) -> usize {
        self.0.deallocations.get()
    }

    pub(crate) fn live_blocks(&self) -> usize {
        self.0.blocks.borrow().len()
    }

    pub(crate) fn last_layout(&self) -> Option<Layout> {
        self.0.last_layout.get()
    }
}

unsafe impl Allocator for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if let Some(n) = self.0.fail_after.get() {
            if n == 0 {
                return Err(AllocError);
            }
            self.0.fail_after.set(Some(n - 1));
        }
        let block = Global.allocate(layout)?;
        self.0
            .blocks
            .borrow_mut()
            .push((block.cast::<u8>().as_ptr() as usize, layout));
        self.0.allocations.set(self.0.allocations.get() + 1);
        self.0.last_layout.set(Some(layout));
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        let addr = ptr.as_ptr() as usize;
        let mut blocks = self.0.blocks.borrow_mut();
        let pos = blocks
            .iter()
            .position(|&(a, _)| a == addr)
            .expect("deallocating a block that is not live");
        let (_, original) = blocks.swap_remove(pos);
        assert_eq!(original, layout, "deallocated with a different layout");
        self.0.deallocations.set(self.0.deallocations.get() + 1);
        // SAFETY: the block came from `Global.allocate(layout)`.
        unsafe { Global.deallocate(ptr, layout) };
    }
}

/// An element that counts how many times it has been dropped.
#[derive(Debug)]
pub(crate) struct DropTracker {
    pub(crate) id: i32,
    drops: Rc<Cell<usize>>,
}

impl DropTracker {
    pub(crate) fn new(id: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for DropTracker {
    fn clone(&self) -> Self {
        Self::new(self.id, &self.drops)
    }
}

impl PartialEq for DropTracker {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for DropTracker {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// An element whose `clone` panics once a shared budget is exhausted.
#[derive(Debug)]
pub(crate) struct CloneBomb {
    budget: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl CloneBomb {
    pub(crate) fn new(budget: &Rc<Cell<usize>>, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            budget: Rc::clone(budget),
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.set(left - 1);
        Self::new(&self.budget, &self.drops)
    }
}

impl Drop for CloneBomb {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
