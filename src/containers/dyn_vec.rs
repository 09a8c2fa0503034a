//! DynVec: contiguous, resizable, index-addressable sequence.
//!
//! The backing buffer grows through `realloc`, which can often extend the
//! allocation in place instead of allocating and copying. Growth doubles the
//! capacity with a floor of [`DEFAULT_CAPACITY`], giving amortized O(1)
//! `push`. The buffer never shrinks automatically; capacity changes only
//! through growth or an explicit [`DynVec::resize_capacity`].

use crate::error::{DatakitError, Result};
use std::alloc::{self, Layout};
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

/// Capacity given to an empty vector on its first push.
pub const DEFAULT_CAPACITY: usize = 16;

/// A dynamic array with amortized O(1) append.
///
/// Invariants: `capacity >= len` at all times, and indices `[0, len)` refer
/// to initialized elements. Zero-sized element types never allocate and
/// report a capacity of `usize::MAX`.
///
/// # Examples
///
/// ```rust
/// use datakit::DynVec;
///
/// let mut vec = DynVec::new();
/// vec.push(42).unwrap();
/// vec.push(84).unwrap();
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec[0], 42);
/// assert_eq!(vec.pop(), Some(84));
/// ```
pub struct DynVec<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    cap: usize,
}

impl<T> DynVec<T> {
    /// Create a new empty vector. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            ptr: None,
            len: 0,
            cap: 0,
        }
    }

    /// Create a vector with room for `cap` elements.
    pub fn with_capacity(cap: usize) -> Result<Self> {
        let mut vec = Self::new();
        if cap > 0 {
            vec.reallocate(cap)?;
        }
        Ok(vec)
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    fn base_ptr(&self) -> *const T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null(),
        }
    }

    #[inline]
    fn base_ptr_mut(&mut self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// View the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        if self.len == 0 {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.base_ptr(), self.len) }
        }
    }

    /// View the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.len == 0 {
            &mut []
        } else {
            unsafe { slice::from_raw_parts_mut(self.base_ptr_mut(), self.len) }
        }
    }

    /// Get a reference to the element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    // Move the buffer to exactly `new_cap` slots. `new_cap` must hold the
    // live prefix. Zero-sized elements never touch the allocator: the
    // pointer stays dangling and the capacity saturates, as in std's RawVec.
    fn reallocate(&mut self, new_cap: usize) -> Result<()> {
        debug_assert!(new_cap >= self.len);
        if mem::size_of::<T>() == 0 {
            self.ptr = Some(NonNull::dangling());
            self.cap = usize::MAX;
            return Ok(());
        }
        let new_layout = Layout::array::<T>(new_cap)
            .map_err(|_| DatakitError::out_of_memory(new_cap.saturating_mul(mem::size_of::<T>())))?;

        let new_ptr = match self.ptr {
            Some(ptr) if self.cap > 0 => {
                let old_layout = Layout::array::<T>(self.cap)
                    .map_err(|_| DatakitError::out_of_memory(new_layout.size()))?;
                unsafe {
                    alloc::realloc(ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) as *mut T
                }
            }
            _ => unsafe { alloc::alloc(new_layout) as *mut T },
        };

        if new_ptr.is_null() {
            return Err(DatakitError::out_of_memory(new_layout.size()));
        }

        self.ptr = Some(unsafe { NonNull::new_unchecked(new_ptr) });
        self.cap = new_cap;
        Ok(())
    }

    /// Append an element, growing the buffer first if it is full.
    ///
    /// Growth doubles the capacity, with [`DEFAULT_CAPACITY`] as the floor,
    /// so a long run of pushes costs amortized O(1) per element.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == self.cap {
            let grown = if self.cap == 0 {
                DEFAULT_CAPACITY
            } else {
                self.cap
                    .checked_mul(2)
                    .ok_or_else(|| DatakitError::out_of_memory(usize::MAX))?
            };
            self.reallocate(grown)?;
        }

        unsafe {
            ptr::write(self.base_ptr_mut().add(self.len), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(unsafe { ptr::read(self.base_ptr().add(self.len)) })
        }
    }

    /// Whether any live element equals `value`. Linear scan.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().iter().any(|v| v == value)
    }

    /// Change the capacity to exactly `new_cap`.
    ///
    /// # Panics
    ///
    /// Panics if `new_cap < self.len()`; shrinking below the live prefix
    /// would discard elements and is a caller defect.
    pub fn resize_capacity(&mut self, new_cap: usize) -> Result<()> {
        assert!(
            new_cap >= self.len,
            "DynVec::resize_capacity: new capacity {} below length {}",
            new_cap,
            self.len
        );
        if new_cap == self.cap {
            return Ok(());
        }
        if new_cap == 0 {
            self.release();
            return Ok(());
        }
        self.reallocate(new_cap)
    }

    /// Drop all live elements. Keeps the allocation.
    pub fn clear(&mut self) {
        let live = self.len;
        self.len = 0;
        for i in 0..live {
            unsafe {
                ptr::drop_in_place(self.base_ptr_mut().add(i));
            }
        }
    }

    // Free the buffer entirely. Only valid with no live elements.
    fn release(&mut self) {
        debug_assert_eq!(self.len, 0);
        if let Some(ptr) = self.ptr.take() {
            if self.cap > 0 && mem::size_of::<T>() != 0 {
                unsafe {
                    // Layout was validated when the buffer was created.
                    let layout = Layout::array::<T>(self.cap).unwrap();
                    alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
                }
            }
        }
        self.cap = 0;
    }
}

impl<T> Default for DynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynVec<T> {
    fn drop(&mut self) {
        self.clear();
        self.release();
    }
}

impl<T> Deref for DynVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for DynVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynVec<T> {}

impl<T: Clone> Clone for DynVec<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.len.max(1))
            .expect("DynVec::clone: allocation failed");
        for item in self.as_slice() {
            cloned
                .push(item.clone())
                .expect("DynVec::clone: capacity reserved");
        }
        cloned
    }
}

// Safety: DynVec owns its buffer exclusively; it is Send/Sync exactly when
// the element type is.
unsafe impl<T: Send> Send for DynVec<T> {}
unsafe impl<T: Sync> Sync for DynVec<T> {}
