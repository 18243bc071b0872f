use core::{cmp, mem, ptr::NonNull};
use std::alloc::{self, Layout};

use crate::Md5Error;

/// An owned, aligned heap buffer whose allocation failure is reported to the
/// caller instead of aborting the process.
pub(crate) struct Alloc<T> {
    ptr: NonNull<T>,
    nelem: usize,
    align: usize,
}

// SAFETY: `Alloc` uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for Alloc<T> {}
unsafe impl<T: Sync> Sync for Alloc<T> {}

impl Alloc<u8> {
    /// Allocates `nelem` zero bytes aligned to at least `align`.
    #[inline]
    pub fn zeroed(nelem: usize, align: usize) -> Result<Self, Md5Error> {
        let align = cmp::max(align, mem::align_of::<u8>());
        let layout = Layout::from_size_align(nelem, align)
            .map_err(|_| Md5Error::Allocation { len: nelem })?;
        if layout.size() == 0 {
            return Err(Md5Error::Allocation { len: nelem });
        }
        // SAFETY: layout has a non-zero size.
        let ptr = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(ptr).ok_or(Md5Error::Allocation { len: nelem })?;
        Ok(Alloc {
            ptr,
            nelem,
            align,
        })
    }
}

impl<T> Drop for Alloc<T> {
    #[inline(always)]
    fn drop(&mut self) {
        unsafe {
            let layout =
                Layout::from_size_align_unchecked(
                    mem::size_of::<T>() * self.nelem,
                    self.align
                );
            alloc::dealloc(self.ptr.as_ptr() as _, layout);
        }
    }
}

impl<T> std::ops::Deref for Alloc<T> {
    type Target = [T];
    #[inline(always)]
    fn deref(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.nelem) }
    }
}

impl<T> std::ops::DerefMut for Alloc<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.nelem) }
    }
}
