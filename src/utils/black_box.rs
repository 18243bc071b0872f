pub trait BlackBox {
    /// Prevents the compiler from optimizing away the value of `x`.
    fn black_box(x: Self) -> Self;
}

macro_rules! black_box_impl {
    ($ty:ty, $reg:ident) => {
        impl BlackBox for $ty {
            #[inline(always)]
            #[allow(asm_sub_register)]
            fn black_box(mut x: $ty) -> $ty {
                unsafe {
                    core::arch::asm!(concat!("/* {x} */"), x = inout($reg) x, options(nomem, nostack, preserves_flags, pure));
                }
                x
            }
        }
    };
}

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        black_box_impl!(u8, reg_byte);
    } else if #[cfg(any(target_arch = "aarch64", target_arch = "arm", target_arch = "riscv64"))] {
        black_box_impl!(u8, reg);
    } else {
        impl BlackBox for u8 {
            #[inline(always)]
            fn black_box(x: u8) -> u8 {
                core::hint::black_box(x)
            }
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm", target_arch = "riscv64"))] {
        black_box_impl!(u32, reg);
        black_box_impl!(usize, reg);
    } else {
        impl BlackBox for u32 {
            #[inline(always)]
            fn black_box(x: u32) -> u32 {
                core::hint::black_box(x)
            }
        }

        impl BlackBox for usize {
            #[inline(always)]
            fn black_box(x: usize) -> usize {
                core::hint::black_box(x)
            }
        }
    }
}

impl<T> BlackBox for &T {
    #[inline(always)]
    fn black_box(x: &T) -> &T {
        core::hint::black_box(x)
    }
}

#[inline(always)]
pub fn black_box<T>(x: T) -> T
where
    T: BlackBox,
{
    T::black_box(x)
}
