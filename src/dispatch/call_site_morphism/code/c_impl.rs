//! FFI bindings for the C call-site variants in `call_site.c`.

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn call_site_c_simple124(num: i32) -> i32;
        pub fn call_site_c_switch124(num: i32) -> i32;
        pub fn call_site_c_multi_switch(num: i32) -> i32;
    }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

/// `[add1, add2, add4]` through one function-pointer call site
#[cfg(c_implementation_active)]
pub fn simple124(num: i32) -> i32 {
    // SAFETY: pure integer function with no preconditions.
    unsafe { ffi::call_site_c_simple124(num) }
}

/// `[add1, add2, add4]` through per-position function-pointer call sites
#[cfg(c_implementation_active)]
pub fn switch124(num: i32) -> i32 {
    // SAFETY: pure integer function with no preconditions.
    unsafe { ffi::call_site_c_switch124(num) }
}

/// The 124, 241 and 412 tables through the same per-position call sites
#[cfg(c_implementation_active)]
pub fn multi_switch(num: i32) -> i32 {
    // SAFETY: pure integer function with no preconditions.
    unsafe { ffi::call_site_c_multi_switch(num) }
}

// Stubs for missing C compiler; never registered while C_IMPL_AVAILABLE is false.
#[cfg(not(c_implementation_active))]
pub fn simple124(_num: i32) -> i32 {
    unreachable!("C implementation not compiled (requires GCC, MSVC or Apple Clang)")
}

#[cfg(not(c_implementation_active))]
pub fn switch124(_num: i32) -> i32 {
    unreachable!("C implementation not compiled (requires GCC, MSVC or Apple Clang)")
}

#[cfg(not(c_implementation_active))]
pub fn multi_switch(_num: i32) -> i32 {
    unreachable!("C implementation not compiled (requires GCC, MSVC or Apple Clang)")
}
