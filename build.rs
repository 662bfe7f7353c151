//! Build script compiling the C call-site variants.

use std::env;

/// Returns the display name of a usable C compiler, or `None` if C variants
/// must be skipped.
fn detect_compiler(build: &cc::Build) -> Option<&'static str> {
    let compiler = build.get_compiler();

    if compiler.is_like_msvc() {
        return Some("MSVC");
    }
    if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            return Some("Apple Clang");
        }
        // Same LLVM backend as rustc, so the comparison says nothing new.
        println!("cargo:warning=Vanilla Clang detected. C call-site variants disabled (requires GCC, MSVC, or Apple Clang).");
        return None;
    }
    if compiler.is_like_gnu() {
        return Some("GCC");
    }

    println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). C call-site variants disabled.");
    None
}

fn native_cpu_requested() -> bool {
    ["RUSTFLAGS", "CARGO_ENCODED_RUSTFLAGS"]
        .iter()
        .any(|var| env::var(var).unwrap_or_default().contains("target-cpu=native"))
}

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");

    let probe = cc::Build::new();
    let Some(compiler_name) = detect_compiler(&probe) else {
        return;
    };

    let mut build = cc::Build::new();
    let sources = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(Result::ok).collect::<Vec<_>>(),
        Err(e) => {
            println!("cargo:warning=Bad glob pattern for C sources: {}", e);
            return;
        }
    };
    if sources.is_empty() {
        return;
    }
    for file in &sources {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    // No -ffast-math here: the kernels are integer-only.
    build.opt_level(3);
    if native_cpu_requested() {
        build.flag_if_supported("-march=native");
    }

    build.compile("call_site_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
