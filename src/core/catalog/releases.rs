//! Release tables as published on the Lazarus SourceForge project.
//!
//! The Windows and Linux tables are curated independently and must list
//! the same versions. Newest first.

/// Debian packages that make up one Linux release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebPackages {
    pub version: &'static str,
    pub ide: &'static str,
    pub compiler: &'static str,
    pub compiler_source: &'static str,
}

/// Self-contained Windows installers (IDE, compiler and sources bundled).
pub static WINDOWS_INSTALLERS: &[(&str, &str)] = &[
    ("2.0.6", "lazarus-2.0.6-fpc-3.0.4-win32.exe"),
    ("2.0.4", "lazarus-2.0.4-fpc-3.0.4-win32.exe"),
    ("2.0.2", "lazarus-2.0.2-fpc-3.0.4-win32.exe"),
    ("2.0.0", "lazarus-2.0.0-fpc-3.0.4-win32.exe"),
    ("1.8.4", "lazarus-1.8.4-fpc-3.0.4-win32.exe"),
    ("1.8.2", "lazarus-1.8.2-fpc-3.0.4-win32.exe"),
    ("1.8.0", "lazarus-1.8.0-fpc-3.0.4-win32.exe"),
    ("1.6.4", "lazarus-1.6.4-fpc-3.0.2-win32.exe"),
    ("1.6.2", "lazarus-1.6.2-fpc-3.0.0-win32.exe"),
    ("1.6", "lazarus-1.6.0-fpc-3.0.0-win32.exe"),
    ("1.4.4", "lazarus-1.4.4-fpc-2.6.4-win32.exe"),
    ("1.4.2", "lazarus-1.4.2-fpc-2.6.4-win32.exe"),
    ("1.4", "lazarus-1.4.0-fpc-2.6.4-win32.exe"),
    ("1.2.6", "lazarus-1.2.6-fpc-2.6.4-win32.exe"),
    ("1.2.4", "lazarus-1.2.4-fpc-2.6.4-win32.exe"),
    ("1.2.2", "lazarus-1.2.2-fpc-2.6.4-win32.exe"),
    ("1.2", "lazarus-1.2.0-fpc-2.6.2-win32.exe"),
    ("1.0.14", "lazarus-1.0.14-fpc-2.6.2-win32.exe"),
    ("1.0.12", "lazarus-1.0.12-fpc-2.6.2-win32.exe"),
];

const fn deb(
    version: &'static str,
    ide: &'static str,
    compiler: &'static str,
    compiler_source: &'static str,
) -> DebPackages {
    DebPackages {
        version,
        ide,
        compiler,
        compiler_source,
    }
}

/// amd64 Debian packages; the FPC packages are shared between IDE releases.
pub static LINUX_PACKAGES: &[DebPackages] = &[
    deb(
        "2.0.6",
        "lazarus-project_2.0.6-0_amd64.deb",
        "fpc-laz_3.0.4-1_amd64.deb",
        "fpc-src_3.0.4-2_amd64.deb",
    ),
    deb(
        "2.0.4",
        "lazarus-project_2.0.4-0_amd64.deb",
        "fpc-laz_3.0.4-1_amd64.deb",
        "fpc-src_3.0.4-2_amd64.deb",
    ),
    deb(
        "2.0.2",
        "lazarus-project_2.0.2-0_amd64.deb",
        "fpc-laz_3.0.4-1_amd64.deb",
        "fpc-src_3.0.4-2_amd64.deb",
    ),
    deb(
        "2.0.0",
        "lazarus-project_2.0.0-0_amd64.deb",
        "fpc-laz_3.0.4-1_amd64.deb",
        "fpc-src_3.0.4-2_amd64.deb",
    ),
    deb(
        "1.8.4",
        "lazarus-project_1.8.4-0_amd64.deb",
        "fpc_3.0.4-3_amd64.deb",
        "fpc-src_3.0.4-2_amd64.deb",
    ),
    deb(
        "1.8.2",
        "lazarus-project_1.8.2-0_amd64.deb",
        "fpc_3.0.4-2_amd64.deb",
        "fpc-src_3.0.4-2_amd64.deb",
    ),
    deb(
        "1.8.0",
        "lazarus-project_1.8.0-1_amd64.deb",
        "fpc_3.0.4-2_amd64.deb",
        "fpc-src_3.0.4-2_amd64.deb",
    ),
    deb(
        "1.6.4",
        "lazarus-project_1.6.4-0_amd64.deb",
        "fpc_3.0.2-170225_amd64.deb",
        "fpc-src_3.0.2-170225_amd64.deb",
    ),
    deb(
        "1.6.2",
        "lazarus-project_1.6.2-1_amd64.deb",
        "fpc_3.0.0-151205_amd64.deb",
        "fpc-src_3.0.0-151205_amd64.deb",
    ),
    deb(
        "1.6",
        "lazarus_1.6-0_amd64.deb",
        "fpc_3.0.0-151205_amd64.deb",
        "fpc-src_3.0.0-151205_amd64.deb",
    ),
    deb(
        "1.4.4",
        "lazarus_1.4.4-0_amd64.deb",
        "fpc_2.6.4-150228_amd64.deb",
        "fpc-src_2.6.4-150228_amd64.deb",
    ),
    deb(
        "1.4.2",
        "lazarus_1.4.2-0_amd64.deb",
        "fpc_2.6.4-150228_amd64.deb",
        "fpc-src_2.6.4-150228_amd64.deb",
    ),
    deb(
        "1.4",
        "lazarus_1.4.0-0_amd64.deb",
        "fpc_2.6.4-150228_amd64.deb",
        "fpc-src_2.6.4-150228_amd64.deb",
    ),
    deb(
        "1.2.6",
        "lazarus_1.2.6-0_amd64.deb",
        "fpc_2.6.4-140420_amd64.deb",
        "fpc-src_2.6.4-140420_amd64.deb",
    ),
    deb(
        "1.2.4",
        "lazarus_1.2.4-0_amd64.deb",
        "fpc_2.6.4-140420_amd64.deb",
        "fpc-src_2.6.4-140420_amd64.deb",
    ),
    deb(
        "1.2.2",
        "lazarus_1.2.2-0_amd64.deb",
        "fpc_2.6.4-140420_amd64.deb",
        "fpc-src_2.6.4-140420_amd64.deb",
    ),
    deb(
        "1.2",
        "lazarus_1.2.0-0_amd64.deb",
        "fpc_2.6.2-0_amd64.deb",
        "fpc-src_2.6.2-0_amd64.deb",
    ),
    deb(
        "1.0.14",
        "lazarus_1.0.14-0_amd64.deb",
        "fpc_2.6.2-0_amd64.deb",
        "fpc-src_2.6.2-0_amd64.deb",
    ),
    deb(
        "1.0.12",
        "lazarus_1.0.12-0_amd64.deb",
        "fpc_2.6.2-0_amd64.deb",
        "fpc-src_2.6.2-0_amd64.deb",
    ),
];
