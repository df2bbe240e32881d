// ─── lazarus-setup core ───
// Provisions a Lazarus / Free Pascal release on a CI runner.
//
// Architecture:
//   core/
//     catalog/     — Release tables, stable version, download URLs
//     version/     — "stable" / "dist" alias expansion + validation
//     installer/   — Step planning + sequential install state machine
//     downloader/  — Streaming HTTP downloads
//     process/     — Command lines + process runner
//     environment  — Runner variables and PATH registration
//     platform     — Runner platform detection

pub mod catalog;
pub mod downloader;
pub mod environment;
pub mod error;
pub mod http;
pub mod installer;
pub mod platform;
pub mod process;
pub mod version;
