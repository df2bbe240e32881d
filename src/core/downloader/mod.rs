pub mod client;

pub use client::{Downloader, Fetch};
