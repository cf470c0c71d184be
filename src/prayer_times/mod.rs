pub mod client;
pub mod countdown;

pub use client::{FetchError, TimingsClient, TimingsDay};
pub use countdown::{compute_next, NextPrayer};
