// Wed Feb 4 2026 - Alex

pub mod banner;

pub use banner::Banner;
