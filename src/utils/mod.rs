// Thu Aug 06 2026 - Alex

pub mod logging;
