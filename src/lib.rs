//! yt2gif - turn a segment of an online video into a GIF
//!
//! The library holds everything the two binaries share: configuration, the
//! message catalogs, the conversion pipeline and the language dispatcher.

pub mod app;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod i18n;
pub mod pipeline;
