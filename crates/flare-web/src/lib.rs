#![cfg_attr(doc, doc = include_str!("../README.md"))]

// Silence the unused_crate_dependencies lint.
// This crate is added just to enable additional WASM features.
extern crate time as _;

#[macro_use]
extern crate tracing;

mod canvas;
mod document;
mod exports;
mod logging;

pub use canvas::CanvasSurface;
pub use document::DocumentSurfaces;
