//! Conversion tests
//!
//! Bidirectional Markdown ↔ document coverage: imports check the produced
//! document trees, exports check the printed text, round trips check the
//! stability contract between the two.

mod export;
mod import;
mod normalize;
mod roundtrip;
