//! # mdc
//!
//! A parser for mdc, the markdown dialect used to write lecture slides.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](mdc::testing).
//! Parser tests use the curated sample sources and the presentation assertions.

pub mod mdc;
