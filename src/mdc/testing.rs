//! Testing utilities for parsed presentations
//!
//! # Parser Testing Guidelines
//!
//! Parser tests use two tools together:
//!
//! 1. **[Sample](samples::Sample)** for vetted mdc content. mdc details are
//!    easy to get slightly wrong (indent widths, the space after `>`, the
//!    `--skip--` marker), so new constructs get a sample file under
//!    `docs/samples/` instead of ad-hoc strings scattered over test files.
//! 2. **[assert_presentation]** for the tree. It checks chapters, slides and
//!    elements in one nested expression and reports failures with a path such
//!    as `chapters[1]:slides[4]:elements[0]`.
//!
//! ```rust-example
//! use mdc::mdc::testing::{assert_presentation, samples::Sample};
//!
//! let parsed = Sample::Tables.parse()?;
//! assert_presentation(&parsed.presentation)
//!     .chapter_count(1)
//!     .chapter(0, |c| {
//!         c.title("Tables").slide(0, |s| {
//!             s.element(0, |e| {
//!                 e.assert_table().headers(&["Operator", "Meaning", "Example"]);
//!             });
//!         });
//!     });
//! ```
//!
//! Small inline strings remain fine for single-line classification tests.

pub mod assertions;
pub mod matchers;
pub mod samples;

pub use assertions::{
    assert_presentation, ChapterAssertion, ElementAssertion, ListAssertion,
    PresentationAssertion, SlideAssertion, SourceAssertion,
};
pub use matchers::TextMatch;
pub use samples::{sample_metadata, Sample};
