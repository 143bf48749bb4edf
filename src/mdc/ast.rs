//! Document tree for mdc sources
//!
//!     The tree is render-agnostic: it stores what the author wrote, with the
//!     syntax stripped, and hands it to output formats through the
//!     [Renderer](traits::Renderer) contract.
//!
//! Structure
//!
//!     A [Presentation](elements::Presentation) holds chapters in the order
//!     their `# ` headings were discovered. A chapter holds slides (`## `), a
//!     slide holds [elements](elements::Element). Chapter and slide numbers
//!     are 1-based and run across all files of a conversion, which is why
//!     files must be parsed one after another in a fixed order.
//!
//! Plain text and digests
//!
//!     Every element prints its plain text through `Display`. Its digest is
//!     the textual content used to spot elements that did not change between
//!     two steps of an animated slide; elements without text digest to "".

pub mod elements;
pub mod traits;

pub use elements::{
    Button, ButtonKind, Chapter, Element, Image, List, ListEntry, MultipleChoice,
    MultipleChoiceQuestions, Presentation, PresentationMetadata, Quote, Slide, Source,
    SourceOrigin, Table, Uml,
};
pub use traits::Renderer;
