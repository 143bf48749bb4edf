//! Element types of the document tree
//!
//!     Presentation → Chapter → Slide → Element. Each level owns the next one
//!     exclusively; nested content (list entries, the comment of a slide) is
//!     owned by its parent element.
//!
//!     One module per element family. Elements that are a plain string
//!     (text, script, equation, the call-out boxes) live directly in the
//!     [Element] enum.

pub mod button;
pub mod chapter;
pub mod element;
pub mod image;
pub mod list;
pub mod multiple_choice;
pub mod presentation;
pub mod slide;
pub mod source;
pub mod table;

pub use button::{Button, ButtonKind};
pub use chapter::Chapter;
pub use element::{Element, Quote, Uml};
pub use image::{Image, IMAGE_FORMATS};
pub use list::{List, ListEntry};
pub use multiple_choice::{MultipleChoice, MultipleChoiceQuestions};
pub use presentation::{Presentation, PresentationMetadata};
pub use slide::Slide;
pub use source::{Source, SourceOrigin};
pub use table::{RowFit, Table};
