//! Output formats
//!
//! Rendering is kept apart from parsing: the parser only builds a
//! [`Document`](crate::gift::ast::Document), and every textual representation lives here
//! behind the [`Formatter`] trait.

pub mod gift;
pub mod registry;
pub mod structured;
pub mod text;

pub use gift::GiftFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use text::TextFormatter;
