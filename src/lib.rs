//! # fulljust
//!
//! A small library that renders text with *full justification*: extra
//! inter-character spacing is distributed so that every line spans the
//! exact width of its container, including the single-line case.
//!
//! ## Overview
//!
//! Standard text layout primitives left-align ragged lines. `fulljust` sits
//! between a line-breaking engine and a drawing surface: it consumes the
//! engine's per-line results (character ranges, baselines, natural widths)
//! through the [`LineLayout`] contract and turns them into a sequence of
//! positioned draw commands whose last character's right edge coincides
//! with the content box's right edge.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fulljust::{Scale, TextSystem};
//!
//! // 1. Create a TextSystem and load fonts
//! let system = TextSystem::new(Scale(1.0));
//! system.load_system_fonts();
//!
//! // 2. Obtain line layout results from your wrapping engine
//! // (See the demos for how to build `Lines` descriptors.)
//!
//! // 3. Paint once per frame
//! // system.paint(&content, &lines, &content_box, &mut surface);
//! ```
//!
//! ## Design
//!
//! *   **Pure core**: [`render::render_plan`] is a pure function of
//!     (content, layout, config, box); painting twice with unchanged inputs
//!     produces bit-identical command sequences.
//! *   **External wrapping**: line-breaking stays in the host's layout
//!     engine. This crate never decides where lines end.
//! *   **Per-character redraw**: justified lines are emitted as one command
//!     per character. This is deliberate; stretching a whole-line draw via a
//!     transform would change kerning/ligature rendering.

pub mod config;
pub mod content;
pub mod font_storage;
pub mod justify;
pub mod layout;
pub mod measure;
pub mod render;
pub mod renderer;
pub mod system;

// common re-exports
pub use config::{ConfigError, JustificationConfig, Rgba, Scale};
pub use content::TextContent;
pub use font_storage::FontStorage;
pub use justify::DrawOp;
pub use layout::{ContentBox, LineDescriptor, LineLayout, Lines};
pub use measure::{FontMeasurer, Measure};
pub use renderer::{DrawSurface, TextStyle};
pub use system::TextSystem;

// re-export dependencies
pub use euclid;
pub use fontdb;
pub use fontdue;
pub use parking_lot;
