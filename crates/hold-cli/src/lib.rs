//! Hold CLI - command line front end for the hold calculator.
//!
//! Provides the `holdcalc` binary:
//! - compute: one-shot calculation from flags, text or JSON output
//! - session: line-by-line editing with recompute on every change
//!
//! Both can write the pattern diagram as SVG.

pub mod config;
pub mod render;
pub mod session;

pub use config::{Config, OutputFormat};
pub use render::{render_svg, RenderConfig};
pub use session::Session;
