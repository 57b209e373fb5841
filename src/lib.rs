//! reaktplot
//!
//! A fluent, discoverable builder layer for plotly-style figures. Every layout and axis option has
//! its own chainable setter; traces are drawn from plain data arrays plus small style specs; the
//! finished figure is saved as PNG, JPEG, WebP, SVG, PDF, EPS or an interactive HTML page.
//!
//! ### Features
//! - One setter per layout/axis option, all also reachable by name through [`Figure::set_option`]
//! - Line, marker and contour traces styled with [`LineSpecs`], [`MarkerSpecs`], [`ContourSpecs`]
//! - A built-in default theme (`reaktplot`), registered once per process
//! - Static rendering with `plotters`; HTML pages powered by plotly.js
//!
//! ### Example
//! ```no_run
//! use reaktplot::{ContourSpecs, Figure, LineSpecs, MarkerSpecs};
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![1.0, 4.0, 9.0, 16.0, 25.0];
//!
//! let mut fig = Figure::new();
//! fig.title("Squares")
//!     .xaxis_title("x")
//!     .yaxis_title("y")
//!     .legend_x(0.1)
//!     .draw_line_with_markers(x.clone(), y, "squares", &LineSpecs::new().width(2), &MarkerSpecs::new());
//! fig.save("squares.png")?;
//!
//! let z = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
//! let mut contour = Figure::new();
//! contour.draw_contour(vec![0.0, 1.0], vec![0.0, 1.0], z, &ContourSpecs::new().show_labels(true));
//! contour.save_with("contour.pdf", 600, 600, 1.0)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod figure;
pub mod graph;
pub mod options;
pub mod specs;
pub mod templates;
pub mod theme;
pub mod viz;

pub use config::ExportConfig;
pub use error::ExportError;
pub use figure::{Figure, OptionEntry, OptionTarget};
pub use options::{Data, Grid, Options};
pub use specs::{ContourSpecs, FontSpecs, LineSpecs, MarkerSpecs};
