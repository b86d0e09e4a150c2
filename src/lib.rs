//! Rope-bridge simulation: a chain of knots dragged across an infinite
//! grid, counting the distinct positions the last knot visits.
//!
//! The pieces are deliberately separable:
//!
//! * [`lines::LineSource`] — lazy line-by-line reading of an input file.
//! * [`motion::Motion`] — one parsed `<direction> <count>` command.
//! * [`rope::Rope`] — the simulator itself.
//!
//! The binary wires them together: one line is read, parsed, and fully
//! applied before the next line is touched.

pub mod helpers;
pub mod lines;
pub mod motion;
pub mod rope;

pub use lines::LineSource;
pub use motion::{Direction, Motion, ParseError};
pub use rope::Rope;

/// Like [`println!`], but compiled out of release builds.
#[macro_export]
macro_rules! debugln {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        println!($($arg)*);
    }};
}
