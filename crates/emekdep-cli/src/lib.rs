//! # eMekdep CLI
//!
//! Text rendering used by the `emekdep-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use emekdep_cli::render::render_shift;
//!
//! let grid = generate_shift(&config, &[0, 1, 2, 3, 4]);
//! println!("{}", render_shift(&grid));
//! ```

pub mod render;
