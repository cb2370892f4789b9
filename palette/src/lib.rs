//! Color engine for the `color-adjust` and `color-scale` command-line tools.
//!
//! This crate owns everything the two binaries share: the RGB color model,
//! color argument parsing, brightness adjustment, and the key-color scale
//! builder that fills unkeyed positions by linear interpolation. Channel
//! arithmetic truncates toward zero rather than rounding, and only the
//! brightness adjuster clamps its result back into the byte range; both
//! behaviors are contractual and covered by tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`color`] | RGB model, argument parsing, brightness adjustment |
//! | [`scale`] | Validated key-color scales and interpolation between keys |

pub mod color;
pub mod scale;
