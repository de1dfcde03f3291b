//! maqta CLI library
//!
//! Command-line front end for the maqta utterance segmentation engine.

pub mod commands;
pub mod input;
pub mod output;
