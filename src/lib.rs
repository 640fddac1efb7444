//! Terminal front end for the isoptera turmite simulator: pattern
//! selection, paced rendering, headless runs and video export.

pub mod app;
