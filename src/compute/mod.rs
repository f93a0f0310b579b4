//! Input validation shared by the codec and the grid group.

pub mod validation;
