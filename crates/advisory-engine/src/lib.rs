//! Farming advisory logic on top of the warehouse statement executor:
//! prefix suggestions, auto-pick field resolution, the advisory lookup
//! itself, report rendering, and translation.

pub mod advisory;
pub mod autopick;
pub mod render;
pub mod sql;
pub mod suggestions;
pub mod translate;
