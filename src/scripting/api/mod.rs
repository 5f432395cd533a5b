//! Types exposed to scripts under the `Wren` global
//!
//! - `Wren` - the application handle
//! - `Wren.opt` - editor options

pub mod handle;
pub mod opt;
