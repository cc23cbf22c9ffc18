pub mod patcher;

pub use patcher::{LayoutPatcher, PatchOutcome, insert_import, strip_import};
