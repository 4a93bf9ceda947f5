/// Toolbench — shared binary plumbing for `extsort` and `segments`.
///
/// All domain logic lives in `toolbench-sorter` and `toolbench-geometry`.
/// This crate only holds what both entry points set up the same way.
pub mod logging;
