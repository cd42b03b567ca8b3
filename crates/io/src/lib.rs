/// # IO Module.
///
/// File access shared by the editor crates.
pub mod mmap;
