pub mod atomic_write;
pub mod safe_write;

pub use atomic_write::{Options, atomic_read, atomic_write};
pub use safe_write::{ensure_dir, safe_write};
