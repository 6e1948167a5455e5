//! Asset resolution and materialization.

mod meta;
mod process;
mod request;
mod resolve;


// Types
pub use request::{AssetRequest, ResolvedUri};

// Resolution (reads the source, may write copies)
pub use resolve::resolve;

// Helpers
pub use meta::file_parts;
pub use process::copy_to_outputs;
