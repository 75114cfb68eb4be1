mod options;
mod session;

pub use options::{ClassifyOptions, EmitKind};
pub use session::Session;
