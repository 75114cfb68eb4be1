mod invoke;
mod parse;
mod run;

pub use run::classify_file;
use session::ClassifyOptions;

#[derive(Clone, Debug)]
pub struct ClassifyCommand {
    pub filename: String,
    pub options: ClassifyOptions,
}
