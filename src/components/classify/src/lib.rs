mod duplicates;
mod error;
mod grouping;
mod lower;


use c_ast::RecordDefinition;
pub use duplicates::warn_duplicate_shapes;
pub use error::{InvalidDeclaration, InvalidDeclarationKind};
pub use grouping::classify;
pub use lower::{TagTable, aggregate_kind, lower_record, signature_of};
use record_shape::AnonymousGroup;

/// Lowers and classifies the members of one record
pub fn classify_record(
    record: &RecordDefinition,
    tags: &mut TagTable,
) -> Result<Vec<AnonymousGroup>, InvalidDeclaration> {
    classify(lower_record(&record.composite, tags))
}
