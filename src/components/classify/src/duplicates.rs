use diagnostics::{Diagnostics, WarningDiagnostic};
use itertools::Itertools;
use record_shape::{AnonymousGroup, Signature};

/// Warns about each tag-less aggregate whose layout repeats an earlier one in the same record.
/// Returns the number of warnings pushed.
pub fn warn_duplicate_shapes(groups: &[AnonymousGroup], diagnostics: &Diagnostics) -> usize {
    let shapes = groups
        .iter()
        .filter(|group| group.is_anonymous_type())
        .filter_map(|group| {
            group
                .signature()
                .and_then(Signature::aggregate)
                .map(|shape| (group, shape))
        })
        .collect_vec();

    let mut warned = 0;

    for (index, (group, shape)) in shapes.iter().enumerate() {
        let Some((earlier, _)) = shapes[..index]
            .iter()
            .find(|(_, earlier_shape)| earlier_shape.same_shape(shape))
        else {
            continue;
        };

        let location = earlier.first().source.location;

        diagnostics.push(WarningDiagnostic::new(
            format!(
                "anonymous {} has the same layout as the one at {}:{} but is a distinct type",
                shape.kind, location.line, location.column
            ),
            group.first().source,
        ));

        warned += 1;
    }

    warned
}
