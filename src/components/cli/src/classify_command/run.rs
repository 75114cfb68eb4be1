use build_c_ast::{parse, parse_recovering};
use build_c_token::lex_c_code;
use classify::{TagTable, aggregate_kind, classify_record, lower_record, warn_duplicate_shapes};
use emit_groups::{RecordHead, emit_record};
use itertools::Itertools;
use session::{EmitKind, Session};
use source_files::SourceFileKey;

/// Classifies every record of an already loaded file and renders the result.
/// Invalid records are reported and skipped unless the session is strict.
pub fn classify_file(session: &Session, key: SourceFileKey) -> Result<String, ()> {
    let content = session.source_files.get(key).content();
    let tokens = lex_c_code(content, key);

    let file = if session.options.strict {
        session.unerror(parse(tokens))?
    } else {
        parse_recovering(tokens, session.diagnostics)
    };

    let mut tags = TagTable::from_file(&file);
    let mut lines = Vec::new();

    for record in file.records.iter() {
        let kind = aggregate_kind(record.composite.kind);
        let heading = format!("{} {}:", kind, record.name().unwrap_or("<anonymous>"));

        if session.options.emit.is_members() {
            lines.push(heading);
            lines.extend(
                lower_record(&record.composite, &mut tags)
                    .iter()
                    .map(|member| format!("  {}", member)),
            );
            continue;
        }

        let groups = match classify_record(record, &mut tags) {
            Ok(groups) => groups,
            Err(error) if session.options.strict => return session.unerror(Err(error)),
            Err(error) => {
                session.report(error);
                continue;
            }
        };

        if session.options.warn_duplicate_shapes {
            warn_duplicate_shapes(&groups, session.diagnostics);
        }

        match session.options.emit {
            EmitKind::Groups => {
                lines.push(heading);

                for group in groups.iter() {
                    let names = group
                        .names()
                        .map(|name| if name.is_empty() { "<anonymous>" } else { name })
                        .join(", ");

                    lines.push(format!("  {}: {}", group.key, names));
                }
            }
            EmitKind::C => {
                let head = RecordHead {
                    kind,
                    tag: record.composite.name.as_deref(),
                    typedef_name: record.typedef_names.first().map(String::as_str),
                };
                lines.push(emit_record(&head, &groups));
            }
            EmitKind::Members => (),
        }
    }

    Ok(lines.iter().map(|line| format!("{}\n", line)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagnostics::{DiagnosticFlags, Diagnostics};
    use indoc::indoc;
    use session::ClassifyOptions;
    use source_files::SourceFiles;

    const RECORDS: &str = indoc! {"
        #define IMGUI_DISABLE_OBSOLETE_FUNCTIONS

        struct Broken {
            union U { int a; } u1;
            struct U u2;
        };

        struct My_Struct {
            int test;
            union { int a1; };
            union T { char *h; } t1;
            union T t2;
            union { float bb; } z1, z2;
            union { float bb; } z3;
        };
    "};

    fn run(options: ClassifyOptions) -> (Result<String, ()>, usize, usize) {
        run_on(RECORDS, options)
    }

    fn run_on(content: &str, options: ClassifyOptions) -> (Result<String, ()>, usize, usize) {
        let mut source_files = SourceFiles::new();
        let key = source_files.add("records.h".into(), content.into());
        let diagnostics = Diagnostics::new(
            &source_files,
            DiagnosticFlags {
                print_without_collecting: false,
                project_root: None,
            },
        );

        let session = Session::new(options, &source_files, &diagnostics);
        let output = classify_file(&session, key);
        (output, diagnostics.num_errors(), diagnostics.num_collected())
    }

    #[test]
    fn skips_invalid_records_by_default() {
        let (output, errors, collected) = run(ClassifyOptions::default());

        assert_eq!(
            output.unwrap(),
            indoc! {"
                struct My_Struct:
                  single: test
                  statement: <anonymous>
                  tag T: t1, t2
                  statement: z1, z2
                  statement: z3
            "}
        );
        assert_eq!(errors, 1);
        // The error plus the repeated `{ float bb; }` layout
        assert_eq!(collected, 2);
    }

    #[test]
    fn strict_stops_at_first_invalid_record() {
        let (output, errors, _) = run(ClassifyOptions {
            strict: true,
            ..Default::default()
        });

        assert!(output.is_err());
        assert_eq!(errors, 0);
    }

    #[test]
    fn emits_c_without_duplicate_warnings() {
        let (output, errors, collected) = run(ClassifyOptions {
            emit: EmitKind::C,
            warn_duplicate_shapes: false,
            strict: false,
        });

        assert_eq!(
            output.unwrap(),
            indoc! {"
                struct My_Struct {
                    int test;
                    union { int a1; };
                    union T { char *h; } t1, t2;
                    union { float bb; } z1, z2;
                    union { float bb; } z3;
                };
            "}
        );
        assert_eq!((errors, collected), (1, 1));
    }

    #[test]
    fn lists_members() {
        let (output, _, _) = run(ClassifyOptions {
            emit: EmitKind::Members,
            ..Default::default()
        });

        let output = output.unwrap();
        assert!(output.contains("struct Broken:\n  #0 u1 (statement 0) tag=union U signature={int a;}\n"));
        assert!(output.contains("  #1 <anonymous> (statement 1) signature={int a1;}\n"));
    }

    const WITH_CONSTRUCTOR: &str = indoc! {"
        struct ImVec2 {
            float x, y;
            ImVec2() : x(0), y(0) {}
        };

        typedef struct {
            union { float bb; } z1, z2;
            int between;
        } Pair;
    "};

    #[test]
    fn unparsable_record_is_skipped_by_default() {
        let (output, errors, collected) = run_on(
            WITH_CONSTRUCTOR,
            ClassifyOptions {
                emit: EmitKind::C,
                ..Default::default()
            },
        );

        assert_eq!(
            output.unwrap(),
            indoc! {"
                typedef struct {
                    union { float bb; } z1, z2;
                    int between;
                } Pair;
            "}
        );
        assert_eq!((errors, collected), (1, 1));
    }

    #[test]
    fn unparsable_record_fails_strict_run() {
        let (output, errors, collected) = run_on(
            WITH_CONSTRUCTOR,
            ClassifyOptions {
                strict: true,
                ..Default::default()
            },
        );

        assert!(output.is_err());
        assert_eq!((errors, collected), (0, 0));
    }
}
