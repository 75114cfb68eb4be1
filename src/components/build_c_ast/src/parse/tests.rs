use super::{ParseErrorKind, parse, parse_recovering};
use build_c_token::lex_c_code;
use c_ast::{
    CompositeKind, DeclaratorKind, File, MemberDeclaration, MemberDeclarator, TypeSpecifierKind,
};
use diagnostics::{DiagnosticFlags, Diagnostics};
use indoc::indoc;
use source_files::{Location, SourceFiles};

fn parse_str(content: &str) -> File {
    parse(lex_c_code(content, SourceFiles::INTERNAL_KEY)).expect("parses")
}

fn member_texts(file: &File, record: usize) -> Vec<String> {
    file.records[record]
        .composite
        .members
        .as_ref()
        .expect("record has a body")
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn parses_anonymous_union_fixture() {
    let file = parse_str(indoc! {"
        struct My_Struct {
            int test;

            union {
                int a1;
            };

            union T {
                char *h;
            } t1;

            union T t2;

            union {
                float bb;
            } z1, z2;
        };
    "});

    assert_eq!(file.records.len(), 1);
    assert_eq!(file.records[0].name(), Some("My_Struct"));
    assert_eq!(
        member_texts(&file, 0),
        vec![
            "int test;",
            "union { int a1; };",
            "union T { char *h; } t1;",
            "union T t2;",
            "union { float bb; } z1, z2;",
        ]
    );
}

#[test]
fn skips_everything_that_is_not_a_record() {
    let file = parse_str(indoc! {r#"
        #define IMGUI_USE_BGRA_PACKED_COLOR
        #include "imgui.h"

        namespace Preprocessor_Defines {
            const bool USE_BGRA_PACKED_COLOR =
                #ifdef IMGUI_USE_BGRA_PACKED_COLOR
                    true;
                #else
                    false;
                #endif
        }

        typedef unsigned int ImGuiID;
        struct ImGuiContext;
        enum ImGuiDir { ImGuiDir_Left = 0, ImGuiDir_Right = 1 };
        static int counter(void) { struct Hidden { int x; } h; return h.x; }

        extern "C" {
            typedef struct { float x, y; } ImVec2;
        }
    "#});

    assert_eq!(file.records.len(), 1);
    assert_eq!(file.records[0].name(), Some("ImVec2"));
    assert!(file.records[0].composite.is_anonymous());
    assert_eq!(member_texts(&file, 0), vec!["float x, y;"]);
}

#[test]
fn parses_declarator_shapes() {
    let file = parse_str(indoc! {"
        typedef struct ImDrawCmd {
            unsigned int flags : 3, : 0;
            void (*UserCallback)(const struct ImDrawList *parent, int idx);
            char TempBuffer[1024*3+1];
            const char *const *names;
            enum Kind { A, B } kind;
            _Static_assert(sizeof(int) == 4, \"int\" \" size\");
        } ImDrawCmd, *ImDrawCmdPtr;
    "});

    let record = &file.records[0];
    assert_eq!(record.typedef_names, vec!["ImDrawCmd".to_string()]);

    assert_eq!(
        member_texts(&file, 0),
        vec![
            "unsigned int flags : 3, : 0;",
            "void (*UserCallback)(const struct ImDrawList *parent, int idx);",
            "char TempBuffer[1024*3+1];",
            "const char *const *names;",
            "enum Kind { A, B } kind;",
            "static_assert(sizeof(int) == 4, \"int size\");",
        ]
    );

    let members = record.composite.members.as_ref().unwrap();
    let MemberDeclaration::Member(callback) = &members[1] else {
        panic!("expected member");
    };
    let MemberDeclarator::Declarator(declarator) = &callback.member_declarators[0] else {
        panic!("expected declarator");
    };
    assert!(matches!(declarator.kind, DeclaratorKind::Function(..)));
    assert_eq!(declarator.name(), "UserCallback");
}

#[test]
fn nested_composites_keep_their_bodies() {
    let file = parse_str("union Outer { struct { int x; union { char c; } inner; }; long l; };");
    let members = file.records[0].composite.members.as_ref().unwrap();

    let MemberDeclaration::Member(first) = &members[0] else {
        panic!("expected member");
    };

    let composite = first.specifier_qualifiers.composite().unwrap();
    assert_eq!(composite.kind, CompositeKind::Struct);
    assert!(composite.is_anonymous());
    assert!(first.member_declarators.is_empty());
    assert_eq!(file.records[0].composite.kind, CompositeKind::Union);
}

#[test]
fn typedef_names_are_type_specifiers() {
    let file = parse_str("struct S { ImVec2 pos; const ImU32 *col; unsigned flags; };");
    let members = file.records[0].composite.members.as_ref().unwrap();

    let MemberDeclaration::Member(pos) = &members[0] else {
        panic!("expected member");
    };

    assert!(matches!(
        &pos.specifier_qualifiers.type_specifier_qualifiers[0],
        c_ast::TypeSpecifierQualifier::TypeSpecifier(specifier)
            if matches!(&specifier.kind, TypeSpecifierKind::TypedefName(name) if name == "ImVec2")
    ));
    assert_eq!(
        member_texts(&file, 0),
        vec!["ImVec2 pos;", "const ImU32 *col;", "unsigned flags;"]
    );
}

#[test]
fn reports_missing_semicolon() {
    let error = parse(lex_c_code(
        "struct S {\n    int a\n    int b;\n};",
        SourceFiles::INTERNAL_KEY,
    ))
    .unwrap_err();

    assert!(matches!(error.kind, ParseErrorKind::ExpectedSemicolon(_)));
    assert_eq!(error.source.location, Location::new(3, 5));
    assert_eq!(error.to_string(), "Expected ';', got 'int' keyword at 3:5");
}

#[test]
fn reports_unterminated_record() {
    let error = parse(lex_c_code("struct S { int a;", SourceFiles::INTERNAL_KEY)).unwrap_err();
    assert!(matches!(error.kind, ParseErrorKind::UnterminatedBlock));
    assert_eq!(error.source.location, Location::new(1, 1));
}

#[test]
fn rejects_storage_class_on_member() {
    let error =
        parse(lex_c_code("struct S { static int a; };", SourceFiles::INTERNAL_KEY)).unwrap_err();
    assert_eq!(error.kind.to_string(), "Storage classes not supported here");
}

/// Parses while collecting diagnostics, returning the record names and rendered errors
fn parse_leniently(content: &str) -> (Vec<String>, Vec<String>) {
    let mut source_files = SourceFiles::new();
    let key = source_files.add("header.h".into(), content.into());
    let diagnostics = Diagnostics::new(
        &source_files,
        DiagnosticFlags {
            print_without_collecting: false,
            project_root: None,
        },
    );

    let file = parse_recovering(lex_c_code(content, key), &diagnostics);
    assert_eq!(diagnostics.num_errors(), diagnostics.num_collected());

    let names = file
        .records
        .iter()
        .map(|record| record.name().unwrap_or_default().to_string())
        .collect();

    (names, diagnostics.render_all())
}

#[test]
fn good_records_survive_a_bad_one() {
    let (names, errors) = parse_leniently(indoc! {"
        struct Good { int a; };
        struct Bad { int x __attribute__((aligned(8))); };
        struct Good2 { int b; };
    "});

    assert_eq!(names, vec!["Good", "Good2"]);
    assert_eq!(
        errors,
        vec!["header.h:2:20: error: Expected ';', got identifier '__attribute__'"]
    );
}

#[test]
fn skips_records_with_member_functions() {
    let (names, errors) = parse_leniently(indoc! {"
        struct ImVec2 {
            float x, y;
            ImVec2() : x(0), y(0) {}
            ImVec2(float _x, float _y) : x(_x), y(_y) {}
        };

        typedef struct { int id; } Handle;
    "});

    assert_eq!(names, vec!["Handle"]);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].ends_with("Expected member declarator, got ')'"));
}

#[test]
fn reports_each_invalid_token_once() {
    let (names, errors) = parse_leniently(indoc! {"
        struct A { int a; };
        `
        struct B { int b @; };
        struct C { int c; };
    "});

    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(errors.len(), 2);
}
