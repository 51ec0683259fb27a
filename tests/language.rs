use std::fs;

use petit::{ErrorKind, Interpreter, Value, run_program};

fn outputs_of(src: &str) -> Vec<String> {
    match run_program(src) {
        Ok(outputs) => outputs.into_iter().map(|o| o.text).collect(),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn failure_kind(src: &str) -> ErrorKind {
    match run_program(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e.kind(),
    }
}

#[test]
fn program_without_print_produces_no_output() {
    assert_eq!(outputs_of(""), Vec::<String>::new());
    assert_eq!(outputs_of("X := 1; y := X + 2;"), Vec::<String>::new());
}

#[test]
fn assignment_and_arithmetic() {
    assert_eq!(outputs_of("X:=350; y:=X*3-25/5; afficher(y+5);"),
               vec!["1050.0"]);
}

#[test]
fn operator_precedence_and_grouping() {
    assert_eq!(outputs_of("afficher(2 + 3 * 4);"), vec!["14.0"]);
    assert_eq!(outputs_of("afficher((1 + 2) * 3);"), vec!["9.0"]);
    assert_eq!(outputs_of("afficher(10 - 4 - 3);"), vec!["3.0"]);
}

#[test]
fn unary_negation() {
    assert_eq!(outputs_of("afficher(-5 + 3);"), vec!["-2.0"]);
    assert_eq!(outputs_of("afficher(-(2 * 3));"), vec!["-6.0"]);
    assert_eq!(outputs_of("X := 4; afficher(-X);"), vec!["-4.0"]);
}

#[test]
fn string_concatenation() {
    assert_eq!(outputs_of(r#"afficher("Hello" + " " + "World");"#),
               vec!["Hello World"]);
}

#[test]
fn concatenation_renders_numbers_canonically() {
    assert_eq!(outputs_of(r#"i := 2; afficher("i = " + i);"#),
               vec!["i = 2.0"]);
    assert_eq!(outputs_of(r#"afficher(0.5 + " restant");"#),
               vec!["0.5 restant"]);
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(outputs_of("A:=[1,2,3]; afficher(A[1]);"), vec!["2.0"]);
    assert_eq!(outputs_of("A:=[1,2,3]; afficher(A[0]); afficher(A[2]);"),
               vec!["1.0", "3.0"]);
}

#[test]
fn index_may_be_any_expression() {
    assert_eq!(outputs_of("A:=[1,2,3]; i:=2; afficher(A[i]);"), vec!["3.0"]);
    assert_eq!(outputs_of("A:=[1,2,3]; afficher(A[1+1]);"), vec!["3.0"]);
}

#[test]
fn nested_arrays_and_chained_indexing() {
    assert_eq!(outputs_of("M := [[1,2],[3,4]]; afficher(M[1][0]);"),
               vec!["3.0"]);
}

#[test]
fn if_takes_exactly_one_branch() {
    let program = r#"if (5 > 3) { afficher("yes"); } else { afficher("no"); }"#;
    assert_eq!(outputs_of(program), vec!["yes"]);

    let program = r#"if (3 > 5) { afficher("yes"); } else { afficher("no"); }"#;
    assert_eq!(outputs_of(program), vec!["no"]);
}

#[test]
fn if_without_else_is_a_no_op_when_false() {
    assert_eq!(outputs_of(r#"if (1 > 2) { afficher("jamais"); }"#),
               Vec::<String>::new());
}

#[test]
fn all_comparison_operators() {
    let program = r#"
        if (2 <= 2) { afficher("a"); }
        if (3 >= 2) { afficher("b"); }
        if (2 == 2) { afficher("c"); }
        if (2 != 3) { afficher("d"); }
        if (1 < 2)  { afficher("e"); }
        if (2 > 1)  { afficher("f"); }
    "#;
    assert_eq!(outputs_of(program), vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn while_loop_counts_and_terminates() {
    assert_eq!(outputs_of("i:=0; while (i < 3) { afficher(i); i:=i+1; }"),
               vec!["0.0", "1.0", "2.0"]);
}

#[test]
fn while_loop_may_run_zero_times() {
    assert_eq!(outputs_of("i:=5; while (i < 3) { afficher(i); }"),
               Vec::<String>::new());
}

#[test]
fn nested_control_flow() {
    let program = r#"
        i := 0;
        while (i < 2) {
            j := 0;
            while (j < 2) {
                if (i == j) { afficher(i); }
                j := j + 1;
            }
            i := i + 1;
        }
    "#;
    assert_eq!(outputs_of(program), vec!["0.0", "1.0"]);
}

#[test]
fn assignment_overwrites_previous_kind() {
    assert_eq!(outputs_of(r#"X := 1; X := "texte"; afficher(X);"#),
               vec!["texte"]);
}

#[test]
fn math_functions() {
    assert_eq!(outputs_of("afficher(sqrt(16));"), vec!["4.0"]);
    assert_eq!(outputs_of("afficher(sin(0));"), vec!["0.0"]);
    assert_eq!(outputs_of("afficher(cos(0));"), vec!["1.0"]);
    assert_eq!(outputs_of("X := 2; afficher(sqrt(X * 8));"), vec!["4.0"]);
}

#[test]
fn division_by_zero_follows_ieee_semantics() {
    assert_eq!(outputs_of("afficher(1 / 0);"), vec!["inf"]);
    assert_eq!(outputs_of("afficher(0 / 0);"), vec!["NaN"]);
}

#[test]
fn variable_names_are_never_substring_matched() {
    // `compteur` contains `compte`; resolving either must not disturb the other.
    let program = r#"
        compte := 1;
        compteur := 2;
        afficher(compte + compteur);
    "#;
    assert_eq!(outputs_of(program), vec!["3.0"]);
}

#[test]
fn keyword_prefixed_identifiers_are_plain_variables() {
    assert_eq!(outputs_of("afficherTotal := 7; afficher(afficherTotal);"),
               vec!["7.0"]);
}

#[test]
fn undefined_variable_is_an_error_with_no_output() {
    assert_eq!(failure_kind("afficher(Z + 1);"), ErrorKind::UndefinedVariable);

    let (outputs, error) = Interpreter::new().run_partial("afficher(Z + 1);");
    assert!(outputs.is_empty());
    assert!(error.is_some());
}

#[test]
fn error_positions_point_into_the_source() {
    let error = run_program("afficher(Z);").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UndefinedVariable);
    assert_eq!(error.position(), Some(9));
}

#[test]
fn partial_output_survives_a_fault() {
    let mut interpreter = Interpreter::new();
    let (outputs, error) = interpreter.run_partial("afficher(1); afficher(Z);");

    let texts: Vec<_> = outputs.into_iter().map(|o| o.text).collect();
    assert_eq!(texts, vec!["1.0"]);
    assert_eq!(error.unwrap().kind(), ErrorKind::UndefinedVariable);
}

#[test]
fn environment_persists_across_runs_on_one_instance() {
    let mut interpreter = Interpreter::new();
    interpreter.run("X := 350;").unwrap();

    let outputs = interpreter.run("afficher(X);").unwrap();
    assert_eq!(outputs[0].text, "350.0");

    assert_eq!(interpreter.get_variable("X"), Some(&Value::Number(350.0)));
}

#[test]
fn separate_instances_share_nothing() {
    let mut first = Interpreter::new();
    first.run("X := 1;").unwrap();

    let mut second = Interpreter::new();
    assert_eq!(second.run("afficher(X);").unwrap_err().kind(),
               ErrorKind::UndefinedVariable);
}

#[test]
fn missing_braces_are_rejected() {
    assert_eq!(failure_kind("if (X > 1) afficher(X);"),
               ErrorKind::MalformedBlock);
    assert_eq!(failure_kind("while (1 < 2) afficher(1);"),
               ErrorKind::MalformedBlock);
}

#[test]
fn unbalanced_braces_are_rejected() {
    assert_eq!(failure_kind("while (1 < 2) { afficher(1);"),
               ErrorKind::MalformedBlock);
    assert_eq!(failure_kind("if (1 < 2) { if (1 < 2) { afficher(1); }"),
               ErrorKind::MalformedBlock);
}

#[test]
fn missing_parentheses_are_rejected() {
    assert_eq!(failure_kind("if 1 < 2 { afficher(1); }"),
               ErrorKind::MalformedBlock);
    assert_eq!(failure_kind("while 1 < 2 { afficher(1); }"),
               ErrorKind::MalformedBlock);
}

#[test]
fn condition_requires_a_comparison_operator() {
    assert_eq!(failure_kind("if (1) { afficher(1); }"),
               ErrorKind::InvalidCondition);
    assert_eq!(failure_kind("while (1 + 1) { afficher(1); }"),
               ErrorKind::InvalidCondition);
}

#[test]
fn condition_operands_must_be_numbers() {
    assert_eq!(failure_kind(r#"if ("a" < 1) { afficher(1); }"#),
               ErrorKind::TypeMismatch);
    assert_eq!(failure_kind("A := [1]; while (A == 1) { afficher(1); }"),
               ErrorKind::TypeMismatch);
}

#[test]
fn unknown_instructions_are_rejected() {
    assert_eq!(failure_kind("5 + 3;"), ErrorKind::UnknownInstruction);
    assert_eq!(failure_kind("X + 1;"), ErrorKind::UnknownInstruction);
    assert_eq!(failure_kind("afficher 1;"), ErrorKind::UnknownInstruction);
    assert_eq!(failure_kind("carre(2);"), ErrorKind::UnknownInstruction);
}

#[test]
fn lexical_errors_are_rejected() {
    assert_eq!(failure_kind("afficher(1 @ 2);"), ErrorKind::LexError);
    assert_eq!(failure_kind(r#"afficher("jamais ferme);"#),
               ErrorKind::LexError);
}

#[test]
fn arithmetic_on_text_is_a_type_mismatch() {
    assert_eq!(failure_kind(r#"afficher("a" * 2);"#), ErrorKind::TypeMismatch);
    assert_eq!(failure_kind(r#"afficher(-"a");"#), ErrorKind::TypeMismatch);
}

#[test]
fn arrays_do_not_print_or_compute() {
    assert_eq!(failure_kind("A := [1,2]; afficher(A);"),
               ErrorKind::TypeMismatch);
    assert_eq!(failure_kind("A := [1,2]; X := A + 1;"),
               ErrorKind::TypeMismatch);
    assert_eq!(failure_kind(r#"A := [1,2]; afficher("A = " + A);"#),
               ErrorKind::TypeMismatch);
}

#[test]
fn math_functions_require_numbers() {
    assert_eq!(failure_kind(r#"afficher(sqrt("seize"));"#),
               ErrorKind::TypeMismatch);
}

#[test]
fn indexing_a_non_array_is_rejected() {
    assert_eq!(failure_kind("X := 1; afficher(X[0]);"), ErrorKind::NotAnArray);
    assert_eq!(failure_kind(r#"X := "abc"; afficher(X[0]);"#),
               ErrorKind::NotAnArray);
}

#[test]
fn bad_indices_are_rejected() {
    assert_eq!(failure_kind("A := [1,2]; afficher(A[5]);"),
               ErrorKind::IndexOutOfBounds);
    assert_eq!(failure_kind("A := [1,2]; afficher(A[0-1]);"),
               ErrorKind::IndexOutOfBounds);
    assert_eq!(failure_kind("A := []; afficher(A[0]);"),
               ErrorKind::IndexOutOfBounds);
    assert_eq!(failure_kind("A := [1,2]; afficher(A[0.5]);"),
               ErrorKind::TypeMismatch);
}

#[test]
fn iteration_limit_is_disabled_by_default_but_enforceable() {
    let mut capped = Interpreter::new().with_iteration_limit(5);
    assert_eq!(capped.run("i := 0; while (i < 10) { i := i + 1; }")
                     .unwrap_err()
                     .kind(),
               ErrorKind::IterationLimitExceeded);

    // A loop that finishes under the cap is unaffected.
    let mut roomy = Interpreter::new().with_iteration_limit(100);
    assert_eq!(roomy.run("i := 0; while (i < 3) { afficher(i); i := i + 1; }")
                    .unwrap()
                    .len(),
               3);
}

#[test]
fn stray_semicolons_are_tolerated() {
    assert_eq!(outputs_of(";;X := 1;; afficher(X);;"), vec!["1.0"]);
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.petit").expect("missing file");
    assert_eq!(outputs_of(&script),
               vec!["1050.0", "somme = 6.0", "grande", "4.0"]);
}
