use std::fs;

use polycalc::interpret;

fn results(src: &str) -> Vec<i64> {
    match interpret(src) {
        Ok(values) => values,
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn error_message(src: &str) -> String {
    match interpret(src) {
        Ok(values) => panic!("Program succeeded with {values:?} but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

fn assert_failure(src: &str) {
    if interpret(src).is_ok() {
        panic!("Program succeeded but was expected to fail")
    }
}

#[test]
fn evaluates_a_single_polynomial() {
    assert_eq!(results("POLY F(X) = X^2 + 3; START INPUT A; F(A); 5"), vec![28]);
}

#[test]
fn implicit_parameter_is_x() {
    assert_eq!(results("POLY F = x^2 + 1; START F(4); 7"), vec![17]);
}

#[test]
fn multiple_parameters_bind_positionally() {
    assert_eq!(results("POLY G(X, Y) = X^2 + Y; START INPUT A; INPUT B; G(A, B); 3 4"),
               vec![13]);
}

#[test]
fn coefficients_and_signs() {
    assert_eq!(results("POLY F(X) = 2X^2 - 3X + 5; START F(3); 1"), vec![14]);
    assert_eq!(results("POLY F(X) = X - 7; START F(2); 1"), vec![-5]);
    assert_eq!(results("POLY F(X) = 12; START F(0); 9"), vec![12]);
}

#[test]
fn multi_monomial_terms() {
    assert_eq!(results("POLY H(X, Y) = 2XY^2 - XY; START H(2, 3); 1"), vec![30]);
}

#[test]
fn exponent_defaults_to_one() {
    assert_eq!(results("POLY F(X) = 4X; START F(6); 1"), vec![24]);
}

#[test]
fn duplicate_parameter_name_resolves_to_last_position() {
    assert_eq!(results("POLY F(X, X) = X; START F(1, 2); 1"), vec![2]);
}

#[test]
fn nested_call_contributes_full_sum() {
    // G(3) is 7, not just its leading term; F then sees 7 at position 0.
    assert_eq!(results("POLY F(X) = X + 1; POLY G(X) = 2X + 1; START F(G(3), 5); 1 1"),
               vec![8]);
}

#[test]
fn nested_arguments_bind_positionally() {
    assert_eq!(results("POLY F(X) = X + 1; POLY G(X, Y) = XY; START G(F(2), 10, 20); 1 1"),
               vec![30]);
}

#[test]
fn nested_argument_is_excluded_from_arity() {
    assert_eq!(error_message("POLY F(X) = X; POLY G(X) = X; START F(G(1)); 1 1"),
               "Error on line 1: wrong number of arguments.");
}

#[test]
fn duplicate_declaration_reports_both_lines() {
    assert_eq!(error_message("POLY F(X, Y) = X + Y;\nPOLY F(X) = X;\nSTART\nF(1, 2);\n1"),
               "Error on lines 1 2: polynomial is declared more than once.");
}

#[test]
fn undeclared_polynomial_is_reported() {
    assert_eq!(error_message("POLY F(X) = X; START G(1); 1"),
               "Error on line 1: call to an undeclared polynomial.");
}

#[test]
fn undeclared_parameter_is_reported() {
    assert_eq!(error_message("POLY F(X) = X + Y; START F(1); 1"),
               "Error on line 1: identifier is not a parameter of the enclosing polynomial.");
}

#[test]
fn undeclared_variable_is_reported() {
    assert_eq!(error_message("POLY F(X) = X; START F(A); 1"),
               "Error on line 1: variable was never the target of an INPUT statement.");
}

#[test]
fn arity_mismatch_is_reported() {
    assert_eq!(error_message("POLY F(X, Y) = X + Y; START F(1); 1"),
               "Error on line 1: wrong number of arguments.");
}

#[test]
fn arity_mismatch_never_displaces_another_kind() {
    // The undeclared parameter Z is recorded first; the arity mismatch on the
    // same call is dropped entirely.
    assert_eq!(error_message("POLY F(X) = X + Z; START F(1, 2); 1"),
               "Error on line 1: identifier is not a parameter of the enclosing polynomial.");
}

#[test]
fn later_kinds_displace_arity_and_lines_accumulate() {
    assert_eq!(error_message("POLY F(X, Y) = X + Y;\nSTART\nF(1);\nG(1);\n1"),
               "Error on lines 3 4: call to an undeclared polynomial.");
}

#[test]
fn input_slots_are_assigned_on_first_use() {
    assert_eq!(results("POLY F(X) = X; START INPUT A; INPUT B; INPUT A; F(A); F(B); 1 2 3"),
               vec![3, 2]);
}

#[test]
fn interleaved_input_and_evaluation() {
    assert_eq!(results("POLY F(X) = X; POLY G(X) = 2X; START INPUT A; F(A); INPUT B; G(B); 10 20"),
               vec![10, 40]);
}

#[test]
fn input_tail_is_reentered_on_demand() {
    // Two declarations batch the first two literals; the third INPUT pulls
    // the rest in.
    assert_eq!(results("POLY F(X) = X;\nPOLY G(X, Y) = X + Y;\nSTART\nINPUT A;\nINPUT B;\nINPUT C;\nG(B, C);\n1 2 3"),
               vec![5]);
}

#[test]
fn running_out_of_input_values_is_an_error() {
    assert_failure("POLY F(X) = X; START INPUT A; INPUT B; F(B); 1");
}

#[test]
fn statement_section_must_end_in_a_literal() {
    assert_failure("POLY F(X) = X; START F(1);");
}

#[test]
fn garbage_in_the_input_tail_is_an_error() {
    assert_failure("POLY F(X) = X; START F(1); 1 +");
}

#[test]
fn syntax_errors_abort_the_run() {
    assert_failure("POLY F(X) = ; START F(1); 1");
    assert_failure("POLY F X = X; START F(1); 1");
    assert_failure("F(X) = X; START F(1); 1");
    assert_failure("poly F(X) = X; START F(1); 1");
    assert_failure("POLY F(X) = X; START F(); 1");
}

#[test]
fn overflow_is_an_error() {
    assert_failure("POLY F(X) = X^2; START F(3037000500); 1");
}

#[test]
fn repeated_runs_are_identical() {
    let clean = "POLY F(X) = 2X^2 - 3X + 5; START F(3); 1";
    assert_eq!(results(clean), results(clean));

    let broken = "POLY F(X, Y) = X + Y;\nPOLY F(X) = X;\nSTART\nF(1, 2);\n1";
    assert_eq!(error_message(broken), error_message(broken));
}

#[test]
fn example_program_works() {
    let contents = fs::read_to_string("tests/example.poly").expect("missing file");
    assert_eq!(results(&contents), vec![52, 21, 69]);
}
