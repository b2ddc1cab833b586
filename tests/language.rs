use parenval::{error::InterpreterError, get_result, run};

fn assert_value(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "Script {src:?} evaluated to the wrong value"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_error(src: &str, expected: &str) {
    match get_result(src) {
        Ok(value) => panic!("Script {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), expected, "Script {src:?} failed differently"),
    }
}

fn assert_syntax_error(src: &str) {
    assert_error(src, "SYNTAX ERROR");
}

#[test]
fn basic_arithmetic() {
    assert_value("(2+2)", 4);
    assert_value("(2+((3*4)/5))", 4);
    assert_value("(7-10)", -3);
    assert_value("(6*7)", 42);
    assert_value("(17%5)", 2);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("(7/2)", 3);
    assert_value("(-7/2)", -3);
    assert_value("(7/-2)", -3);
    assert_value("(-7%2)", -1);
    assert_value("(7%-2)", 1);
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_value("(1<2)", 1);
    assert_value("(2<1)", 0);
    assert_value("(3>3)", 0);
    assert_value("(4>3)", 1);
    assert_value("[((10+20)>(20+10))]?{1}:{0}", 0);
}

#[test]
fn conditional_accepts_any_nonzero_value() {
    assert_value("[-5]?{1}:{2}", 1);
    assert_value("[0]?{1}:{2}", 2);
    assert_value("[(3%2)]?{10}:{20}", 10);
}

#[test]
fn conditional_evaluates_only_the_selected_branch() {
    assert_value("[1]?{1}:{(1/0)}", 1);
    assert_value("[0]?{(1/0)}:{7}", 7);
    assert_value("loop(x)={loop(x)}\n[0]?{loop(1)}:{3}", 3);
    assert_value("[1]?{2}:{missing(1)}", 2);
}

#[test]
fn mutual_recursion() {
    assert_value("g(x)={(f(x)+f((x/2)))}\nf(x)={[(x>1)]?{(f((x-1))+f((x-2)))}:{x}}\ng(10)",
                 60);
}

#[test]
fn negation() {
    assert_value("-5", -5);
    assert_value("f(x)={-x}\nf(5)", -5);
    assert_value("f(x)={(x+1)}\n-f(1)", -2);
    assert_value("f(x)={-x}\nf(-3)", 3);
}

#[test]
fn negating_the_minimum_value_wraps() {
    assert_value("m(x)={-x}\nm(((0-9223372036854775807)-1))", i64::MIN);
    assert_value("m(x)={-x}\n(m(((0-9223372036854775807)-1))+1)", i64::MIN + 1);
}

#[test]
fn unsupported_unary_forms_are_syntax_errors() {
    assert_syntax_error("+1");
    assert_syntax_error("*x");
    assert_syntax_error("-(1+2)");
    assert_syntax_error("--1");
}

#[test]
fn functions_see_only_their_own_parameters() {
    assert_error("g(x)={h()}\nh()={x}\ng(1)", "PARAMETER NOT FOUND x:2");
    assert_error("x\n", "PARAMETER NOT FOUND x:1");
}

#[test]
fn program_cannot_end_on_a_bare_identifier() {
    assert_syntax_error("x");
    assert_syntax_error("f(x)={x}\n-y");
    assert_error("f(x)={x}\n-y\n", "PARAMETER NOT FOUND y:2");
    assert_value("f(x)={x}\nf(4)", 4);
}

#[test]
fn arguments_are_evaluated_in_the_callers_frame() {
    assert_value("f(x)={g((x+1),x)}\ng(x,y)={(x*y)}\nf(3)", 12);
    assert_value("f(x)={g(x)}\ng(y)={(y*2)}\nf(21)", 42);
}

#[test]
fn zero_parameter_functions() {
    assert_value("c()={42}\nc()", 42);
    assert_value("c()={42}\n(c()+c())", 84);
}

#[test]
fn later_definitions_replace_earlier_ones() {
    assert_value("f(x)={1}\nf(x)={2}\nf(0)", 2);
    assert_value("f(x)={x}\nf(x,y)={(x+y)}\nf(1,2)", 3);
    assert_error("f(x,y)={(x+y)}\nf(x)={x}\nf(1,2)", "ARGUMENT NUMBER MISMATCH f:3");
}

#[test]
fn repeated_parameter_binds_the_last_argument() {
    assert_value("f(a,a)={a}\nf(1,2)", 2);
}

#[test]
fn argument_lists_tolerate_missing_and_trailing_commas() {
    assert_value("f(a b)={(a-b)}\nf(5 3)", 2);
    assert_value("f(a,b,)={(a-b)}\nf(5,3,)", 2);
    assert_syntax_error("f(x)={x}\nf(,1)");
    assert_syntax_error("f(,x)={x}\nf(1)");
}

#[test]
fn nested_parentheses_in_calls() {
    assert_value("f(x)={x}\nf((1+2))", 3);
    assert_value("f(x)={x}\nf(f(f((2*3))))", 6);
}

#[test]
fn error_lines() {
    assert_error("f(x)={y}\nf(10)", "PARAMETER NOT FOUND y:1");
    assert_error("g(x)={f(x)}\ng(10)", "FUNCTION NOT FOUND f:1");
    assert_error("g(x)={(x+1)}\ng(10,20)", "ARGUMENT NUMBER MISMATCH g:2");
    assert_error("g(a,b)={(a/b)}\ng(10,0)", "RUNTIME ERROR (a/b):1");
}

#[test]
fn arity_is_checked_before_arguments_are_evaluated() {
    assert_error("g(x)={x}\ng(1,(1/0))", "ARGUMENT NUMBER MISMATCH g:2");
    assert_error("g(x)={x}\ng(y)", "PARAMETER NOT FOUND y:2");
}

#[test]
fn operands_are_evaluated_left_first() {
    assert_error("(y+z)", "PARAMETER NOT FOUND y:1");
    assert_error("(1+(y+z))", "PARAMETER NOT FOUND y:1");
}

#[test]
fn lookup_errors_pass_through_binary_expressions() {
    assert_error("(f(1)+1)", "FUNCTION NOT FOUND f:1");
    assert_error("f(x)={(x+y)}\n(1+f(2))", "PARAMETER NOT FOUND y:1");
}

#[test]
fn arithmetic_errors_quote_the_innermost_failing_expression() {
    assert_error("((1/0)+1)", "RUNTIME ERROR (1/0):1");
    assert_error("h(a)={(a%(a-a))}\nh(4)", "RUNTIME ERROR (a%(a-a)):1");
    assert_error("inv(n)={(1000/n)}\n\
                  (1+inv(0))",
                 "RUNTIME ERROR (1000/n):1");
}

#[test]
fn runtime_error_renders_nested_nodes_canonically() {
    assert_error("k(x)={0}\n(5/[k(1)]?{k(0)}:{-k(2,)})",
                 "RUNTIME ERROR (5/[k(1,)]?{k(0,)}:{-k(2,)}):2");
}

#[test]
fn overflow_is_a_runtime_error() {
    assert_error("(9223372036854775807+1)", "RUNTIME ERROR (9223372036854775807+1):1");
    assert_error("((0-9223372036854775807)-2)",
                 "RUNTIME ERROR ((0-9223372036854775807)-2):1");
    assert_value("(9223372036854775807*1)", i64::MAX);
}

#[test]
fn oversized_literal_is_a_syntax_error() {
    assert_syntax_error("99999999999999999999");
    assert_syntax_error("(1+9223372036854775808)");
}

#[test]
fn malformed_programs_are_syntax_errors() {
    assert_syntax_error("1 + 2 + 3 + 4 + 5");
    assert_syntax_error("");
    assert_syntax_error("\n\n");
    assert_syntax_error("(1+1) 2");
    assert_syntax_error("(1+1");
    assert_syntax_error("(1 1)");
    assert_syntax_error("[1]?{1}");
    assert_syntax_error("[1]{1}:{2}");
    assert_syntax_error("f1");
}

#[test]
fn definitions_need_a_line_end_and_a_following_expression() {
    assert_syntax_error("f(x)={x}");
    assert_syntax_error("f(x)={x}\n");
    assert_syntax_error("f(x)={x}\n\ng(x)={x}\nf(1)");
    assert_syntax_error("f(x)=x\nf(1)");
}

#[test]
fn whitespace_and_unknown_characters_are_ignored() {
    assert_value(" ( 1 + 2 ) ", 3);
    assert_value("(1+@2)#", 3);
    assert_value("\t[ (2 > 1) ] ? { 10 } : { 20 }", 10);
    assert_value("f(x)={x}\r\nf(3)\r\n", 3);
    assert_value("(1+1)\n\n\n", 2);
}

#[test]
fn identifiers_may_contain_underscores() {
    assert_value("my_fn(a_b,_)={(a_b*_)}\nmy_fn(4,5)", 20);
}

#[test]
fn repeated_runs_are_identical() {
    let sources = ["g(x)={(f(x)+f((x/2)))}\nf(x)={[(x>1)]?{(f((x-1))+f((x-2)))}:{x}}\ng(10)",
                   "g(a,b)={(a/b)}\ng(10,0)",
                   "1 + 2"];
    for src in sources {
        assert_eq!(get_result(src), get_result(src));
        assert_eq!(run(src), run(src));
    }
}

#[test]
fn syntax_errors_keep_their_cause() {
    let err = get_result("(1+1) 2").unwrap_err();
    assert!(err.is_syntax_error());
    let InterpreterError::Parse(cause) = err else {
        panic!("expected a parse error");
    };
    assert_eq!(cause.pos().map(|p| (p.row, p.column)), Some((1, 8)));
}
