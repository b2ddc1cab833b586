use parenval::{
    ast::{BinaryOperator, Expr, Position, Program},
    error::ParseError,
    interpreter::{lexer::tokenize, parser::program::parse_program},
};

fn parse(src: &str) -> Result<Program, ParseError> {
    parse_program(&tokenize(src)?)
}

fn parse_ok(src: &str) -> Program {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

#[test]
fn binary_node_takes_the_position_of_its_left_operand() {
    let program = parse_ok("(1+2)");
    let Expr::Binary { op, left, right, pos } = program.expression else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(*left, Expr::Constant { value: 1, pos: Position::new(1, 3) });
    assert_eq!(*right, Expr::Constant { value: 2, pos: Position::new(1, 5) });
    assert_eq!(pos, Position::new(1, 3));
}

#[test]
fn conditional_node_takes_the_position_of_its_condition() {
    let program = parse_ok("[x]?{1}:{0}");
    assert!(matches!(program.expression, Expr::Conditional { .. }));
    assert_eq!(program.expression.pos(), Position::new(1, 3));
}

#[test]
fn negation_is_positioned_at_the_minus_sign() {
    let program = parse_ok("  -5");
    assert_eq!(program.expression,
               Expr::Negate { expr: Box::new(Expr::Constant { value: 5,
                                                              pos:   Position::new(1, 5), }),
                              pos:  Position::new(1, 3), });
}

#[test]
fn call_and_identifier_nodes() {
    let program = parse_ok("f(x)={x}\nf(y,(1+2))");
    let Expr::Call { name, arguments, pos } = program.expression else {
        panic!("expected a call");
    };
    assert_eq!(name, "f");
    assert_eq!(pos, Position::new(2, 2));
    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments[0],
               Expr::Identifier { name: "y".into(),
                                  pos:  Position::new(2, 4), });
}

#[test]
fn function_table_holds_every_definition() {
    let program = parse_ok("add(a,b)={(a+b)}\nzero()={0}\nadd(zero(),1)");
    assert_eq!(program.functions.len(), 2);

    let add = &program.functions["add"];
    assert_eq!(add.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(add.body.to_string(), "(a+b)");
    assert_eq!(add.arity(), 2);
    assert_eq!(program.functions["zero"].arity(), 0);
    assert_eq!(program.expression.to_string(), "add(zero(),1,)");
}

#[test]
fn redefinition_replaces_the_earlier_function() {
    let program = parse_ok("f(x)={1}\nf(y,z)={2}\nf(0,0)");
    assert_eq!(program.functions.len(), 1);
    assert_eq!(program.functions["f"].params, vec!["y".to_string(), "z".to_string()]);
    assert_eq!(program.functions["f"].body.to_string(), "2");
}

#[test]
fn top_level_call_is_not_mistaken_for_a_definition() {
    let program = parse_ok("f(x)={x}\nf((f(1)+2))\n");
    assert_eq!(program.functions.len(), 1);
    assert_eq!(program.expression.to_string(), "f((f(1,)+2),)");
}

#[test]
fn canonical_rendering_round_trips() {
    let src = "[(a<-b)]?{-f(a,(b%2),)}:{(1/c)}";
    let program = parse_ok(src);
    assert_eq!(program.expression.to_string(), src);
    assert_eq!(parse_ok(&program.expression.to_string()), program);
}

#[test]
fn unsupported_unary_operator() {
    assert!(matches!(parse("*1"),
                     Err(ParseError::UnsupportedUnaryOperator { op: '*', .. })));
}

#[test]
fn nothing_parsed() {
    assert!(matches!(parse(")"), Err(ParseError::NothingParsed { .. })));
    assert!(matches!(parse("\n"), Err(ParseError::NothingParsed { .. })));
}

#[test]
fn trailing_tokens() {
    assert!(matches!(parse("(1+1)\n2"),
                     Err(ParseError::UnexpectedTrailingTokens { pos, .. }) if pos == Position::new(2, 2)));
}

#[test]
fn trailing_identifier_needs_a_following_token() {
    assert!(matches!(parse("x"), Err(ParseError::UnexpectedEndOfInput { pos: Some(_) })));
    assert!(matches!(parse("-y"), Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse_ok("y\n").expression, Expr::Identifier { .. }));
}

#[test]
fn unexpected_end_of_input() {
    assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput { pos: None }));
    assert!(matches!(parse("(1+"), Err(ParseError::UnexpectedEndOfInput { pos: Some(_) })));
    assert!(matches!(parse("f(1"), Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn missing_delimiters() {
    assert!(matches!(parse("[1]?{1}:2"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("f(x)={x}g(1)"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("f(1)=(1+1)\nf(1)"),
                     Err(ParseError::UnexpectedToken { .. })));
}
