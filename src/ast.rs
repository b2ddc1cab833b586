use std::{collections::HashMap, fmt};

/// A location in the source text.
///
/// Rows and columns are both 1-based. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Source row, incremented on every line feed.
    pub row:    usize,
    /// Source column, reset to 1 after every line feed.
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// The operators that may appear between the two operands of a binary
/// expression.
///
/// `Sub` doubles as the only supported unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `%`, remainder with the sign of the dividend.
    Mod,
    /// `<`, yields `1` or `0`.
    Less,
    /// `>`, yields `1` or `0`.
    Greater,
}

impl BinaryOperator {
    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Less => '<',
            Self::Greater => '>',
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            '%' => Ok(Self::Mod),
            '<' => Ok(Self::Less),
            '>' => Ok(Self::Greater),
            other => Err(other),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every construct of the language is fully parenthesized or bracketed, so
/// the tree mirrors the source one to one. Each variant records the position
/// used when reporting runtime errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Constant {
        /// The literal value.
        value: i64,
        /// Position of the literal.
        pos:   Position,
    },
    /// Unary minus, `-<expr>`.
    Negate {
        /// The negated operand.
        expr: Box<Self>,
        /// Position of the `-` token.
        pos:  Position,
    },
    /// `(<left><op><right>)`.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Position of the left operand.
        pos:   Position,
    },
    /// `[<condition>]?{<if_branch>}:{<else_branch>}`.
    Conditional {
        /// Selects the if-branch when nonzero.
        condition:   Box<Self>,
        /// Evaluated when the condition is nonzero.
        if_branch:   Box<Self>,
        /// Evaluated when the condition is zero.
        else_branch: Box<Self>,
        /// Position of the condition.
        pos:         Position,
    },
    /// Reference to a parameter of the enclosing function.
    Identifier {
        /// Name of the parameter.
        name: String,
        /// Position of the identifier token.
        pos:  Position,
    },
    /// Call of a user-defined function.
    Call {
        /// Name of the called function.
        name:      String,
        /// Argument expressions, in source order.
        arguments: Vec<Self>,
        /// Position of the function name token.
        pos:       Position,
    },
}

impl Expr {
    /// Returns the position recorded for this node.
    #[must_use]
    pub const fn pos(&self) -> Position {
        match self {
            Self::Constant { pos, .. }
            | Self::Negate { pos, .. }
            | Self::Binary { pos, .. }
            | Self::Conditional { pos, .. }
            | Self::Identifier { pos, .. }
            | Self::Call { pos, .. } => *pos,
        }
    }

    /// Returns the source row recorded for this node.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.pos().row
    }
}

/// Renders the canonical text of an expression.
///
/// This is the form quoted by `RUNTIME ERROR` messages. Calls keep a comma
/// after every argument, including the last one.
///
/// # Example
/// ```
/// use parenval::ast::{BinaryOperator, Expr, Position};
///
/// let pos = Position::new(1, 1);
/// let expr = Expr::Binary { op:    BinaryOperator::Div,
///                           left:  Box::new(Expr::Identifier { name: "a".into(), pos }),
///                           right: Box::new(Expr::Call { name: "f".into(),
///                                                        arguments: vec![Expr::Constant { value: 2, pos }],
///                                                        pos }),
///                           pos };
///
/// assert_eq!(expr.to_string(), "(a/f(2,))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { value, .. } => write!(f, "{value}"),
            Self::Negate { expr, .. } => write!(f, "-{expr}"),
            Self::Binary { op, left, right, .. } => write!(f, "({left}{op}{right})"),
            Self::Conditional { condition,
                                if_branch,
                                else_branch,
                                .. } => write!(f, "[{condition}]?{{{if_branch}}}:{{{else_branch}}}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::Call { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for argument in arguments {
                    write!(f, "{argument},")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The function name.
    pub name:   String,
    /// Parameter names in declaration order. Duplicates are allowed; the last
    /// binding of a repeated name wins.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Expr,
}

impl FunctionDef {
    /// Number of declared parameters.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Mapping from function name to its definition.
///
/// A later definition of the same name replaces the earlier one.
pub type FunctionTable = HashMap<String, FunctionDef>;

/// A parsed program: the function table and the single top-level expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Every function defined before the top-level expression.
    pub functions:  FunctionTable,
    /// The expression whose value is the result of the program.
    pub expression: Expr,
}
