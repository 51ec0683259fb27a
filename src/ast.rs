/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers everything that can appear on the right-hand side of an
/// assignment or inside `afficher(...)`: literals, variables, array literals,
/// array indexing, arithmetic, and math function calls. Each variant carries
/// the byte offset of the construct in the source text so that evaluation
/// errors can point back at it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `350` or `2.5`.
    NumberLiteral {
        /// The literal value.
        value:    f64,
        /// Byte offset in the source code.
        position: usize,
    },
    /// A double-quoted string literal, stored without its quotes.
    StringLiteral {
        /// The literal text.
        value:    String,
        /// Byte offset in the source code.
        position: usize,
    },
    /// An array literal such as `[1, 2, 3]`.
    ArrayLiteral {
        /// Element expressions, in order.
        elements: Vec<Self>,
        /// Byte offset in the source code.
        position: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Byte offset in the source code.
        position: usize,
    },
    /// An array indexing expression such as `A[1]` or `A[i+1]`.
    Index {
        /// The expression producing the array.
        target:   Box<Self>,
        /// The expression producing the index.
        index:    Box<Self>,
        /// Byte offset in the source code.
        position: usize,
    },
    /// A unary operation, i.e. numeric negation.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source code.
        position: usize,
    },
    /// A binary arithmetic (or string concatenation) operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset in the source code.
        position: usize,
    },
    /// A math function call such as `sqrt(X)`.
    Call {
        /// The builtin function being called.
        function: MathFunction,
        /// The single argument expression.
        argument: Box<Self>,
        /// Byte offset in the source code.
        position: usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use petit::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 7, };
    ///
    /// assert_eq!(expr.position(), 7);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NumberLiteral { position, .. }
            | Self::StringLiteral { position, .. }
            | Self::ArrayLiteral { position, .. }
            | Self::Variable { position, .. }
            | Self::Index { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }
}

/// The condition of an `if` or `while` statement.
///
/// Conditions are not general expressions in this language: a header contains
/// exactly one comparison between two arithmetic expressions, and that single
/// comparison is what reduces to a boolean. A header without a comparison
/// operator is rejected at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Left-hand operand.
    pub left:     Expr,
    /// The comparison operator between the operands.
    pub op:       ComparisonOperator,
    /// Right-hand operand.
    pub right:    Expr,
    /// Byte offset of the comparison in the source code.
    pub position: usize,
}

/// Represents a single statement of a program.
///
/// Programs are semicolon-separated sequences of statements; `if`/`while`
/// bodies are statement lists parsed once and executed as many times as
/// control flow demands.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment, `name := expression`.
    Assign {
        /// The name being bound.
        name:     String,
        /// The value expression.
        value:    Expr,
        /// Byte offset in the source code.
        position: usize,
    },
    /// A print statement, `afficher(expression)`.
    Print {
        /// The expression whose value is printed.
        value:    Expr,
        /// Byte offset in the source code.
        position: usize,
    },
    /// A conditional, `if (condition) { ... } else { ... }`.
    If {
        /// The branch condition.
        condition:  Condition,
        /// Statements executed when the condition holds.
        then_block: Vec<Self>,
        /// Statements executed otherwise, when an `else` block is present.
        else_block: Option<Vec<Self>>,
        /// Byte offset in the source code.
        position:   usize,
    },
    /// A loop, `while (condition) { ... }`.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Condition,
        /// The loop body.
        body:      Vec<Self>,
        /// Byte offset in the source code.
        position:  usize,
    },
}

/// Represents a binary arithmetic operator.
///
/// `Add` doubles as string concatenation when either operand is text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// Represents a comparison operator inside an `if`/`while` condition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// The builtin math functions callable from expressions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathFunction {
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `sqrt(x)`
    Sqrt,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for MathFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
        };
        write!(f, "{name}")
    }
}
