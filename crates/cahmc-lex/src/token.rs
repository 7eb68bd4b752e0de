//! Token definitions.
//!
//! Tokens are a closed sum type: each variant owns the kind enum that is
//! valid for it, so a keyword token can never carry an operator tag. The
//! scanner is the only producer; tokens are immutable once built and are
//! owned by the sequence returned from one scan.

use std::fmt;

use cahmc_util::Location;

/// Tags for the reserved words of Cahmann Script.
///
/// Several keywords have two surface spellings (`import`/`use`,
/// `local`/`module`); both spellings map to the same tag. Lookup is
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    /// `option` - interpreter option statement, must precede all others.
    Option,
    /// `import` / `use` - pulls in another module file.
    Import,
    /// `local` / `module` - marks the following object script-local.
    Local,
    /// `inline` - marks the following function inline.
    Inline,
    /// `func` - begins a function object.
    Function,
    /// `ret` - the preceding function head declares a return type.
    FunctionReturnType,
    /// `noret` - the preceding function head has no return type.
    FunctionNoReturnType,
    /// `return` - terminates a function, optionally yielding a value.
    FunctionReturnValue,
    /// `endfunc` - ends a function object.
    FunctionEnd,
    /// `if` - begins a conditional.
    ConditionalBegin,
    /// `then` - marks a single-line conditional.
    ConditionalInline,
    /// `elseif` - another branch with its own condition.
    ConditionalBranchIf,
    /// `else` - the fallback branch.
    ConditionalBranch,
    /// `endif` - ends a conditional.
    ConditionalEnd,
    /// `while` - begins a head-controlled conditional loop.
    ConditionalLoopBegin,
    /// `do` - ends a loop head.
    EndLoopHead,
    /// `endwhile` - ends a conditional loop.
    ConditionalLoopEnd,
    /// `repeat` - begins a foot-controlled conditional loop.
    InvertedConditionalLoopBegin,
    /// `until` - closes a foot-controlled loop with its condition.
    InvertedConditionalLoopEnd,
    /// `for` - begins a counter loop with an explicit step expression.
    ControlledCounterLoopBegin,
    /// `to` - the value a counter loop counts to.
    ControlledCounterLoopCountTo,
    /// `comp` - the expression that advances the counter variable.
    ControlledCounterLoopCompute,
    /// `endfor` - ends a controlled counter loop.
    ControlledCounterLoopEnd,
    /// `count` - begins an automatic counter loop.
    CounterLoopBegin,
    /// `endcount` - ends an automatic counter loop.
    CounterLoopEnd,
    /// `break` - breaks out of the current loop.
    LoopBreak,
    /// `export` - returns a value from the script to the importer.
    ModuleExport,
}

/// Tags for the operators of Cahmann Script.
///
/// Symbolic lexemes are one or two characters; compound forms win over
/// their prefixes by longest-match during scanning. Three operators are
/// spelled as words (`true`, `false`, `len`) and are recognized during
/// the identifier run, case-insensitively like keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `=`
    Assignment,
    /// `+`
    Addition,
    /// `+=`
    AdditionAssignment,
    /// `-`
    Subtraction,
    /// `-=`
    SubtractionAssignment,
    /// `*`
    Multiplication,
    /// `*=`
    MultiplicationAssignment,
    /// `/`
    Division,
    /// `/=`
    DivisionAssignment,
    /// `%`
    Modulo,
    /// `%=`
    ModuloAssignment,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `**`
    Exponentiate,
    /// `!`
    Negation,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `&`
    BitwiseAnd,
    /// `&=`
    BitwiseAndAssignment,
    /// `|`
    BitwiseOr,
    /// `|=`
    BitwiseOrAssignment,
    /// `^`
    BitwiseXor,
    /// `^=`
    BitwiseXorAssignment,
    /// `~`
    BitwiseComplement,
    /// `~=`
    BitwiseComplementAssignment,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `==`
    Equality,
    /// `!=`
    Inequality,
    /// `<>`
    BasicInequality,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `[`
    ArrayAccessBegin,
    /// `]`
    ArrayAccessEnd,
    /// `.`
    MemberAccess,
    /// `(`
    FunctionBegin,
    /// `)`
    FunctionEnd,
    /// `()` - function-call shorthand, scanned as a single operator.
    FunctionCall,
    /// `true` - word operator evaluating to true.
    TrueExpression,
    /// `false` - word operator evaluating to false.
    FalseExpression,
    /// `len` - word operator yielding the length of its operand.
    LengthOperator,
}

/// Tags for tokens outside the keyword/operator/identifier/literal
/// families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    /// Marks the end of a source buffer. Emitted exactly once per scan.
    EndOfFile,
}

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal, integer or decimal.
    Number(f64),
    /// A string literal with escape sequences resolved.
    Text(String),
}

/// The family of a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Numeric literal.
    Number,
    /// String literal.
    Text,
}

impl LiteralValue {
    /// Returns which literal family this value belongs to.
    pub fn kind(&self) -> LiteralKind {
        match self {
            LiteralValue::Number(_) => LiteralKind::Number,
            LiteralValue::Text(_) => LiteralKind::Text,
        }
    }
}

/// One classified, position-annotated unit of source text.
///
/// The `lexeme` (or `name`) field is always the exact source substring
/// the scanner consumed, byte for byte; `location` is the position of
/// its first character. The end-of-file token carries no lexeme and a
/// sentinel location.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A reserved word.
    Keyword {
        /// The keyword's tag.
        kind: KeywordKind,
        /// The spelling as it appeared in the source.
        lexeme: String,
        /// Position of the first character.
        location: Location,
    },
    /// An operator or delimiter.
    Operator {
        /// The operator's tag.
        kind: OperatorKind,
        /// The spelling as it appeared in the source.
        lexeme: String,
        /// Position of the first character.
        location: Location,
    },
    /// A name that is not a reserved word.
    Identifier {
        /// The identifier text.
        name: String,
        /// Position of the first character.
        location: Location,
    },
    /// A numeric or string literal.
    Literal {
        /// The decoded value.
        value: LiteralValue,
        /// The raw source spelling, quotes and escapes included.
        lexeme: String,
        /// Position of the first character.
        location: Location,
    },
    /// A special marker token.
    Special {
        /// The marker's tag.
        kind: SpecialKind,
        /// Sentinel location (line/column 0).
        location: Location,
    },
}

impl Token {
    /// Returns the source position of this token.
    pub fn location(&self) -> Location {
        match self {
            Token::Keyword { location, .. }
            | Token::Operator { location, .. }
            | Token::Identifier { location, .. }
            | Token::Literal { location, .. }
            | Token::Special { location, .. } => *location,
        }
    }

    /// Returns the consumed source substring, if the token has one.
    ///
    /// The end-of-file token has no lexeme.
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Token::Keyword { lexeme, .. }
            | Token::Operator { lexeme, .. }
            | Token::Literal { lexeme, .. } => Some(lexeme),
            Token::Identifier { name, .. } => Some(name),
            Token::Special { .. } => None,
        }
    }

    /// Tests whether this token was produced from `candidate`.
    ///
    /// Keywords and word-form operators match case-insensitively,
    /// mirroring how they are looked up during scanning; every other
    /// token matches its lexeme exactly. The end-of-file token matches
    /// nothing.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Token::Keyword { lexeme, .. } => lexeme.eq_ignore_ascii_case(candidate),
            Token::Operator {
                kind:
                    OperatorKind::TrueExpression
                    | OperatorKind::FalseExpression
                    | OperatorKind::LengthOperator,
                lexeme,
                ..
            } => lexeme.eq_ignore_ascii_case(candidate),
            Token::Operator { lexeme, .. } | Token::Literal { lexeme, .. } => lexeme == candidate,
            Token::Identifier { name, .. } => name == candidate,
            Token::Special { .. } => false,
        }
    }

    /// Returns true if this is the end-of-file marker.
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            Token::Special {
                kind: SpecialKind::EndOfFile,
                ..
            }
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword { kind, lexeme, .. } => write!(f, "keyword {:?} '{}'", kind, lexeme),
            Token::Operator { kind, lexeme, .. } => write!(f, "operator {:?} '{}'", kind, lexeme),
            Token::Identifier { name, .. } => write!(f, "identifier '{}'", name),
            Token::Literal { lexeme, .. } => write!(f, "literal '{}'", lexeme),
            Token::Special { kind, .. } => write!(f, "{:?}", kind),
        }
    }
}
