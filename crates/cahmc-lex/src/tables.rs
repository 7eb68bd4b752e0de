//! Keyword and operator lookup tables.
//!
//! The tables are plain immutable maps built once when a scanner is
//! created; there is no global mutable state and no lazy
//! initialization. Keyword keys are stored case-folded, and aliases
//! (`import`/`use`, `local`/`module`) share one tag.

use rustc_hash::FxHashMap;

use crate::token::{KeywordKind, OperatorKind};

/// Keyword lexemes, lower-cased, with their tags.
const KEYWORDS: &[(&str, KeywordKind)] = &[
    ("option", KeywordKind::Option),
    ("import", KeywordKind::Import),
    ("use", KeywordKind::Import),
    ("local", KeywordKind::Local),
    ("module", KeywordKind::Local),
    ("inline", KeywordKind::Inline),
    ("func", KeywordKind::Function),
    ("ret", KeywordKind::FunctionReturnType),
    ("noret", KeywordKind::FunctionNoReturnType),
    ("return", KeywordKind::FunctionReturnValue),
    ("endfunc", KeywordKind::FunctionEnd),
    ("if", KeywordKind::ConditionalBegin),
    ("then", KeywordKind::ConditionalInline),
    ("elseif", KeywordKind::ConditionalBranchIf),
    ("else", KeywordKind::ConditionalBranch),
    ("endif", KeywordKind::ConditionalEnd),
    ("while", KeywordKind::ConditionalLoopBegin),
    ("do", KeywordKind::EndLoopHead),
    ("endwhile", KeywordKind::ConditionalLoopEnd),
    ("repeat", KeywordKind::InvertedConditionalLoopBegin),
    ("until", KeywordKind::InvertedConditionalLoopEnd),
    ("for", KeywordKind::ControlledCounterLoopBegin),
    ("to", KeywordKind::ControlledCounterLoopCountTo),
    ("comp", KeywordKind::ControlledCounterLoopCompute),
    ("endfor", KeywordKind::ControlledCounterLoopEnd),
    ("count", KeywordKind::CounterLoopBegin),
    ("endcount", KeywordKind::CounterLoopEnd),
    ("break", KeywordKind::LoopBreak),
    ("export", KeywordKind::ModuleExport),
];

/// Operator lexemes with their tags. Compound lexemes beat their
/// prefixes through longest-match in the scanner, so relative order
/// here carries no meaning.
const OPERATORS: &[(&str, OperatorKind)] = &[
    ("=", OperatorKind::Assignment),
    ("+", OperatorKind::Addition),
    ("+=", OperatorKind::AdditionAssignment),
    ("-", OperatorKind::Subtraction),
    ("-=", OperatorKind::SubtractionAssignment),
    ("*", OperatorKind::Multiplication),
    ("*=", OperatorKind::MultiplicationAssignment),
    ("/", OperatorKind::Division),
    ("/=", OperatorKind::DivisionAssignment),
    ("%", OperatorKind::Modulo),
    ("%=", OperatorKind::ModuloAssignment),
    ("++", OperatorKind::Increment),
    ("--", OperatorKind::Decrement),
    ("**", OperatorKind::Exponentiate),
    ("!", OperatorKind::Negation),
    ("!=", OperatorKind::Inequality),
    ("&", OperatorKind::BitwiseAnd),
    ("&&", OperatorKind::LogicalAnd),
    ("&=", OperatorKind::BitwiseAndAssignment),
    ("|", OperatorKind::BitwiseOr),
    ("||", OperatorKind::LogicalOr),
    ("|=", OperatorKind::BitwiseOrAssignment),
    ("^", OperatorKind::BitwiseXor),
    ("^=", OperatorKind::BitwiseXorAssignment),
    ("~", OperatorKind::BitwiseComplement),
    ("~=", OperatorKind::BitwiseComplementAssignment),
    ("<", OperatorKind::LessThan),
    ("<=", OperatorKind::LessThanOrEqual),
    ("<<", OperatorKind::ShiftLeft),
    ("<>", OperatorKind::BasicInequality),
    (">", OperatorKind::GreaterThan),
    (">=", OperatorKind::GreaterThanOrEqual),
    (">>", OperatorKind::ShiftRight),
    ("==", OperatorKind::Equality),
    ("[", OperatorKind::ArrayAccessBegin),
    ("]", OperatorKind::ArrayAccessEnd),
    (".", OperatorKind::MemberAccess),
    ("(", OperatorKind::FunctionBegin),
    (")", OperatorKind::FunctionEnd),
    ("()", OperatorKind::FunctionCall),
];

/// Word-form operator lexemes, lower-cased, with their tags. These are
/// spelled like identifiers and are recognized during the identifier
/// run, not by the symbolic longest-match pass.
const WORD_OPERATORS: &[(&str, OperatorKind)] = &[
    ("true", OperatorKind::TrueExpression),
    ("false", OperatorKind::FalseExpression),
    ("len", OperatorKind::LengthOperator),
];

/// Immutable keyword and operator lookup tables.
///
/// Construction is deterministic and happens once per scanner; the
/// tables are never mutated afterwards.
///
/// # Example
///
/// ```
/// use cahmc_lex::{KeywordKind, LexicalTables, OperatorKind};
///
/// let tables = LexicalTables::new();
/// assert_eq!(tables.keyword("IMPORT"), Some(KeywordKind::Import));
/// assert_eq!(tables.keyword("use"), Some(KeywordKind::Import));
/// assert_eq!(tables.operator("+="), Some(OperatorKind::AdditionAssignment));
/// assert_eq!(tables.word_operator("len"), Some(OperatorKind::LengthOperator));
/// ```
pub struct LexicalTables {
    keywords: FxHashMap<&'static str, KeywordKind>,
    operators: FxHashMap<&'static str, OperatorKind>,
    word_operators: FxHashMap<&'static str, OperatorKind>,
    max_operator_len: usize,
}

impl LexicalTables {
    /// Builds the tables from the language's keyword and operator sets.
    pub fn new() -> Self {
        let keywords: FxHashMap<_, _> = KEYWORDS.iter().copied().collect();
        let operators: FxHashMap<_, _> = OPERATORS.iter().copied().collect();
        let word_operators: FxHashMap<_, _> =
            WORD_OPERATORS.iter().copied().collect();
        let max_operator_len = OPERATORS
            .iter()
            .map(|(lexeme, _)| lexeme.chars().count())
            .max()
            .unwrap_or(0);
        Self {
            keywords,
            operators,
            word_operators,
            max_operator_len,
        }
    }

    /// Looks up an identifier as a keyword, case-insensitively.
    pub fn keyword(&self, ident: &str) -> Option<KeywordKind> {
        self.keywords
            .get(ident.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Looks up an exact operator lexeme.
    pub fn operator(&self, lexeme: &str) -> Option<OperatorKind> {
        self.operators.get(lexeme).copied()
    }

    /// Looks up an identifier as a word-form operator,
    /// case-insensitively.
    pub fn word_operator(&self, ident: &str) -> Option<OperatorKind> {
        self.word_operators
            .get(ident.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Returns the length in characters of the longest operator lexeme.
    pub fn max_operator_len(&self) -> usize {
        self.max_operator_len
    }
}

impl Default for LexicalTables {
    fn default() -> Self {
        Self::new()
    }
}
