//! Shape of an assertion once its expression has been split into the pieces
//! that must be captured.
//!
//! Rust evaluates `a == b` to a plain `bool`, which loses both operands.
//! To report them we cut the expression at its outermost comparison and
//! replace it by a call to a builder of `candela_sem`. The left operand is
//! itself cut along its leftmost spine of arithmetic, bitwise and logical
//! operators so that the innermost operand becomes a captured leaf and the
//! remaining operators apply to that leaf.
//!
//! Everything else (calls, method calls, indexing, parenthesized
//! expressions, ...) is left untouched and captured as a whole.

use std::fmt;

use proc_macro2::TokenStream;
use syn::parse::{ParseStream, Parser};
use syn::spanned::Spanned;
use syn::{BinOp, Expr};

use candela_err::{self as err, EAccum};

use crate::sp::{Span, Sp};

/// Comparison operators that produce a deferred comparison node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,
}

impl CmpOp {
    /// Recognize a comparison operator.
    #[must_use]
    pub fn from_syn(op: &BinOp) -> Option<Sp<Self>> {
        let t = match op {
            BinOp::Eq(_) => Self::Equal,
            BinOp::Ne(_) => Self::NotEqual,
            BinOp::Lt(_) => Self::LessThan,
            BinOp::Le(_) => Self::LessThanEqual,
            BinOp::Gt(_) => Self::GreaterThan,
            BinOp::Ge(_) => Self::GreaterThanEqual,
            _ => return None,
        };
        Some(Sp::new(t, op.span()))
    }

    /// Name of the `Leaf` method that builds this comparison.
    #[must_use]
    pub fn builder(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::LessThan => "less_than",
            Self::LessThanEqual => "less_than_equal",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanEqual => "greater_than_equal",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
        };
        write!(f, "{s}")
    }
}

/// Short-circuiting operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    /// `&&`
    And,
    /// `||`
    Or,
}

impl LogicOp {
    /// Recognize a logical operator.
    #[must_use]
    pub fn from_syn(op: &BinOp) -> Option<Sp<Self>> {
        let t = match op {
            BinOp::And(_) => Self::And,
            BinOp::Or(_) => Self::Or,
            _ => return None,
        };
        Some(Sp::new(t, op.span()))
    }

    /// Name of the `Leaf` method that applies this operator.
    #[must_use]
    pub fn builder(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Eager operators that a `Leaf` can absorb.
fn is_arith(op: &BinOp) -> bool {
    matches!(
        op,
        BinOp::Add(_)
            | BinOp::Sub(_)
            | BinOp::Mul(_)
            | BinOp::Div(_)
            | BinOp::Rem(_)
            | BinOp::BitAnd(_)
            | BinOp::BitOr(_)
            | BinOp::BitXor(_)
            | BinOp::Shl(_)
            | BinOp::Shr(_)
    )
}

/// Remove the invisible delimiters that `macro_rules!` puts around
/// an `$e:expr` fragment.
fn strip_group(expr: Expr) -> Expr {
    match expr {
        Expr::Group(g) if g.attrs.is_empty() => strip_group(*g.expr),
        other => other,
    }
}

/// The leftmost spine of an expression.
#[derive(Debug, Clone)]
pub enum Chain {
    /// Innermost operand, captured as a leaf.
    Capture(Expr),
    /// `lhs op rhs`, applied to the leaf and evaluated immediately.
    Arith {
        /// Chain built so far.
        lhs: Box<Chain>,
        /// Operator, kept as written.
        op: BinOp,
        /// Plain operand.
        rhs: Expr,
    },
    /// `lhs && rhs` or `lhs || rhs`, where `rhs` is only evaluated
    /// if needed.
    Logic {
        /// Chain built so far.
        lhs: Box<Chain>,
        /// Operator.
        op: Sp<LogicOp>,
        /// Plain operand.
        rhs: Expr,
    },
}

impl Chain {
    /// Descend along the left operands.
    #[must_use]
    pub fn translate(expr: Expr) -> Self {
        match expr {
            Expr::Binary(b) if b.attrs.is_empty() => {
                if is_arith(&b.op) {
                    Self::Arith {
                        lhs: Box::new(Self::translate(*b.left)),
                        op: b.op,
                        rhs: *b.right,
                    }
                } else if let Some(op) = LogicOp::from_syn(&b.op) {
                    Self::Logic {
                        lhs: Box::new(Self::translate(*b.left)),
                        op,
                        rhs: *b.right,
                    }
                } else {
                    Self::Capture(Expr::Binary(b))
                }
            }
            other => Self::Capture(other),
        }
    }

    /// Whether nothing but the leaf itself is left.
    #[cfg(test)]
    #[must_use]
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Capture(_))
    }
}

/// What the assertion evaluates.
#[derive(Debug, Clone)]
pub enum Node {
    /// `lhs op rhs` at the top level.
    Compare {
        /// Left operand.
        lhs: Chain,
        /// Comparison.
        op: Sp<CmpOp>,
        /// Right operand, captured by reference.
        rhs: Expr,
    },
    /// Anything else: its truthiness decides the outcome.
    Truth(Chain),
}

impl Node {
    /// Split at the outermost comparison, if there is one.
    #[must_use]
    pub fn translate(expr: Expr) -> Self {
        match strip_group(expr) {
            Expr::Binary(b) if b.attrs.is_empty() => match CmpOp::from_syn(&b.op) {
                Some(op) => Self::Compare {
                    lhs: Chain::translate(*b.left),
                    op,
                    rhs: *b.right,
                },
                None => Self::Truth(Chain::translate(Expr::Binary(b))),
            },
            other => Self::Truth(Chain::translate(other)),
        }
    }
}

/// A whole `check!(...)` invocation.
#[derive(Debug, Clone)]
pub struct Check {
    /// Tokens as written, used for the text of failure messages.
    pub text: TokenStream,
    /// Translated expression.
    pub node: Node,
}

impl Check {
    /// Parse and translate the input of a `check!`.
    ///
    /// Reports empty input, input that is not an expression, and anything
    /// that follows the expression.
    pub fn translate(eaccum: &mut EAccum, input: TokenStream) -> Option<Self> {
        if input.is_empty() {
            return eaccum.error(err::CheckEmpty {
                site: Span::call_site(),
            });
        }
        let parser = |stream: ParseStream| -> syn::Result<(Expr, Option<Span>)> {
            let expr: Expr = stream.parse()?;
            if stream.is_empty() {
                Ok((expr, None))
            } else {
                let extra = stream.span();
                let _: TokenStream = stream.parse()?;
                Ok((expr, Some(extra)))
            }
        };
        let (expr, extra) = match parser.parse2(input.clone()) {
            Ok(parsed) => parsed,
            Err(e) => {
                return eaccum.error(err::CheckSyntax {
                    msg: e.to_string(),
                    site: e.span(),
                })
            }
        };
        if let Some(extra) = extra {
            return eaccum.error(err::CheckTrailing { extra });
        }
        Some(Self {
            text: input,
            node: Node::translate(expr),
        })
    }
}
