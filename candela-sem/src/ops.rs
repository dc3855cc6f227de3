//! The comparison operators that an assertion can defer.
//!
//! Only these six operators produce a [`Binary`](crate::expr::Binary) node,
//! everything else is evaluated eagerly on the captured operand.
//! Each operator exists both as a runtime tag ([Op]) and as a zero-sized
//! marker type that carries its evaluation rule ([Compare]), so that
//! a `Binary` node knows statically how to evaluate itself.

use std::fmt;

/// Invoke `$m!(token, Marker, builder, Bound)` once for each comparison
/// operator. This is the single source of truth for the operator table.
macro_rules! for_each_comparison {
    ($m:ident) => {
        $m!(==, Equal, equal, PartialEq);
        $m!(!=, NotEqual, not_equal, PartialEq);
        $m!(<=, LessThanEqual, less_than_equal, PartialOrd);
        $m!(>=, GreaterThanEqual, greater_than_equal, PartialOrd);
        $m!(<, LessThan, less_than, PartialOrd);
        $m!(>, GreaterThan, greater_than, PartialOrd);
    };
}
pub(crate) use for_each_comparison;

/// Tag of a deferrable comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
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

impl Op {
    /// Every operator of the table.
    pub const ALL: [Op; 6] = [
        Op::Equal,
        Op::NotEqual,
        Op::LessThan,
        Op::LessThanEqual,
        Op::GreaterThan,
        Op::GreaterThanEqual,
    ];

    /// Source token of the operator, as it appears in failure messages.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Op::Equal => "==",
            Op::NotEqual => "!=",
            Op::LessThan => "<",
            Op::LessThanEqual => "<=",
            Op::GreaterThan => ">",
            Op::GreaterThanEqual => ">=",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Static description of an operator.
pub trait Comparison {
    /// Runtime tag.
    const OP: Op;
    /// Display token.
    const TOKEN: &'static str = Self::OP.token();
}

/// Evaluation rule of an operator for operands of type `T` and `U`.
pub trait Compare<T: ?Sized, U: ?Sized>: Comparison {
    /// Apply the operator. Pure: never mutates the operands.
    fn apply(lhs: &T, rhs: &U) -> bool;
}

/// Declare the marker type of one operator.
macro_rules! comparison_marker {
    ($tok:tt, $name:ident, $builder:ident, $bound:ident) => {
        #[doc = concat!("Marker of the `", stringify!($tok), "` operator.")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Comparison for $name {
            const OP: Op = Op::$name;
        }

        impl<T, U> Compare<T, U> for $name
        where
            T: ?Sized + $bound<U>,
            U: ?Sized,
        {
            #[inline(always)]
            fn apply(lhs: &T, rhs: &U) -> bool {
                lhs $tok rhs
            }
        }
    };
}

for_each_comparison!(comparison_marker);
