//! Deferred assertion expressions.
//!
//! An assertion such as `a + b == c` is not reduced to a `bool` right away:
//! the leftmost operand is first wrapped in a [Leaf] by [capture],
//! arithmetic on the `Leaf` is applied eagerly and rewrapped, and the
//! outermost comparison produces a [Binary] node that remembers both
//! operands and the operator. On failure the node can then render itself
//! with the actual runtime values.
//!
//! E.g.
//! - `capture(2) + 2` is `Leaf(4)`,
//! - `(capture(2) + 2).equal(5)` is `Binary(4, 5, ==)` which renders
//!   as `4 == 5` and evaluates to `false`,
//! - `capture(true).and(|| false)` is `Leaf(false)`.
//!
//! Nodes are immutable: evaluating or rendering one is a pure read,
//! and can be repeated. Operands are evaluated once, when the node is built.
//!
//! Capturing a value that cannot be rendered is rejected at compile time:
//! ```compile_fail
//! struct Opaque;
//! let _ = candela_sem::capture(Opaque);
//! ```
//! and so is checking a lone value that has no truthiness:
//! ```compile_fail
//! use candela_sem::Expression;
//! let _ = candela_sem::capture("text").truth();
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::ops::{self, for_each_comparison, Compare, Comparison, Op};

/// Values that can be tested on their own, without a comparison.
///
/// `bool` is truthy when `true`, integers are truthy when nonzero.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no truthiness and cannot be checked on its own",
    label = "this value is neither a `bool` nor an integer",
    note = "compare it to an expected value instead, e.g. `check!(value == expected)`"
)]
pub trait Truthy {
    /// Coerce to a boolean.
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline(always)]
    fn truthy(&self) -> bool {
        *self
    }
}

/// Integers are truthy when nonzero.
macro_rules! truthy_for_integer {
    ( $( $int:ty ),* ) => {
        $(
            impl Truthy for $int {
                #[inline(always)]
                fn truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Trivial projection.
impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline(always)]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

/// A node of a deferred assertion.
///
/// `Display` gives the rendering of the node with the runtime values
/// of its operands.
pub trait Expression: fmt::Display {
    /// Evaluate the node and coerce the result to a boolean.
    fn truth(&self) -> bool;

    /// Render the node.
    fn as_string(&self) -> String {
        self.to_string()
    }
}

/// A single captured operand.
#[derive(Debug, Clone, Copy)]
pub struct Leaf<T> {
    /// Payload, moved into the node.
    value: T,
}

/// Capture entry point: wrap a value without evaluating anything yet.
///
/// Every operand must be renderable, which is enforced here by the
/// `Display` bound.
#[inline(always)]
pub fn capture<T: fmt::Display>(value: T) -> Leaf<T> {
    Leaf::new(value)
}

impl<T> Leaf<T> {
    /// Wrap a value.
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Captured value.
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Extract the captured value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Borrow the payload, to compare it without moving it.
    #[inline(always)]
    pub fn by_ref(&self) -> Leaf<&T> {
        Leaf::new(&self.value)
    }
}

/// Declare the builder method of one comparison operator.
macro_rules! leaf_builder {
    ($tok:tt, $name:ident, $builder:ident, $bound:ident) => {
        #[doc = concat!("Defer `self ", stringify!($tok), " rhs` into a [Binary] node.")]
        #[inline(always)]
        pub fn $builder<U>(self, rhs: U) -> Binary<T, U, ops::$name>
        where
            ops::$name: Compare<T, U>,
        {
            Binary::new(self.value, rhs)
        }
    };
}

impl<T> Leaf<T> {
    for_each_comparison!(leaf_builder);
}

impl<T: Truthy> Leaf<T> {
    /// Short-circuiting `&&`: `rhs` is only evaluated if `self` holds.
    /// The result is a new `Leaf`, there is nothing left to defer.
    #[inline(always)]
    pub fn and<R: Truthy>(self, rhs: impl FnOnce() -> R) -> Leaf<bool> {
        Leaf::new(self.value.truthy() && rhs().truthy())
    }

    /// Short-circuiting `||`: `rhs` is only evaluated if `self` does not hold.
    #[inline(always)]
    pub fn or<R: Truthy>(self, rhs: impl FnOnce() -> R) -> Leaf<bool> {
        Leaf::new(self.value.truthy() || rhs().truthy())
    }
}

/// `Leaf` implements the standard binary operators (not comparison
/// operators though) by applying them to the inner value right away,
/// so that the outermost comparison can still be deferred.
macro_rules! leaf_impl_ops_binary {
    ($trait:ident, $func:ident) => {
        impl<T, U> std::ops::$trait<U> for Leaf<T>
        where
            T: std::ops::$trait<U>,
        {
            type Output = Leaf<T::Output>;

            #[inline(always)]
            fn $func(self, rhs: U) -> Self::Output {
                Leaf::new(self.value.$func(rhs))
            }
        }
    };
}

leaf_impl_ops_binary!(Add, add);
leaf_impl_ops_binary!(Sub, sub);
leaf_impl_ops_binary!(Mul, mul);
leaf_impl_ops_binary!(Div, div);
leaf_impl_ops_binary!(Rem, rem);
leaf_impl_ops_binary!(BitAnd, bitand);
leaf_impl_ops_binary!(BitOr, bitor);
leaf_impl_ops_binary!(BitXor, bitxor);

/// Shifts are implemented by integers for every integer right-hand side,
/// so the output is pinned to the type of the shifted value for the
/// amount to be inferred independently.
macro_rules! leaf_impl_ops_shift {
    ($trait:ident, $func:ident) => {
        impl<T, U> std::ops::$trait<U> for Leaf<T>
        where
            T: std::ops::$trait<U, Output = T>,
        {
            type Output = Leaf<T>;

            #[inline(always)]
            fn $func(self, rhs: U) -> Self::Output {
                Leaf::new(self.value.$func(rhs))
            }
        }
    };
}

leaf_impl_ops_shift!(Shl, shl);
leaf_impl_ops_shift!(Shr, shr);

impl<T: fmt::Display> fmt::Display for Leaf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Expression for Leaf<T>
where
    T: fmt::Display + Truthy,
{
    fn truth(&self) -> bool {
        self.value.truthy()
    }
}

/// A deferred comparison `lhs O rhs`.
#[derive(Debug, Clone, Copy)]
pub struct Binary<T, U, O> {
    /// Left operand.
    lhs: T,
    /// Right operand.
    rhs: U,
    /// Operator.
    op: PhantomData<O>,
}

impl<T, U, O> Binary<T, U, O> {
    /// Assemble a node from its operands. The comparison is not performed.
    #[inline(always)]
    pub fn new(lhs: T, rhs: U) -> Self {
        Self {
            lhs,
            rhs,
            op: PhantomData,
        }
    }

    /// Left operand.
    pub fn lhs(&self) -> &T {
        &self.lhs
    }

    /// Right operand.
    pub fn rhs(&self) -> &U {
        &self.rhs
    }
}

impl<T, U, O: Comparison> Binary<T, U, O> {
    /// Operator tag.
    pub fn op(&self) -> Op {
        O::OP
    }
}

impl<T, U, O: Compare<T, U>> Binary<T, U, O> {
    /// Apply the operator to the stored operands.
    #[inline(always)]
    pub fn value(&self) -> bool {
        O::apply(&self.lhs, &self.rhs)
    }
}

impl<T, U, O> fmt::Display for Binary<T, U, O>
where
    T: fmt::Display,
    U: fmt::Display,
    O: Comparison,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, O::TOKEN, self.rhs)
    }
}

impl<T, U, O> Expression for Binary<T, U, O>
where
    T: fmt::Display,
    U: fmt::Display,
    O: Compare<T, U>,
{
    fn truth(&self) -> bool {
        self.value()
    }
}
