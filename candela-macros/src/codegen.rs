//! Generate calls to `candela_sem` from a translated assertion or case.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned, ToTokens};
use syn::spanned::Spanned;

use crate::ast::{Chain, Check, Node};
use crate::case::Case;

/// Name of the failure callback that `#[case]` adds to the signature
/// and that every `check!` of the body reports to.
pub const FAIL: &str = "__candela_fail";

/// The failure callback, resolved at the invocation site so that the
/// identifier introduced by `#[case]` is visible from `check!`.
pub fn fail_ident() -> Ident {
    Ident::new(FAIL, Span::call_site())
}

/// The leaf is built by value, every operator is applied to it
/// as written.
impl ToTokens for Chain {
    fn to_tokens(&self, toks: &mut TokenStream) {
        match self {
            Self::Capture(e) => {
                toks.extend(quote_spanned! {e.span()=>
                    ::candela_sem::capture(#e)
                });
            }
            Self::Arith { lhs, op, rhs } => {
                toks.extend(quote! {
                    (#lhs #op #rhs)
                });
            }
            Self::Logic { lhs, op, rhs } => {
                let method = Ident::new(op.t.builder(), op.span);
                toks.extend(quote_spanned! {op.span=>
                    (#lhs).#method(|| #rhs)
                });
            }
        }
    }
}

/// A comparison whose left operand is a single expression borrows both
/// sides. Otherwise the chain owns the result of the arithmetic and
/// the comparison borrows from it.
///
/// The operands are bound by a `match` so that temporaries live until
/// the node has been evaluated.
impl ToTokens for Node {
    fn to_tokens(&self, toks: &mut TokenStream) {
        let lhs_ident = Ident::new("__lhs", Span::mixed_site());
        let rhs_ident = Ident::new("__rhs", Span::mixed_site());
        match self {
            Self::Compare {
                lhs: Chain::Capture(e),
                op,
                rhs,
            } => {
                let builder = Ident::new(op.t.builder(), op.span);
                toks.extend(quote_spanned! {op.span=>
                    match (&(#e), &(#rhs)) {
                        (#lhs_ident, #rhs_ident) => ::candela_sem::evaluate(
                            ::candela_sem::capture(#lhs_ident).#builder(#rhs_ident)
                        ),
                    }
                });
            }
            Self::Compare { lhs: chain, op, rhs } => {
                let builder = Ident::new(op.t.builder(), op.span);
                toks.extend(quote_spanned! {op.span=>
                    match (#chain, &(#rhs)) {
                        (#lhs_ident, #rhs_ident) => ::candela_sem::evaluate(
                            #lhs_ident.by_ref().#builder(#rhs_ident)
                        ),
                    }
                });
            }
            Self::Truth(chain) => {
                toks.extend(quote! {
                    ::candela_sem::evaluate(#chain)
                });
            }
        }
    }
}

/// `check!(E)` is a call to the driver with the text of `E`,
/// its location, the callback, and the deferred evaluation of `E`.
impl ToTokens for Check {
    fn to_tokens(&self, toks: &mut TokenStream) {
        let Self { text, node } = self;
        let fail = fail_ident();
        toks.extend(quote! {
            ::candela_sem::check(
                ::core::stringify!(#text),
                ::candela_sem::Site {
                    file: ::core::file!(),
                    line: ::core::line!(),
                },
                #fail,
                || #node,
            )
        });
    }
}

/// The function receives the callback as its only parameter and is
/// submitted to the registry under its own name.
impl ToTokens for Case {
    fn to_tokens(&self, toks: &mut TokenStream) {
        let Self {
            attrs,
            vis,
            name,
            body,
        } = self;
        let fail = fail_ident();
        toks.extend(quote! {
            #(#attrs)*
            #vis fn #name(#fail: &dyn ::candela_sem::FailureCallback) #body
        });
        toks.extend(quote_spanned! {name.span()=>
            ::candela_sem::inventory::submit! {
                ::candela_sem::Declaration::new(
                    ::core::stringify!(#name),
                    ::core::file!(),
                    ::core::line!(),
                    #name,
                )
            }
        });
    }
}
