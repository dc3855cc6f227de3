//! Validation of a function marked `#[case]`.
//!
//! A test case is a plain function `fn name() { ... }`. Its outer
//! attributes, visibility and body are kept; everything that would not
//! fit the `fn(&dyn FailureCallback)` signature of a registered case is
//! rejected, and all the problems of one declaration are reported together.

use proc_macro2::TokenStream;
use syn::spanned::Spanned;
use syn::{Attribute, Block, Ident, ItemFn, ReturnType, Type, Visibility};

use candela_err::{self as err, DisplayTrySpan, EAccum};

/// A validated test case.
#[derive(Debug, Clone)]
pub struct Case {
    /// Outer attributes, forwarded as is.
    pub attrs: Vec<Attribute>,
    /// Visibility, forwarded as is.
    pub vis: Visibility,
    /// Name of the function, which is also the name of the case.
    pub name: Ident,
    /// Body.
    pub body: Box<Block>,
}

/// Whether the type is `()`, possibly parenthesized.
fn is_unit(ty: &Type) -> bool {
    match ty {
        Type::Tuple(t) => t.elems.is_empty(),
        Type::Paren(p) => is_unit(&p.elem),
        Type::Group(g) => is_unit(&g.elem),
        _ => false,
    }
}

impl Case {
    /// Check that `item` can be registered as a test case.
    ///
    /// `args` are the arguments of the attribute itself, which must be empty.
    pub fn translate(eaccum: &mut EAccum, args: TokenStream, item: ItemFn) -> Option<Self> {
        let ItemFn {
            attrs,
            vis,
            sig,
            block,
        } = item;
        let mut ok = true;

        if let Some(first) = args.into_iter().next() {
            let _: Option<()> = eaccum.error(err::CaseAttrArgs { site: first.span() });
            ok = false;
        }

        let qualifiers = [
            sig.constness.map(|t| ("const", t.span())),
            sig.asyncness.map(|t| ("async", t.span())),
            sig.unsafety.map(|t| ("unsafe", t.span())),
            sig.abi.as_ref().map(|abi| ("extern", abi.span())),
        ];
        for (qualifier, span) in qualifiers.into_iter().flatten() {
            let _: Option<()> = eaccum.error(err::CaseQualifier {
                qualifier: DisplayTrySpan {
                    display: qualifier,
                    try_span: Some(span),
                },
            });
            ok = false;
        }

        if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
            let generics = if sig.generics.params.is_empty() {
                sig.generics.where_clause.span()
            } else {
                sig.generics.span()
            };
            let _: Option<()> = eaccum.error(err::CaseGenerics { generics });
            ok = false;
        }

        if !sig.inputs.is_empty() || sig.variadic.is_some() {
            // The whole parenthesized list, including a variadic.
            let params = sig.paren_token.span.join();
            let _: Option<()> = eaccum.error(err::CaseParams { params });
            ok = false;
        }

        if let ReturnType::Type(_, ty) = &sig.output {
            if !is_unit(ty) {
                let display = quote::ToTokens::to_token_stream(&**ty).to_string();
                let _: Option<()> = eaccum.error(err::CaseReturn {
                    output: DisplayTrySpan {
                        display,
                        try_span: Some(ty.span()),
                    },
                });
                ok = false;
            }
        }

        if !ok {
            return None;
        }
        Some(Self {
            attrs,
            vis,
            name: sig.ident,
            body: block,
        })
    }
}
