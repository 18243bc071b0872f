use proc_macro::Delimiter;
use proc_macro::Group;
use proc_macro::Ident;
use proc_macro::Literal;
use proc_macro::Punct;
use proc_macro::Spacing;
use proc_macro::Span;
use proc_macro::TokenStream;
use proc_macro::TokenTree;

/// Unrolls a loop at compile time.
///
/// `const_loop!(i, start, count, { body })` expands to `count` copies of
/// `body`, each in its own block where `i` is bound to a `usize` literal
/// running from `start` to `start + count - 1`. Using `_` as the index name
/// skips the binding.
#[proc_macro]
pub fn const_loop(input: TokenStream) -> TokenStream {
    let args: Vec<TokenTree> = input.into_iter().collect();

    let idx_var_name = match args.first() {
        Some(TokenTree::Ident(ident)) => ident.clone(),
        _ => panic!("First argument must be an identifier"),
    };
    let idx_start = match args.get(2) {
        Some(TokenTree::Literal(lit)) => parse_usize(lit, "Second"),
        _ => panic!("Second argument must be an integer literal"),
    };
    let loop_count = match args.get(4) {
        Some(TokenTree::Literal(lit)) => parse_usize(lit, "Third"),
        _ => panic!("Third argument must be an integer literal"),
    };
    let body = match args.get(6) {
        Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Brace => group.clone(),
        _ => panic!("Fourth argument must be a braced block"),
    };

    let no_need_idx_var = idx_var_name.to_string() == "_";

    let mut output = TokenStream::new();

    for k in 0..loop_count {
        let mut iteration = TokenStream::new();

        if !no_need_idx_var {
            // #[allow(unused_variables)] let <idx> = <start + k>usize;
            iteration.extend(TokenStream::from(TokenTree::Punct(Punct::new('#', Spacing::Alone))));
            let mut allow = TokenStream::new();
            allow.extend(TokenStream::from(TokenTree::Ident(Ident::new("allow", Span::call_site()))));
            allow.extend(TokenStream::from(TokenTree::Group(Group::new(
                Delimiter::Parenthesis,
                TokenStream::from(TokenTree::Ident(Ident::new("unused_variables", Span::call_site()))),
            ))));
            iteration.extend(TokenStream::from(TokenTree::Group(Group::new(Delimiter::Bracket, allow))));
            iteration.extend(TokenStream::from(TokenTree::Ident(Ident::new("let", Span::call_site()))));
            iteration.extend(TokenStream::from(TokenTree::Ident(idx_var_name.clone())));
            iteration.extend(TokenStream::from(TokenTree::Punct(Punct::new('=', Spacing::Alone))));
            iteration.extend(TokenStream::from(TokenTree::Literal(Literal::usize_suffixed(idx_start + k))));
            iteration.extend(TokenStream::from(TokenTree::Punct(Punct::new(';', Spacing::Alone))));
        }

        iteration.extend(TokenStream::from(TokenTree::Group(body.clone())));
        output.extend(TokenStream::from(TokenTree::Group(Group::new(Delimiter::Brace, iteration))));
    }

    TokenStream::from(TokenTree::Group(Group::new(Delimiter::Brace, output)))
}

fn parse_usize(lit: &Literal, position: &str) -> usize {
    let text = lit.to_string();
    let digits = text.trim_end_matches("usize").replace('_', "");
    digits
        .parse::<usize>()
        .unwrap_or_else(|_| panic!("{} argument must be an integer literal, got `{}`", position, text))
}
