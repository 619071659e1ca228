//! Shape checks over the nested chain of a parenthesis group.
//!
//! Both checks are guesses. They look at token kinds only and are tuned to
//! keep obvious parameter lists and obvious argument lists apart.

use crate::parser::{GroupKind, TokenChain, TokenId, TokenKind};

/// Guess whether a parenthesis group holds constructor arguments, making
/// the statement around it `Type name(args);` rather than a prototype.
///
/// The group's nested chain is expected to start with `(` and end with `)`.
pub fn looks_like_constructor_parameter_set(chain: &TokenChain, group: TokenId) -> bool {
    let items = chain.children(group);

    // `type var()` declares a function, not a variable
    if items.len() < 3 {
        return false;
    }

    debug_assert_eq!(chain.kind(items[0]), TokenKind::OpeningParenthesis);

    let first = chain.kind(items[1]);
    let second = chain.kind(items[2]);

    // constants cannot appear in a signature
    if first.is_constant() {
        return true;
    }

    match first {
        // (int a...  (void *...  (unsigned int...
        TokenKind::Keyword(_)
            if matches!(
                second,
                TokenKind::Keyword(_)
                    | TokenKind::Identifier
                    | TokenKind::Star
                    | TokenKind::Ampersand
                    | TokenKind::DoubleAmpersand
            ) =>
        {
            false
        }
        // (type x...
        TokenKind::Identifier
            if matches!(second, TokenKind::Keyword(_) | TokenKind::Identifier) =>
        {
            false
        }
        _ => true,
    }
}

/// Guess whether a parenthesis group is a function parameter list:
/// `()`, `(void)`, `(...)`, or comma-separated parameters made only of type
/// and declarator tokens, optionally with default values.
pub fn looks_like_function_parameter_list(chain: &TokenChain, group: TokenId) -> bool {
    let items = chain.children(group);
    if items.len() < 2 {
        return false;
    }
    let inner = &items[1..items.len() - 1];
    if inner.is_empty() {
        return true;
    }

    let mut i = 0;
    loop {
        // Start of a parameter
        let Some(&first) = inner.get(i) else {
            // trailing comma
            return false;
        };
        match chain.kind(first) {
            TokenKind::MultipleDots => return i + 1 == inner.len(),
            TokenKind::Identifier | TokenKind::Keyword(_) | TokenKind::DoubleColon => {}
            _ => return false,
        }

        // Rest of the parameter
        loop {
            let Some(&id) = inner.get(i) else {
                return true;
            };
            match chain.kind(id) {
                TokenKind::Comma => {
                    i += 1;
                    break;
                }
                TokenKind::Identifier
                | TokenKind::Keyword(_)
                | TokenKind::Star
                | TokenKind::Ampersand
                | TokenKind::DoubleAmpersand
                | TokenKind::DoubleColon
                | TokenKind::MultipleDots
                | TokenKind::Group(
                    GroupKind::Parenthesis | GroupKind::SquareBracket | GroupKind::AngleBracket,
                ) => i += 1,
                TokenKind::SmallerThan => match skip_angle_run(chain, inner, i) {
                    Some(end) => i = end + 1,
                    None => return false,
                },
                // default value: anything up to the next top-level comma
                TokenKind::Assignment => {
                    match (i + 1..inner.len()).find(|&p| chain.kind(inner[p]) == TokenKind::Comma) {
                        Some(comma) => {
                            i = comma + 1;
                            break;
                        }
                        None => return true,
                    }
                }
                _ => return false,
            }
        }
    }
}

/// Position in `ids` of the `>` closing the `<` at `start`
fn skip_angle_run(chain: &TokenChain, ids: &[TokenId], start: usize) -> Option<usize> {
    let mut level = 0usize;
    for (p, &id) in ids.iter().enumerate().skip(start) {
        match chain.kind(id) {
            TokenKind::SmallerThan => level += 1,
            TokenKind::GreaterThan => {
                level -= 1;
                if level == 0 {
                    return Some(p);
                }
            }
            _ => {}
        }
    }
    None
}
