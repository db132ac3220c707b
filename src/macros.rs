//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$symbol` - The grammar symbol the token was matched as
/// * `$text` - The consumed text
/// * `$position` - Where the match began
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(grammar.end_symbol(), String::new(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($symbol:expr, $text:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            symbol: $symbol,
            text: $text,
            position: $position,
        }
    };
}
