//! Token scanner
//!
//! Splits a drawing into text tokens (node names and `(labels)`) and
//! line-drawing glyphs, each keyed by its position in the grid.

use chumsky::prelude::*;
use chumsky::span::SimpleSpan;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace, warn};

use crate::core::{Glyph, Position};

/// A run of text in the drawing, keyed by the position of its first character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// A label is any token wrapped in a matching pair of parentheses
    pub fn is_label(&self) -> bool {
        is_label(&self.text)
    }

    /// Positions of every character of the token, left to right
    pub fn char_positions(&self) -> impl Iterator<Item = Position> + '_ {
        char_positions(self.position, &self.text).map(|(position, _)| position)
    }
}

/// The raw contents of a drawing, split by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedNetwork {
    /// Node names by root position
    pub nodes: BTreeMap<Position, String>,
    /// Label tokens by root position, parentheses included
    pub labels: BTreeMap<Position, String>,
    /// Line-drawing characters as they appear in the text
    pub glyphs: BTreeMap<Position, Glyph>,
}

impl ScannedNetwork {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.labels.is_empty() && self.glyphs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme<'src> {
    Word(&'src str),
    Glyph(Glyph),
    Blank,
}

/// Lexer for a single line of a drawing
///
/// Every character belongs to exactly one lexeme, so this never fails on
/// real input.
fn line_lexer<'src>() -> impl Parser<'src, &'src str, Vec<(Lexeme<'src>, SimpleSpan)>> + Clone {
    let glyph = choice((
        just('-').to(Lexeme::Glyph(Glyph::Horizontal)),
        just('|').to(Lexeme::Glyph(Glyph::Vertical)),
        just('/').to(Lexeme::Glyph(Glyph::Rising)),
        just('\\').to(Lexeme::Glyph(Glyph::Falling)),
    ));

    let word = any()
        .filter(|c: &char| !c.is_whitespace() && !Glyph::is_glyph(*c))
        .repeated()
        .at_least(1)
        .to_slice()
        .map(Lexeme::Word);

    let blank = any()
        .filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .to(Lexeme::Blank);

    choice((word, glyph, blank))
        .map_with(|lexeme, extra| (lexeme, extra.span()))
        .repeated()
        .collect()
}

fn is_label(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('(') && text.ends_with(')')
}

/// Pair every character of `text` with its position, starting at `root`
pub fn char_positions(root: Position, text: &str) -> impl Iterator<Item = (Position, char)> + '_ {
    text.chars()
        .enumerate()
        .map(move |(i, c)| (root.shifted(i as i64), c))
}

fn lex(text: &str) -> (Vec<Token>, BTreeMap<Position, Glyph>) {
    let lexer = line_lexer();
    let mut tokens = Vec::new();
    let mut glyphs = BTreeMap::new();

    for (row, line) in text.split('\n').enumerate() {
        let row = row as i64;
        let lexemes = match lexer.parse(line).into_result() {
            Ok(lexemes) => lexemes,
            Err(errors) => {
                warn!(row, ?errors, "Skipping line the scanner could not read");
                continue;
            }
        };

        for (lexeme, span) in lexemes {
            // Spans are byte offsets; the grid counts characters
            let column = line.get(..span.start).map_or(0, |s| s.chars().count()) as i64;
            let position = Position::new(column, row);
            match lexeme {
                Lexeme::Word(word) => tokens.push(Token::new(word, position)),
                Lexeme::Glyph(glyph) => {
                    glyphs.insert(position, glyph);
                }
                Lexeme::Blank => {}
            }
        }
    }

    (tokens, glyphs)
}

/// All text tokens of a drawing in reading order
///
/// ```rust
/// use asciigraf::network::tokens;
///
/// let names: Vec<_> = tokens("node1----(label1)").into_iter().map(|t| t.text).collect();
/// assert_eq!(names, ["node1", "(label1)"]);
/// ```
pub fn tokens(text: &str) -> Vec<Token> {
    lex(text).0
}

/// All line-drawing characters of a drawing, keyed by position
pub fn glyphs(text: &str) -> BTreeMap<Position, Glyph> {
    lex(text).1
}

/// Scan a drawing into node tokens, label tokens and glyphs
pub fn scan(text: &str) -> ScannedNetwork {
    let (tokens, glyphs) = lex(text);
    let mut network = ScannedNetwork {
        glyphs,
        ..Default::default()
    };

    for token in tokens {
        trace!(text = %token.text, position = %token.position, label = token.is_label(), "Scanned token");
        if token.is_label() {
            network.labels.insert(token.position, token.text);
        } else {
            network.nodes.insert(token.position, token.text);
        }
    }

    debug!(
        node_count = network.nodes.len(),
        label_count = network.labels.len(),
        glyph_count = network.glyphs.len(),
        "Scanned network"
    );
    network
}

/// Map every character position of every token to that token's text
pub fn text_by_char(tokens: &BTreeMap<Position, String>) -> HashMap<Position, &str> {
    tokens
        .iter()
        .flat_map(|(root, text)| {
            char_positions(*root, text).map(move |(position, _)| (position, text.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        tokens(text).into_iter().map(|token| token.text).collect()
    }

    #[test]
    fn test_token_positions() {
        let network = "\n    Sa---1\n        /\n       |---L_245\n    ";
        let found: HashMap<String, Position> = tokens(network)
            .into_iter()
            .map(|token| (token.text, token.position))
            .collect();

        assert_eq!(found.len(), 3);
        assert_eq!(found["Sa"], Position::new(4, 1));
        assert_eq!(found["1"], Position::new(9, 1));
        assert_eq!(found["L_245"], Position::new(11, 3));
    }

    #[test]
    fn test_single_character_nodes() {
        assert_eq!(names("---n--1---"), ["n", "1"]);
    }

    #[test]
    fn test_separators_and_decimals() {
        assert_eq!(names("---n1:35---n2:35;41"), ["n1:35", "n2:35;41"]);
        assert_eq!(names("----3.141625----"), ["3.141625"]);
    }

    #[test]
    fn test_brackets() {
        assert_eq!(
            names("-----}{---()---)(--[]---][--"),
            ["}{", "()", ")(", "[]", "]["]
        );
    }

    #[test]
    fn test_minimum_gap_between_nodes() {
        assert_eq!(names("n1 n2"), ["n1", "n2"]);
        assert_eq!(names("n1  n2"), ["n1", "n2"]);
    }

    #[test]
    fn test_labels_are_split_from_nodes() {
        let network = scan("  n1--(label1)--n2  ");
        assert_eq!(network.nodes.len(), 2);
        assert_eq!(network.nodes[&Position::new(2, 0)], "n1");
        assert_eq!(network.nodes[&Position::new(16, 0)], "n2");
        assert_eq!(network.labels[&Position::new(6, 0)], "(label1)");
    }

    #[test]
    fn test_only_wrapped_tokens_are_labels() {
        assert!(Token::new("(n5)", Position::default()).is_label());
        assert!(Token::new("()", Position::default()).is_label());
        assert!(!Token::new(")n6(", Position::default()).is_label());
        assert!(!Token::new("(", Position::default()).is_label());
        assert!(!Token::new("(open", Position::default()).is_label());
    }

    #[test]
    fn test_glyphs() {
        let found = glyphs("   --|   ");
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            [
                (Position::new(3, 0), Glyph::Horizontal),
                (Position::new(4, 0), Glyph::Horizontal),
                (Position::new(5, 0), Glyph::Vertical),
            ]
        );
    }

    #[test]
    fn test_glyphs_skip_labels() {
        let found = glyphs("---(label)---");
        let columns: Vec<i64> = found.keys().map(|p| p.x).collect();
        assert_eq!(columns, [0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        let network = scan("é---B");
        assert_eq!(network.nodes[&Position::new(4, 0)], "B");
        assert!(network.glyphs.contains_key(&Position::new(1, 0)));
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("").is_empty());
        assert!(scan("   \n\n  \t  \n").is_empty());
    }

    #[test]
    fn test_text_by_char() {
        let mut nodes = BTreeMap::new();
        nodes.insert(Position::new(1, 2), "foo".to_string());
        let chars = text_by_char(&nodes);
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[&Position::new(3, 2)], "foo");
        assert!(!chars.contains_key(&Position::new(4, 2)));
    }
}
