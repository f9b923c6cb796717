//! Parsing for the whitespace-delimited problem format.
//!
//! The text holds the vertex count, the edge count followed by that many
//! `left right cost` triples, and finally the `first last` query. Values stay
//! signed here so that range and sign checks happen in the graph store and
//! the pipeline, where they map onto the validation error kinds.

use tracing::{instrument, warn};

use crate::{
    error::{InputError, Result},
    graph::RawEdge,
};

/// A parsed problem: the graph description plus the path query.
///
/// # Examples
/// ```
/// use primpath_core::ProblemInput;
///
/// let input = ProblemInput::parse("4\n3\n0 1 1\n1 2 2\n2 3 3\n0 3\n")?;
/// assert_eq!(input.vertex_count(), 4);
/// assert_eq!(input.edges().len(), 3);
/// assert_eq!(input.query(), (0, 3));
/// # Ok::<(), primpath_core::PrimPathError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProblemInput {
    vertex_count: i64,
    edges: Vec<RawEdge>,
    first: i64,
    last: i64,
}

impl ProblemInput {
    /// Assembles a problem from already-decoded values.
    #[must_use]
    pub const fn new(vertex_count: i64, edges: Vec<RawEdge>, first: i64, last: i64) -> Self {
        Self {
            vertex_count,
            edges,
            first,
            last,
        }
    }

    /// Parses the problem text.
    ///
    /// Tokens after the query are ignored.
    ///
    /// # Errors
    /// Returns [`crate::PrimPathError::Input`] wrapping
    /// [`InputError::UnexpectedEnd`] when the text stops early,
    /// [`InputError::InvalidInteger`] when a token is not a signed 64-bit
    /// integer, and [`InputError::NegativeEdgeCount`] when the edge count is
    /// negative.
    #[instrument(name = "core.parse_input", err, skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);

        let vertex_count = tokens.next_integer("vertex count")?;
        let declared = tokens.next_integer("edge count")?;
        let edge_count = usize::try_from(declared).map_err(|_| {
            warn!(got = declared, "negative edge count");
            InputError::NegativeEdgeCount { got: declared }
        })?;

        // The declared count is untrusted, so grow as triples arrive.
        let mut edges = Vec::new();
        for _ in 0..edge_count {
            let left = tokens.next_integer("edge endpoint")?;
            let right = tokens.next_integer("edge endpoint")?;
            let cost = tokens.next_integer("edge cost")?;
            edges.push(RawEdge::new(left, right, cost));
        }

        let first = tokens.next_integer("first query vertex")?;
        let last = tokens.next_integer("last query vertex")?;

        Ok(Self::new(vertex_count, edges, first, last))
    }

    /// Returns the declared vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> i64 { self.vertex_count }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[RawEdge] { &self.edges }

    /// Returns the `(first, last)` path query.
    #[must_use]
    #[rustfmt::skip]
    pub const fn query(&self) -> (i64, i64) { (self.first, self.last) }
}

/// Whitespace tokenizer that remembers how many tokens it has handed out.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_integer(&mut self, expected: &'static str) -> Result<i64> {
        let token = self.inner.next().ok_or_else(|| {
            warn!(expected, position = self.position, "input ended early");
            InputError::UnexpectedEnd { expected }
        })?;
        let position = self.position;
        self.position += 1;
        token.parse::<i64>().map_err(|_| {
            warn!(token, position, "token is not an integer");
            InputError::InvalidInteger {
                token: token.to_owned(),
                position,
            }
            .into()
        })
    }
}
