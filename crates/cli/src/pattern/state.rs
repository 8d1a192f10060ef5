// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! State nodes and the arena-backed state graph.
//!
//! Nodes live in a single `Vec` and refer to each other by [`StateId`].
//! Repeat nodes loop back to themselves by storing their own id in their
//! transition list.

use std::fmt;

use super::CharSet;

/// Handle to a node in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a node matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Graph root.
    Start,
    /// Accepting state, reached only once input is exhausted.
    Termination,
    /// `.`: any one character.
    Dot,
    /// A single ASCII character.
    Literal(char),
    /// `[...]`: any member of the set.
    Group(CharSet),
    /// `x*`: zero or more of the inner state.
    Star(Box<State>),
    /// `x+`: one or more of the inner state.
    Plus(Box<State>),
}

impl State {
    /// Local accept predicate for one input character.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            State::Start | State::Dot => true,
            State::Termination => false,
            State::Literal(symbol) => *symbol == c,
            State::Group(set) => set.contains(c),
            State::Star(inner) | State::Plus(inner) => inner.accepts(c),
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, State::Star(_))
    }

    pub fn is_repeat(&self) -> bool {
        matches!(self, State::Star(_) | State::Plus(_))
    }

    pub fn is_termination(&self) -> bool {
        matches!(self, State::Termination)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Start => write!(f, "start"),
            State::Termination => write!(f, "end"),
            State::Dot => write!(f, "dot"),
            State::Literal(c) => write!(f, "literal {:?}", c),
            State::Group(set) => write!(f, "group {}", set),
            State::Star(inner) => write!(f, "star({})", inner),
            State::Plus(inner) => write!(f, "plus({})", inner),
        }
    }
}

/// A state plus its ordered outgoing transitions.
#[derive(Debug, Clone)]
pub struct Node {
    pub state: State,
    pub transitions: Vec<StateId>,
}

/// Compiled state graph.
///
/// Built once by the compiler and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    start: StateId,
    end: StateId,
}

impl Graph {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn end(&self) -> StateId {
        self.end
    }

    pub fn node(&self, id: StateId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.nodes[id.0].state
    }

    pub fn transitions(&self, id: StateId) -> &[StateId] {
        &self.nodes[id.0].transitions
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes with their ids, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (StateId(i), n))
    }
}

/// Append-only graph construction.
///
/// Transitions can only be added; nothing is removed or reordered.
#[derive(Debug)]
pub(crate) struct GraphBuilder {
    nodes: Vec<Node>,
}

impl GraphBuilder {
    /// Start a new graph containing only the Start node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                state: State::Start,
                transitions: Vec::new(),
            }],
        }
    }

    pub fn start(&self) -> StateId {
        StateId(0)
    }

    /// Add a node. Repeat nodes get their self-transition immediately.
    pub fn push(&mut self, state: State) -> StateId {
        let id = StateId(self.nodes.len());
        let transitions = if state.is_repeat() { vec![id] } else { Vec::new() };
        self.nodes.push(Node { state, transitions });
        id
    }

    pub fn connect(&mut self, from: StateId, to: StateId) {
        self.nodes[from.0].transitions.push(to);
    }

    /// Append the Termination node after `last` and seal the graph.
    pub fn finish(mut self, last: StateId) -> Graph {
        let end = self.push(State::Termination);
        self.connect(last, end);
        Graph {
            nodes: self.nodes,
            start: StateId(0),
            end,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
