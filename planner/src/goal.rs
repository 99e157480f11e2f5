//! Goal formulas: disjunctive normal form over relational literals.
//!
//! Text notation, used by `Display` and `FromStr`:
//!
//! ```text
//! ontop(a,floor) & -holding(b) | inside(c,d)
//! ```
//!
//! `|` separates conjunctions, `&` separates literals, a leading `-` negates.
//! `floor` is the floor sentinel. Arity and object existence are not checked
//! here; the planner validates both before searching.

use std::fmt;
use std::str::FromStr;

use blocksworld_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use blocksworld_kernel::world::ObjectId;

/// Spatial relation between objects, or of an object to the gripper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    /// Directly on top of (`x` rests on `y` or on the floor).
    OnTop,
    /// Directly inside; same placement semantics as `OnTop`.
    Inside,
    /// Anywhere higher in the same column.
    Above,
    /// Anywhere lower in the same column.
    Under,
    /// In an adjacent column.
    Beside,
    /// In some column strictly to the left.
    LeftOf,
    /// In some column strictly to the right.
    RightOf,
    /// In the gripper. Unary.
    Holding,
}

impl Relation {
    pub const ALL: [Self; 8] = [
        Self::OnTop,
        Self::Inside,
        Self::Above,
        Self::Under,
        Self::Beside,
        Self::LeftOf,
        Self::RightOf,
        Self::Holding,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTop => "ontop",
            Self::Inside => "inside",
            Self::Above => "above",
            Self::Under => "under",
            Self::Beside => "beside",
            Self::LeftOf => "leftof",
            Self::RightOf => "rightof",
            Self::Holding => "holding",
        }
    }

    /// Number of arguments the relation takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Holding => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = GoalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| GoalParseError::UnknownRelation {
                name: s.to_string(),
            })
    }
}

/// A literal argument: a concrete object or the floor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Object(ObjectId),
    Floor,
}

impl Term {
    #[must_use]
    pub fn object(id: impl AsRef<str>) -> Self {
        Self::Object(ObjectId::new(id))
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectId> {
        match self {
            Self::Object(id) => Some(id),
            Self::Floor => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(id) => write!(f, "{id}"),
            Self::Floor => f.write_str("floor"),
        }
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        if s == "floor" {
            Self::Floor
        } else {
            Self::object(s)
        }
    }
}

/// One atomic goal condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// `true` asserts the relation, `false` asserts its negation.
    pub polarity: bool,
    pub relation: Relation,
    pub args: Vec<Term>,
}

impl Literal {
    #[must_use]
    pub fn new(polarity: bool, relation: Relation, args: Vec<Term>) -> Self {
        Self {
            polarity,
            relation,
            args,
        }
    }

    /// Positive binary literal, e.g. `ontop(a,b)`.
    #[must_use]
    pub fn binary(relation: Relation, x: impl Into<Term>, y: impl Into<Term>) -> Self {
        Self::new(true, relation, vec![x.into(), y.into()])
    }

    /// Positive `holding(x)`.
    #[must_use]
    pub fn holding(x: impl Into<Term>) -> Self {
        Self::new(true, Relation::Holding, vec![x.into()])
    }

    /// The same literal with polarity flipped.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.polarity = !self.polarity;
        self
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            f.write_str("-")?;
        }
        write!(f, "{}(", self.relation)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

impl FromStr for Literal {
    type Err = GoalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (polarity, body) = match text.strip_prefix('-') {
            Some(rest) => (false, rest.trim_start()),
            None => (true, text),
        };
        let malformed = || GoalParseError::MalformedLiteral {
            text: text.to_string(),
        };
        let (name, rest) = body.split_once('(').ok_or_else(malformed)?;
        let inner = rest.strip_suffix(')').ok_or_else(malformed)?;
        let relation: Relation = name.trim().parse()?;
        let args = inner
            .split(',')
            .map(str::trim)
            .map(|arg| {
                if arg.is_empty() || arg.contains(['(', ')']) {
                    Err(malformed())
                } else {
                    Ok(Term::from(arg))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(polarity, relation, args))
    }
}

/// A goal in disjunctive normal form.
///
/// Satisfied when any conjunction is satisfied. A formula with no
/// conjunctions, or with an empty conjunction, is rejected by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GoalFormula {
    disjuncts: Vec<Vec<Literal>>,
}

impl GoalFormula {
    #[must_use]
    pub fn new(disjuncts: Vec<Vec<Literal>>) -> Self {
        Self { disjuncts }
    }

    /// A formula with one conjunction holding one literal.
    #[must_use]
    pub fn single(literal: Literal) -> Self {
        Self::new(vec![vec![literal]])
    }

    #[must_use]
    pub fn disjuncts(&self) -> &[Vec<Literal>] {
        &self.disjuncts
    }

    /// Every literal, conjunction by conjunction.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.disjuncts.iter().flatten()
    }

    /// Content hash of the display notation.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::GoalFormula, self.to_string().as_bytes())
    }
}

impl fmt::Display for GoalFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conjunction) in self.disjuncts.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            for (j, literal) in conjunction.iter().enumerate() {
                if j > 0 {
                    f.write_str(" & ")?;
                }
                write!(f, "{literal}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for GoalFormula {
    type Err = GoalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(GoalParseError::Empty);
        }
        let disjuncts = s
            .split('|')
            .map(|conjunction| {
                conjunction
                    .split('&')
                    .map(str::parse)
                    .collect::<Result<Vec<Literal>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(disjuncts))
    }
}

/// Malformed goal notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalParseError {
    #[error("empty goal")]
    Empty,

    #[error("unknown relation: {name:?}")]
    UnknownRelation { name: String },

    #[error("malformed literal: {text:?}")]
    MalformedLiteral { text: String },
}
