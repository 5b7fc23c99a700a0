//! Name and parameter-shape matchers used to select a renderer.

use regex::Regex;
use vista_core::{Parameter, TypeSignature};

use crate::error::{RenderError, Result};

/// Matches the bare name of a signature.
#[derive(Debug, Clone)]
pub enum NamePattern {
    /// The bare name must equal this string.
    Exact(String),
    /// The bare name must match this anchored regular expression.
    Regex(Regex),
}

impl NamePattern {
    pub fn exact(name: impl Into<String>) -> Self {
        NamePattern::Exact(name.into())
    }

    /// Compile a regular expression, anchoring it to the whole name.
    pub fn regex(pattern: &str) -> Result<Self> {
        let anchored = format!(
            "^(?:{})$",
            pattern.trim_start_matches('^').trim_end_matches('$')
        );
        Regex::new(&anchored)
            .map(NamePattern::Regex)
            .map_err(|source| RenderError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Exact(exact) => exact == name,
            NamePattern::Regex(re) => re.is_match(name),
        }
    }
}

impl std::fmt::Display for NamePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamePattern::Exact(name) => write!(f, "{name}"),
            NamePattern::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// What a single leading parameter must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    Type,
    Any,
}

impl ParamKind {
    fn accepts(self, param: &Parameter) -> bool {
        match self {
            ParamKind::Integer => param.is_integer(),
            ParamKind::Type => !param.is_integer(),
            ParamKind::Any => true,
        }
    }
}

/// What may follow the leading parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// Nothing.
    Exact,
    /// Any number of further parameters, including none.
    Any,
    /// At least one further parameter.
    AtLeastOne,
}

/// Parameter-shape matcher.
///
/// Textual form: comma-separated `int`, `type` or `_` for each leading
/// parameter, optionally followed by `...` (any further parameters) or `+`
/// (at least one more). The empty string matches only parameterless names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub leading: Vec<ParamKind>,
    pub tail: Tail,
}

impl Shape {
    pub fn new(leading: Vec<ParamKind>, tail: Tail) -> Self {
        Self { leading, tail }
    }

    /// No parameters at all.
    pub fn none() -> Self {
        Self::new(Vec::new(), Tail::Exact)
    }

    /// Anything, including no parameters.
    pub fn any() -> Self {
        Self::new(Vec::new(), Tail::Any)
    }

    /// One or more parameters of any kind.
    pub fn some() -> Self {
        Self::new(Vec::new(), Tail::AtLeastOne)
    }

    /// `count` leading integers followed by at least one more parameter.
    pub fn integers_then_some(count: usize) -> Self {
        Self::new(vec![ParamKind::Integer; count], Tail::AtLeastOne)
    }

    pub fn matches(&self, signature: &TypeSignature) -> bool {
        let params = &signature.parameters;
        if params.len() < self.leading.len() {
            return false;
        }
        let leading_ok = self
            .leading
            .iter()
            .zip(params)
            .all(|(kind, param)| kind.accepts(param));
        let extra = params.len() - self.leading.len();
        leading_ok
            && match self.tail {
                Tail::Exact => extra == 0,
                Tail::Any => true,
                Tail::AtLeastOne => extra >= 1,
            }
    }

    /// Parse the textual form.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |detail: String| RenderError::InvalidShape {
            shape: text.to_string(),
            detail,
        };

        let tokens: Vec<&str> = if text.trim().is_empty() {
            Vec::new()
        } else {
            text.split(',').map(str::trim).collect()
        };

        let mut leading = Vec::new();
        let mut tail = Tail::Exact;
        for (i, token) in tokens.iter().enumerate() {
            let is_last = i + 1 == tokens.len();
            match *token {
                "int" => leading.push(ParamKind::Integer),
                "type" => leading.push(ParamKind::Type),
                "_" => leading.push(ParamKind::Any),
                "..." | "+" if is_last => {
                    tail = if *token == "+" { Tail::AtLeastOne } else { Tail::Any };
                }
                "..." | "+" => {
                    return Err(invalid(format!("'{token}' must be the last element")));
                }
                other => return Err(invalid(format!("unknown element '{other}'"))),
            }
        }
        Ok(Shape::new(leading, tail))
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<&str> = self
            .leading
            .iter()
            .map(|kind| match kind {
                ParamKind::Integer => "int",
                ParamKind::Type => "type",
                ParamKind::Any => "_",
            })
            .collect();
        match self.tail {
            Tail::Exact => {}
            Tail::Any => parts.push("..."),
            Tail::AtLeastOne => parts.push("+"),
        }
        write!(f, "{}", parts.join(", "))
    }
}

impl std::str::FromStr for Shape {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        Shape::parse(s)
    }
}
