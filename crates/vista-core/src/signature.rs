//! Hand-written type signature parser.
//!
//! Splits a textual type name such as `Magnum::Math::RectangularMatrix<2, 3, float>`
//! into its bare name and an ordered list of template parameters. Parsing is
//! purely syntactic: brackets are matched and commas are only split at the top
//! nesting level. Does NOT strip `const`/reference qualifiers; see
//! [`crate::value::strip_qualifiers`].

use crate::error::{InspectError, Result};

/// A single template parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    /// An integer literal (`3`, `4u`, `-1`).
    Integer(i64),
    /// A nested type signature (`float`, `Vector<2, float>`).
    Type(TypeSignature),
}

impl Parameter {
    /// The literal value, if this parameter is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Parameter::Integer(n) => Some(*n),
            Parameter::Type(_) => None,
        }
    }

    /// The nested signature, if this parameter is a type.
    pub fn as_type(&self) -> Option<&TypeSignature> {
        match self {
            Parameter::Integer(_) => None,
            Parameter::Type(sig) => Some(sig),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Parameter::Integer(_))
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parameter::Integer(n) => write!(f, "{n}"),
            Parameter::Type(sig) => write!(f, "{sig}"),
        }
    }
}

/// A parsed type signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignature {
    /// Bare (possibly namespace-qualified) name, without parameters.
    pub name: String,
    /// Template parameters, in declaration order.
    pub parameters: Vec<Parameter>,
}

impl TypeSignature {
    /// A signature with no template parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Parse a type signature string.
    ///
    /// Examples:
    /// - `"Magnum::Math::Half"`
    /// - `"Magnum::Math::Vector<3, float>"`
    /// - `"Magnum::Math::Matrix<3, Magnum::Math::Vector<2, float> >"`
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InspectError::signature(input, "empty signature"));
        }

        let Some(open) = input.find('<') else {
            check_balanced(input)?;
            return Ok(TypeSignature::new(input));
        };

        let name = input[..open].trim();
        if name.is_empty() {
            return Err(InspectError::signature(input, "missing type name before '<'"));
        }
        check_balanced(name)?;

        let close = find_closing(input, open)?;
        let trailing = input[close + 1..].trim();
        if !trailing.is_empty() {
            return Err(InspectError::signature(
                input,
                format!("unexpected trailing text '{trailing}'"),
            ));
        }

        let parameters = split_parameters(input, &input[open + 1..close])?
            .into_iter()
            .map(|text| parse_parameter(input, text))
            .collect::<Result<Vec<_>>>()?;

        Ok(TypeSignature {
            name: name.to_string(),
            parameters,
        })
    }

    /// The last `::`-separated component of the bare name.
    pub fn unqualified_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }

    /// Number of template parameters.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// The integer literal at `index`, if present.
    pub fn integer(&self, index: usize) -> Option<i64> {
        self.parameters.get(index).and_then(Parameter::as_integer)
    }

    /// The leading run of integer parameters.
    pub fn leading_integers(&self) -> Vec<i64> {
        self.parameters
            .iter()
            .map_while(Parameter::as_integer)
            .collect()
    }

    /// Dimension baked into the bare name as its last character
    /// (`Vector3` → 3, `Color4` → 4).
    pub fn name_digit(&self) -> Option<u32> {
        self.unqualified_name().chars().last()?.to_digit(10)
    }
}

impl std::fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.parameters.is_empty() {
            return Ok(());
        }
        write!(f, "<")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ">")
    }
}

impl std::str::FromStr for TypeSignature {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self> {
        TypeSignature::parse(s)
    }
}

fn closer_for(open: char) -> Option<char> {
    match open {
        '<' => Some('>'),
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, '>' | ')' | ']')
}

/// Find the byte index of the bracket closing the one at `open`.
fn find_closing(signature: &str, open: usize) -> Result<usize> {
    let mut stack: Vec<char> = Vec::new();
    for (offset, c) in signature[open..].char_indices() {
        if let Some(closer) = closer_for(c) {
            stack.push(closer);
        } else if is_closer(c) {
            if stack.pop() != Some(c) {
                return Err(InspectError::signature(
                    signature,
                    format!("mismatched '{c}' at offset {}", open + offset),
                ));
            }
            if stack.is_empty() {
                return Ok(open + offset);
            }
        }
    }
    Err(InspectError::signature(signature, "unclosed '<'"))
}

/// Reject text with unbalanced brackets of any kind.
fn check_balanced(text: &str) -> Result<()> {
    let mut stack: Vec<char> = Vec::new();
    for c in text.chars() {
        if let Some(closer) = closer_for(c) {
            stack.push(closer);
        } else if is_closer(c) && stack.pop() != Some(c) {
            return Err(InspectError::signature(text, format!("unmatched '{c}'")));
        }
    }
    if let Some(expected) = stack.pop() {
        return Err(InspectError::signature(
            text,
            format!("missing '{expected}'"),
        ));
    }
    Ok(())
}

/// Split the bracketed region on top-level commas. The region is already
/// known to be balanced.
fn split_parameters<'a>(signature: &str, inner: &'a str) -> Result<Vec<&'a str>> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(inner[start..].trim());

    if let Some(position) = parts.iter().position(|p| p.is_empty()) {
        return Err(InspectError::signature(
            signature,
            format!("empty parameter at position {position}"),
        ));
    }
    Ok(parts)
}

/// C++ integer literal suffixes, lowercased.
const INTEGER_SUFFIXES: [&str; 6] = ["", "u", "l", "ul", "ll", "ull"];

/// A parameter starting with a digit must be an integer literal; anything
/// else is a nested type.
fn parse_parameter(signature: &str, text: &str) -> Result<Parameter> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        return TypeSignature::parse(text).map(Parameter::Type);
    }
    match parse_integer(text) {
        Some(n) => Ok(Parameter::Integer(n)),
        None => Err(InspectError::signature(
            signature,
            format!("invalid integer literal '{text}'"),
        )),
    }
}

/// Parse a decimal literal with an optional suffix from [`INTEGER_SUFFIXES`].
/// Values outside `i64` are rejected.
fn parse_integer(text: &str) -> Option<i64> {
    let digits = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = text[digits.len()..].to_ascii_lowercase();
    if !INTEGER_SUFFIXES.contains(&suffix.as_str()) {
        return None;
    }
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
