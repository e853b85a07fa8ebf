//! Lispy rendering of callable signatures.
//!
//! Required parameters come first, then `&optional` parameters with
//! their default literals in brackets, then `*` rest and `**`
//! keyword-rest parameters, then `&kwonly` keyword-only parameters:
//!
//! ```text
//! a b &optional [c 0] [d 1] * args ** kwargs &kwonly e [f 2]
//! ```

use std::fmt;

use glimpse_core::unmangle;

/// A single parameter, displayed unmangled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    symbol: String,
    default: Option<String>,
}

impl Parameter {
    pub fn new(symbol: &str) -> Self {
        Parameter {
            symbol: unmangle(symbol),
            default: None,
        }
    }

    pub fn with_default(symbol: &str, default: &str) -> Self {
        Parameter {
            symbol: unmangle(symbol),
            default: Some(default.to_string()),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            Some(default) => write!(f, "[{} {}]", self.symbol, default),
            None => write!(f, "{}", self.symbol),
        }
    }
}

/// A callable's parameter list in lispy form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    required: Vec<Parameter>,
    optional: Vec<Parameter>,
    rest: Option<String>,
    keyword_rest: Option<String>,
    keyword_only: Vec<Parameter>,
}

impl Signature {
    pub fn new() -> Self {
        Signature::default()
    }

    /// A required positional parameter.
    pub fn arg(mut self, symbol: &str) -> Self {
        self.required.push(Parameter::new(symbol));
        self
    }

    /// A positional parameter with a default literal.
    pub fn optional(mut self, symbol: &str, default: &str) -> Self {
        self.optional.push(Parameter::with_default(symbol, default));
        self
    }

    /// A rest parameter (`*args`).
    pub fn rest(mut self, symbol: &str) -> Self {
        self.rest = Some(unmangle(symbol));
        self
    }

    /// A keyword-rest parameter (`**kwargs`).
    pub fn keyword_rest(mut self, symbol: &str) -> Self {
        self.keyword_rest = Some(unmangle(symbol));
        self
    }

    /// A keyword-only parameter, with or without a default.
    pub fn keyword_only(mut self, symbol: &str, default: Option<&str>) -> Self {
        let param = match default {
            Some(d) => Parameter::with_default(symbol, d),
            None => Parameter::new(symbol),
        };
        self.keyword_only.push(param);
        self
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut groups: Vec<String> = Vec::new();

        if !self.required.is_empty() {
            groups.push(join(&self.required));
        }
        if !self.optional.is_empty() {
            groups.push(format!("&optional {}", join(&self.optional)));
        }
        if let Some(rest) = &self.rest {
            groups.push(format!("* {}", rest));
        }
        if let Some(keyword_rest) = &self.keyword_rest {
            groups.push(format!("** {}", keyword_rest));
        }
        if !self.keyword_only.is_empty() {
            groups.push(format!("&kwonly {}", join(&self.keyword_only)));
        }

        write!(f, "{}", groups.join(" "))
    }
}

fn join(params: &[Parameter]) -> String {
    params
        .iter()
        .map(Parameter::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_without_default() {
        assert_eq!(Parameter::new("arg").to_string(), "arg");
    }

    #[test]
    fn test_parameter_with_default() {
        assert_eq!(Parameter::with_default("arg", "42").to_string(), "[arg 42]");
    }

    #[test]
    fn test_parameter_unmangled() {
        assert_eq!(Parameter::new("my_arg").to_string(), "my-arg");
    }

    #[test]
    fn test_no_args() {
        assert_eq!(Signature::new().to_string(), "");
    }

    #[test]
    fn test_positional_args() {
        let sig = Signature::new().arg("a").arg("b").arg("c");
        assert_eq!(sig.to_string(), "a b c");
    }

    #[test]
    fn test_with_defaults() {
        let sig = Signature::new().arg("a").optional("b", "1").optional("c", "2");
        assert_eq!(sig.to_string(), "a &optional [b 1] [c 2]");
    }

    #[test]
    fn test_only_defaults() {
        let sig = Signature::new().optional("a", "1").optional("b", "2");
        assert_eq!(sig.to_string(), "&optional [a 1] [b 2]");
    }

    #[test]
    fn test_with_rest() {
        let sig = Signature::new().arg("a").rest("args");
        assert_eq!(sig.to_string(), "a * args");
    }

    #[test]
    fn test_with_keyword_rest() {
        let sig = Signature::new().arg("a").keyword_rest("kwargs");
        assert_eq!(sig.to_string(), "a ** kwargs");
    }

    #[test]
    fn test_keyword_only() {
        let sig = Signature::new()
            .arg("a")
            .keyword_only("b", None)
            .keyword_only("c", Some("1"));
        assert_eq!(sig.to_string(), "a &kwonly b [c 1]");
    }

    #[test]
    fn test_maximal() {
        let sig = Signature::new()
            .arg("a")
            .arg("b")
            .optional("c", "0")
            .optional("d", "1")
            .rest("args")
            .keyword_rest("kwargs")
            .keyword_only("e", None)
            .keyword_only("f", Some("2"));
        assert_eq!(
            sig.to_string(),
            "a b &optional [c 0] [d 1] * args ** kwargs &kwonly e [f 2]"
        );
    }
}
