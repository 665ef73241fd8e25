use std::collections::HashMap;

use crate::error::BindError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// The handler's own binding. Never filled from text.
    Receiver,
    /// Always bound to the invocation context.
    Context,
    /// Consumes one token, falling back to `default` when text runs out.
    Positional { default: Option<String> },
    /// Consumes the whole unparsed remainder as one string.
    TrailingGreedy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

/// Arguments ready to be handed to a command handler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundArguments {
    pub positional: Vec<String>,
    pub keyword: HashMap<String, String>,
}

/// Declared parameter list of a command handler, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandSignature {
    params: Vec<Param>,
}

impl CommandSignature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// The usual `(self, ctx)` prefix every handler starts with.
    pub fn handler() -> SignatureBuilder {
        Self::builder().receiver("self").context("ctx")
    }

    pub fn params(&self) -> &[Param] {
        self.params.as_slice()
    }

    /// Structural check performed when a command is registered.
    pub fn validate(&self, command_name: &str) -> Result<(), BindError> {
        let malformed = |missing| BindError::MalformedCommandSignature {
            command: command_name.to_string(),
            missing,
        };

        match self.params.get(0).map(|param| &param.kind) {
            Some(ParamKind::Receiver) => {},
            _ => return Err(malformed("self")),
        }

        match self.params.get(1).map(|param| &param.kind) {
            Some(ParamKind::Context) => Ok(()),
            _ => Err(malformed("ctx")),
        }
    }

    /// Binds `tokens` (the text following the command name) to the declared
    /// parameters.
    ///
    /// Tokens are taken verbatim; leftover tokens once every parameter is
    /// bound are ignored.
    pub fn bind(&self, tokens: &[String], command_name: &str) -> Result<BoundArguments, BindError> {
        self.validate(command_name)?;

        let mut bound = BoundArguments::default();
        let mut index = 0;

        for param in self.params.iter().skip(2) {
            match &param.kind {
                ParamKind::Positional { default } => {
                    let value = match (tokens.get(index), default) {
                        (Some(token), _) => token.clone(),
                        (None, Some(default)) => default.clone(),
                        (None, None) => {
                            return Err(BindError::MissingRequiredArguments {
                                command: command_name.to_string(),
                            });
                        },
                    };

                    bound.positional.push(value);
                    index += 1;
                },
                ParamKind::TrailingGreedy => {
                    let rest = tokens.get(index..).unwrap_or_default().join(" ");

                    bound.keyword.insert(param.name.clone(), rest.trim_start_matches(' ').to_string());
                    break;
                },
                // Only valid in the two leading slots, nothing to bind.
                ParamKind::Receiver | ParamKind::Context => {},
            }
        }

        Ok(bound)
    }
}

#[derive(Default)]
pub struct SignatureBuilder {
    params: Vec<Param>,
}

impl SignatureBuilder {
    fn push(mut self, name: &str, kind: ParamKind) -> Self {
        self.params.push(Param { name: name.to_string(), kind });
        self
    }

    pub fn receiver(self, name: &str) -> Self {
        self.push(name, ParamKind::Receiver)
    }

    pub fn context(self, name: &str) -> Self {
        self.push(name, ParamKind::Context)
    }

    pub fn positional(self, name: &str) -> Self {
        self.push(name, ParamKind::Positional { default: None })
    }

    pub fn positional_with_default(self, name: &str, default: &str) -> Self {
        self.push(name, ParamKind::Positional { default: Some(default.to_string()) })
    }

    pub fn greedy(self, name: &str) -> Self {
        self.push(name, ParamKind::TrailingGreedy)
    }

    pub fn build(self) -> CommandSignature {
        CommandSignature { params: self.params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn missing(command: &str) -> BindError {
        BindError::MissingRequiredArguments { command: command.to_string() }
    }

    #[test]
    fn exact_tokens_bind_verbatim_in_order() {
        let signature = CommandSignature::handler()
            .positional_with_default("a", "1")
            .positional_with_default("b", "2")
            .positional_with_default("c", "3")
            .build();

        let bound = signature.bind(&tokens(&["x", "Y", "42"]), "abc").unwrap();

        assert_eq!(bound.positional, tokens(&["x", "Y", "42"]));
        assert!(bound.keyword.is_empty());
    }

    #[test]
    fn defaults_fill_missing_tokens() {
        let signature = CommandSignature::handler()
            .positional("target")
            .positional_with_default("times", "1")
            .build();

        let bound = signature.bind(&tokens(&["bob"]), "poke").unwrap();

        assert_eq!(bound.positional, tokens(&["bob", "1"]));
    }

    #[test]
    fn missing_required_argument_names_command() {
        let signature = CommandSignature::handler()
            .positional("first")
            .positional("second")
            .positional_with_default("third", "3")
            .build();

        assert_eq!(signature.bind(&tokens(&["one"]), "triple"), Err(missing("triple")));
        assert_eq!(signature.bind(&[], "triple"), Err(missing("triple")));
        assert!(signature.bind(&tokens(&["one", "two"]), "triple").is_ok());
    }

    #[test]
    fn greedy_parameter_joins_the_remainder() {
        let signature = CommandSignature::handler().greedy("text").build();

        let bound = signature.bind(&tokens(&["a", "b", "c"]), "say").unwrap();

        assert!(bound.positional.is_empty());
        assert_eq!(bound.keyword.get("text").map(String::as_str), Some("a b c"));
    }

    #[test]
    fn greedy_parameter_strips_leading_spaces() {
        let signature = CommandSignature::handler().greedy("text").build();

        let bound = signature.bind(&tokens(&["", "a", "b"]), "say").unwrap();

        assert_eq!(bound.keyword["text"], "a b");
    }

    #[test]
    fn greedy_parameter_without_tokens_binds_empty_text() {
        let signature = CommandSignature::handler().positional("color").greedy("rest").build();

        let bound = signature.bind(&tokens(&["red"]), "paint").unwrap();

        assert_eq!(bound.positional, tokens(&["red"]));
        assert_eq!(bound.keyword["rest"], "");
    }

    #[test]
    fn parameters_after_greedy_are_never_reached() {
        let signature = CommandSignature::handler()
            .greedy("rest")
            .positional("unreachable")
            .build();

        let bound = signature.bind(&[], "odd").unwrap();

        assert!(bound.positional.is_empty());
        assert_eq!(bound.keyword.len(), 1);
    }

    #[test]
    fn leftover_tokens_are_ignored() {
        let signature = CommandSignature::handler().positional("only").build();

        let bound = signature.bind(&tokens(&["one", "two", "three"]), "single").unwrap();

        assert_eq!(bound.positional, tokens(&["one"]));
    }

    #[test]
    fn short_signatures_are_malformed_regardless_of_tokens() {
        let empty = CommandSignature::builder().build();
        let receiver_only = CommandSignature::builder().receiver("self").build();
        let wrong_order = CommandSignature::builder().context("ctx").receiver("self").build();

        for input in &[tokens(&[]), tokens(&["a", "b"])] {
            assert_eq!(
                empty.bind(input, "broken"),
                Err(BindError::MalformedCommandSignature { command: "broken".to_string(), missing: "self" })
            );
            assert_eq!(
                receiver_only.bind(input, "broken"),
                Err(BindError::MalformedCommandSignature { command: "broken".to_string(), missing: "ctx" })
            );
            assert!(matches!(wrong_order.bind(input, "broken"), Err(BindError::MalformedCommandSignature { .. })));
        }
    }
}
