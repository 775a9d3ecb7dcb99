//! Subcommands, one per agent API endpoint.

use clap::Subcommand;
use serde_json::Value;

use crate::options::parse_option;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Expand a short prompt into a detailed one
    Expand {
        /// Prompt to expand
        prompt: String,
    },

    /// Generate from a prompt or an expanded prompt
    Generate {
        /// Prompt or expanded prompt
        prompt: String,
        /// Extra request field as key=value; the value is parsed as JSON when possible
        #[arg(short = 'o', long = "option", value_parser = parse_option)]
        options: Vec<(String, Value)>,
    },

    /// Ask the chat endpoint a question
    Chat {
        /// Message to send
        prompt: String,
        /// Response schema as a JSON object
        #[arg(long)]
        schema: Option<String>,
        /// Prior conversation turns as a JSON array
        #[arg(long)]
        history: Option<String>,
        /// Extra request field as key=value; the value is parsed as JSON when possible
        #[arg(short = 'o', long = "option", value_parser = parse_option)]
        options: Vec<(String, Value)>,
    },

    /// Describe an image as a prompt
    Vision {
        /// Publicly reachable image URL
        image_url: String,
    },
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use crate::commands::Commands;
    use clap::Parser;
    use serde_json::json;

    #[test]
    fn test_generate_collects_options() {
        let cli = Cli::parse_from([
            "spellshape",
            "generate",
            "a cat",
            "-o",
            "width=512",
            "--option",
            "style=watercolor",
        ]);
        let Commands::Generate { prompt, options } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(prompt, "a cat");
        assert_eq!(
            options,
            vec![
                ("width".to_string(), json!(512)),
                ("style".to_string(), json!("watercolor")),
            ]
        );
    }

    #[test]
    fn test_chat_accepts_schema_and_history() {
        let cli = Cli::parse_from([
            "spellshape",
            "chat",
            "hello",
            "--schema",
            r#"{"type":"object"}"#,
            "--history",
            "[]",
        ]);
        let Commands::Chat {
            schema, history, ..
        } = cli.command
        else {
            panic!("expected chat");
        };
        assert_eq!(schema.as_deref(), Some(r#"{"type":"object"}"#));
        assert_eq!(history.as_deref(), Some("[]"));
    }

    #[test]
    fn test_malformed_option_is_rejected() {
        let result = Cli::try_parse_from(["spellshape", "generate", "a cat", "-o", "width"]);
        assert!(result.is_err());
    }
}
