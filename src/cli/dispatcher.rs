use crate::array::{Iteratee, sorted_index_by_iteratee, sorted_last_index_by_iteratee};
use crate::cli::main_types::{Commands, ConfigCommands};
use crate::error::{AppError, CliError};
use crate::storage::config::{Config, OutputFormat};
use crate::string::{CaseStyle, words};
use serde_json::{Value, json};
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    format: OutputFormat,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        format_override: Option<OutputFormat>,
    ) -> Self {
        let format = format_override.unwrap_or(config.default_format);
        log::debug!("Using output format {}", format);
        Self {
            config,
            config_path,
            format,
        }
    }

    /// Run a command and return the text to print.
    pub fn dispatch(&mut self, command: Commands) -> Result<String, AppError> {
        match command {
            Commands::Case { style, input } => self.handle_case(style.into(), &input.join(" ")),
            Commands::Words { input } => self.handle_words(&input.join(" ")),
            Commands::SortedIndex {
                array,
                value,
                iteratee,
                last,
            } => self.handle_sorted_index(&array, &value, iteratee.as_deref(), last),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_case(&self, style: CaseStyle, input: &str) -> Result<String, AppError> {
        let output = style.convert(input);
        log::info!("{} case: {:?} -> {:?}", style, input, output);
        match self.format {
            OutputFormat::Plain => Ok(output),
            OutputFormat::Json => self.render_json(&json!({
                "style": style,
                "input": input,
                "output": output,
            })),
        }
    }

    fn handle_words(&self, input: &str) -> Result<String, AppError> {
        let tokens = words(input);
        log::info!("split {:?} into {} words", input, tokens.len());
        match self.format {
            OutputFormat::Plain => Ok(tokens.join("\n")),
            OutputFormat::Json => self.render_json(&json!(tokens)),
        }
    }

    fn handle_sorted_index(
        &self,
        array: &str,
        value: &str,
        iteratee: Option<&str>,
        last: bool,
    ) -> Result<String, AppError> {
        let array = match parse_json_arg("array", array)? {
            Value::Array(items) => Some(items),
            Value::Null => None,
            other => {
                return Err(CliError::InvalidArguments(format!(
                    "--array must be a JSON array or null, got {}",
                    other
                ))
                .into());
            }
        };
        let value = parse_json_or_text(value);
        let iteratee = iteratee.map(parse_json_or_text);
        log::debug!(
            "sorted index: value={} iteratee={:?} last={}",
            value,
            iteratee,
            last
        );

        let iteratee = Iteratee::from(iteratee);
        let index = if last {
            sorted_last_index_by_iteratee(array.as_deref(), &value, iteratee)
        } else {
            sorted_index_by_iteratee(array.as_deref(), &value, iteratee)
        };

        match self.format {
            OutputFormat::Plain => Ok(index.to_string()),
            OutputFormat::Json => self.render_json(&json!({ "index": index, "last": last })),
        }
    }

    fn handle_config_command(&mut self, command: ConfigCommands) -> Result<String, AppError> {
        match command {
            ConfigCommands::Show => match self.format {
                OutputFormat::Plain => Ok(self
                    .config
                    .entries()
                    .into_iter()
                    .map(|(key, value)| format!("{} = {}", key, value))
                    .collect::<Vec<_>>()
                    .join("\n")),
                OutputFormat::Json => {
                    let value = serde_json::to_value(&self.config)
                        .map_err(|e| CliError::Output(e.to_string()))?;
                    self.render_json(&value)
                }
            },
            ConfigCommands::Set { key, value } => {
                self.config.set(&key, &value)?;
                self.config.save(self.config_path.clone())?;
                log::info!("Updated configuration key {}", key);
                Ok(format!("Set {} = {}", key, value))
            }
        }
    }

    fn render_json(&self, value: &Value) -> Result<String, AppError> {
        let rendered = if self.config.pretty_json {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| CliError::Output(e.to_string()).into())
    }
}

fn parse_json_arg(argument: &str, raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::InvalidJson {
        argument: argument.to_string(),
        message: e.to_string(),
    })
}

fn parse_json_or_text(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
