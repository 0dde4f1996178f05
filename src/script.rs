// ABOUTME: Parser for line-oriented onboarding event scripts
// Used by `orvia replay` to drive the wizard without a terminal

use thiserror::Error;
use tokio::time::Duration;

use crate::session::UserEvent;

/// A script line: either a user event or a pause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Event(UserEvent),
    Wait(Duration),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{verb}'")]
    UnknownCommand { line: usize, verb: String },

    #[error("line {line}: '{verb}' expects an argument")]
    MissingArgument { line: usize, verb: String },

    #[error("line {line}: invalid wait duration '{value}' (expected milliseconds)")]
    InvalidDuration { line: usize, value: String },
}

/// Parse a whole script.
///
/// One command per line: `name <text>`, `continue`, `select <key>`, `back`,
/// `roadmap`, `wait <ms>`, `quit`. Blank lines and `#` comments are skipped.
/// Career keys are not checked here; the flow rejects unknown ones.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (verb, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        let step = match verb {
            // An empty name is allowed; it clears the field
            "name" => ScriptStep::Event(UserEvent::NameChanged(arg.to_string())),
            "continue" => ScriptStep::Event(UserEvent::Continue),
            "select" => {
                if arg.is_empty() {
                    return Err(ScriptError::MissingArgument {
                        line,
                        verb: verb.to_string(),
                    });
                }
                ScriptStep::Event(UserEvent::SelectCareer(arg.to_string()))
            }
            "back" => ScriptStep::Event(UserEvent::Back),
            "roadmap" => ScriptStep::Event(UserEvent::ViewRoadmap),
            "quit" => ScriptStep::Event(UserEvent::Quit),
            "wait" => {
                let ms: u64 = arg.parse().map_err(|_| ScriptError::InvalidDuration {
                    line,
                    value: arg.to_string(),
                })?;
                ScriptStep::Wait(Duration::from_millis(ms))
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    verb: other.to_string(),
                })
            }
        };
        steps.push(step);
    }

    Ok(steps)
}
