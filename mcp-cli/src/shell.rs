//! Interactive prompt
//!
//! One command per line:
//!
//! ```text
//! init                      send initialize
//! list                      send tools/list
//! tools                     show the listed tools
//! call <tool> [params...]   send tools/call with positional parameters
//! help                      show this help
//! quit                      leave
//! ```

use crate::CliError;
use crate::render::{render_response, render_tool_summary};
use std::io::{BufRead, Write};
use tracing::{debug, error};
use webmcp_client::{McpClient, RequestHandler};

const PROMPT: &str = "webmcp> ";

const HELP: &str = "\
Commands:
  init                      send initialize
  list                      send tools/list
  tools                     show the listed tools
  call <tool> [params...]   call a tool; params fill the schema's parameters in order
  help                      show this help
  quit                      leave";

/// A parsed prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Init,
    List,
    Tools,
    Call { tool: String, params: String },
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    /// Parse one input line
    ///
    /// # Errors
    ///
    /// Returns a message for unknown commands or a `call` without a tool name.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Ok(Self::Empty),
            "init" | "initialize" => Ok(Self::Init),
            "list" => Ok(Self::List),
            "tools" => Ok(Self::Tools),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "call" => {
                let (tool, params) = match rest.split_once(char::is_whitespace) {
                    Some((tool, params)) => (tool, params.trim()),
                    None => (rest, ""),
                };
                if tool.is_empty() {
                    return Err("usage: call <tool> [params...]".to_string());
                }
                Ok(Self::Call {
                    tool: tool.to_string(),
                    params: params.to_string(),
                })
            }
            other => Err(format!("unknown command `{other}`, try `help`")),
        }
    }
}

/// Read-eval-print loop over a client
pub struct Shell<H, R, W> {
    client: McpClient<H>,
    input: R,
    out: W,
}

impl<H: RequestHandler, R: BufRead, W: Write> Shell<H, R, W> {
    pub fn new(client: McpClient<H>, input: R, out: W) -> Self {
        Self { client, input, out }
    }

    /// Run until `quit` or end of input
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails;
    /// failed requests are reported on the prompt and the loop goes on.
    pub fn run(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "Type `help` for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match ShellCommand::parse(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(message) => writeln!(self.out, "{message}")?,
            }
        }

        writeln!(self.out)?;
        Ok(())
    }

    /// The client, for inspection after the loop ends
    pub fn client(&self) -> &McpClient<H> {
        &self.client
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<(), CliError> {
        let outcome = match command {
            ShellCommand::Init => self.client.initialize().map(Some),
            ShellCommand::List => self.client.list_tools().map(Some),
            ShellCommand::Call { tool, params } => {
                match self.client.call_tool_with_input(&tool, &params) {
                    Ok(call) => {
                        for (param, raw) in call.arguments.fallbacks() {
                            writeln!(
                                self.out,
                                "note: `{param}` expects a number, sent {raw:?} as text"
                            )?;
                        }
                        Ok(Some(call.response))
                    }
                    Err(e) => Err(e),
                }
            }
            ShellCommand::Tools => {
                render_tool_summary(&mut self.out, self.client.tools())?;
                Ok(None)
            }
            ShellCommand::Help => {
                writeln!(self.out, "{HELP}")?;
                Ok(None)
            }
            ShellCommand::Quit | ShellCommand::Empty => Ok(None),
        };

        match outcome {
            Ok(Some(response)) => render_response(&mut self.out, &response)?,
            Ok(None) => {}
            Err(e) => {
                error!("Request failed: {}", e);
                writeln!(self.out, "Error: {e}")?;
            }
        }
        Ok(())
    }
}
