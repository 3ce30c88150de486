use std::io::{self, Write};

use crate::arg::arg_parse_strategy::CommandArgParser;
use crate::command::command_parser::CommandParser;
use crate::command::manual::ManualCatalog;
use crate::core::context::AppContext;
use crate::core::countdown::today;
use crate::errors::{Error, Result};
use crate::logging::LogTarget;
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

/// Where a line failed on its way from raw text to an executed command.
#[derive(Debug)]
enum Failure {
    Args(Error),
    Resolve(Error),
    Execute(Error),
}

/// The countdown REPL: one command per line against the shared context.
pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    arg_parser: CommandArgParser,
    command_parser: CommandParser,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        Self {
            ctx,
            arg_parser: CommandArgParser::new(),
            command_parser: CommandParser::new(),
        }
    }
}

impl Flow for MainFlow<'_> {
    fn render(&mut self) -> Result<()> {
        if !self.ctx.startup_displayed {
            self.print_startup();
            self.ctx.startup_displayed = true;
        }
        UiChrome::new().print_prompt("> ");
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        Self::clear_prompt_line();
        let line = input.trim();
        if line.eq_ignore_ascii_case("exit") {
            return Ok(FlowCtrl::Finish);
        }
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }

        let command = line.split_whitespace().next().unwrap_or_default();
        if let Err(failure) = self.dispatch(line) {
            self.report(command, line, failure);
        }
        Ok(FlowCtrl::Continue)
    }

    /// Closes an open session log. Sessions that never logged stay fileless.
    fn finish(&mut self) {
        let logger = &self.ctx.logger;
        if logger.log_path().is_some() {
            logger.info("Session ended.", LogTarget::FileOnly);
        }
    }
}

impl MainFlow<'_> {
    fn print_startup(&self) {
        UiChrome::new().print_banner();
        println!();
        println!("Use 'man <topic>' for command-specific details.");
        println!(
            "Available topics: {}",
            ManualCatalog::new().topics().join(", ")
        );
        println!();
        let paths = &self.ctx.paths;
        for (label, path) in [
            ("Config", &paths.config_path),
            ("Data", &paths.data_path),
            ("Exports", &paths.exports_dir),
            ("Logs", &paths.logs_dir),
        ] {
            println!("{label} path: {}", path.display());
        }
        println!();
        DisplayManager::new().display_events(
            &self.ctx.store,
            today(),
            self.ctx.config.show_past_events(),
        );
        println!();
    }

    fn clear_prompt_line() {
        UiChrome::new().print_prompt_bottom_padding();
        println!();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    /// Parses, resolves and executes one line. `log` is not itself logged so
    /// the session log it prints stays free of its own invocation.
    fn dispatch(&mut self, line: &str) -> std::result::Result<(), Failure> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let raw_args: Vec<String> = words.map(str::to_string).collect();

        let args = self
            .arg_parser
            .parse(command, &raw_args)
            .map_err(Failure::Args)?;
        let cmd = self
            .command_parser
            .parse(command, &args)
            .map_err(Failure::Resolve)?;

        if !command.eq_ignore_ascii_case("log") {
            self.ctx
                .logger
                .info(format!("Command run: {line}"), LogTarget::FileOnly);
        }
        cmd.execute(self.ctx).map_err(Failure::Execute)
    }

    fn report(&self, command: &str, line: &str, failure: Failure) {
        let logger = &self.ctx.logger;
        match failure {
            Failure::Args(err) => logger.error(
                format!("Argument parsing failed for '{line}'. {err}"),
                LogTarget::ConsoleAndFile,
            ),
            Failure::Resolve(err) => logger.error(
                format!("Command resolution failed for '{command}'. {err}"),
                LogTarget::ConsoleAndFile,
            ),
            Failure::Execute(err) => {
                let prefix = format!("Command execution failed for '{command}'.");
                let text = err.to_string();
                // Usage lines go to the console only; the file gets the headline.
                match text.split_once("\nUsage:") {
                    Some((head, tail)) => {
                        logger.error(
                            format!("{prefix} {head}\nUsage:{tail}"),
                            LogTarget::ConsoleOnly,
                        );
                        logger.error(format!("{prefix} {}", head.trim()), LogTarget::FileOnly);
                    }
                    None => logger.error(format!("{prefix} {text}"), LogTarget::ConsoleAndFile),
                }
            }
        }
    }
}
