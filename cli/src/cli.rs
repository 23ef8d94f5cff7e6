// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use slotbook_core::{APP_NAME, Slotbook};

use crate::cmd_appointment::{CmdAppointmentCancel, CmdAppointmentEdit, CmdAppointmentList};
use crate::cmd_book::CmdBook;
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_slots::CmdSlots;
use crate::cmd_window::{CmdWindowSet, CmdWindowShow};
use crate::config::parse_config;

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Book appointment slots against per-date availability windows.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/slotbook/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/slotbook/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(CmdSlots::command())
            .subcommand(CmdBook::command())
            .subcommand(
                Command::new("window")
                    .alias("w")
                    .about("Manage per-date availability windows")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdWindowSet::command())
                    .subcommand(CmdWindowShow::command()),
            )
            .subcommand(
                Command::new("appointment")
                    .alias("a")
                    .about("Manage booked appointments")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdAppointmentList::command())
                    .subcommand(CmdAppointmentEdit::command())
                    .subcommand(CmdAppointmentCancel::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some((CmdSlots::NAME, matches)) => Slots(CmdSlots::from(matches)),
            Some((CmdBook::NAME, matches)) => Book(CmdBook::from(matches)?),
            Some(("window", matches)) => match matches.subcommand() {
                Some((CmdWindowSet::NAME, matches)) => WindowSet(CmdWindowSet::from(matches)?),
                Some((CmdWindowShow::NAME, matches)) => WindowShow(CmdWindowShow::from(matches)),
                _ => unreachable!(),
            },
            Some(("appointment", matches)) => match matches.subcommand() {
                Some((CmdAppointmentList::NAME, matches)) => {
                    AppointmentList(CmdAppointmentList::from(matches))
                }
                Some((CmdAppointmentEdit::NAME, matches)) => {
                    AppointmentEdit(CmdAppointmentEdit::from(matches)?)
                }
                Some((CmdAppointmentCancel::NAME, matches)) => {
                    AppointmentCancel(CmdAppointmentCancel::from(matches)?)
                }
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Dashboard(CmdDashboard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands
#[derive(Debug)]
pub enum Commands {
    AppointmentCancel(CmdAppointmentCancel),
    AppointmentEdit(CmdAppointmentEdit),
    AppointmentList(CmdAppointmentList),
    Book(CmdBook),
    Dashboard(CmdDashboard),
    GenerateCompletion(CmdGenerateCompletion),
    Slots(CmdSlots),
    WindowSet(CmdWindowSet),
    WindowShow(CmdWindowShow),
}

impl Commands {
    /// Run the command with the given configuration path
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        let command = match self {
            Commands::GenerateCompletion(cmd) => return cmd.run(), // no database needed
            command => command,
        };

        let config = parse_config(config).await?;
        let book = Slotbook::new(config).await?;

        let result = match command {
            Commands::AppointmentCancel(cmd) => cmd.run(&book).await,
            Commands::AppointmentEdit(cmd) => cmd.run(&book).await,
            Commands::AppointmentList(cmd) => cmd.run(&book).await,
            Commands::Book(cmd) => cmd.run(&book).await,
            Commands::Dashboard(cmd) => cmd.run(&book).await,
            Commands::GenerateCompletion(_) => unreachable!(),
            Commands::Slots(cmd) => cmd.run(&book).await,
            Commands::WindowSet(cmd) => cmd.run(&book).await,
            Commands::WindowShow(cmd) => cmd.run(&book).await,
        };

        book.close().await?;
        result
    }
}
