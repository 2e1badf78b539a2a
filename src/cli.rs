//! Command-line interface definition.

use clap::{ArgAction, Parser};
use clap_complete::Shell;

/// Typewriter-style text animation for the terminal.
#[derive(Parser, Debug)]
#[command(name = "typeanim", version)]
#[command(about = "Typewriter-style text animation for the terminal")]
#[command(long_about = "Typewriter-style text animation for the terminal.

Text is printed one character, word or sentence at a time. Spans can be
colored with inline tags: everything after !/red\\! up to the next tag
(or the end of the text) is printed in red. Use !/reset\\! to go back to
the default color. Run with --list-colors to see every tag name.

EXAMPLES:
    typeanim 'Hello !/green\\!world'
    typeanim --speed slow --mode word 'One word at a time'
    echo 'Piped! Text.' | typeanim -m sentence")]
pub struct Cli {
    /// Text to animate. Read from standard input when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Delay between units: slow, normal or fast
    #[arg(short, long, default_value = "normal", value_name = "SPEED")]
    pub speed: String,

    /// Unit size: char, word or sentence
    #[arg(short, long, default_value = "char", value_name = "MODE")]
    pub mode: String,

    /// Write units without pausing between them
    #[arg(long)]
    pub no_delay: bool,

    /// Print the text with tags removed and no colors, without animating
    #[arg(long, conflicts_with = "no_delay")]
    pub plain: bool,

    /// List color tag names, each shown in its color
    #[arg(long, conflicts_with_all = ["text", "list_speeds", "completions"])]
    pub list_colors: bool,

    /// List speeds and their delays
    #[arg(long, conflicts_with_all = ["text", "completions"])]
    pub list_speeds: bool,

    /// Print a shell completion script
    #[arg(long, value_name = "SHELL", conflicts_with = "text")]
    pub completions: Option<Shell>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
