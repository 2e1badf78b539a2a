//! Animation handler: the default action of the binary.

use anyhow::{bail, Result};
use std::io::{self, Read, Write};
use tracing::{debug, warn};

use typeanim::{decode_text, strip_tags, Animator, AnimatorConfig, NoPacer, RESET};

/// Options for one animation run, taken from the command line.
#[derive(Debug, Clone)]
pub struct PlayArgs {
    pub text: Option<String>,
    pub speed: String,
    pub mode: String,
    pub no_delay: bool,
    pub plain: bool,
}

/// Animate the given text (or stdin) to stdout.
///
/// Speed and mode are validated before input is read, so a bad value
/// never produces output.
pub fn handle_play(args: PlayArgs) -> Result<()> {
    let config = AnimatorConfig::from_names(&args.speed, &args.mode)?;
    let text = read_text(args.text)?;

    if args.plain {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", strip_tags(&text))?;
        return Ok(());
    }

    install_interrupt_handler();

    // Unlocked handle: the interrupt handler needs to take the lock too
    let mut stdout = io::stdout();
    if args.no_delay {
        Animator::with_pacer(config, NoPacer).animate(&text, &mut stdout)?;
    } else {
        Animator::new(config).animate(&text, &mut stdout)?;
    }
    Ok(())
}

/// Use the TEXT argument, or all of stdin when it is piped.
fn read_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if atty::is(atty::Stream::Stdin) {
        bail!("No text given. Pass TEXT or pipe text on standard input.");
    }

    let mut bytes = Vec::new();
    io::stdin().lock().read_to_end(&mut bytes)?;
    debug!(bytes = bytes.len(), "read text from stdin");

    let text = decode_text(bytes)?;
    Ok(trim_final_newline(text))
}

/// Drop one trailing line ending, so piped `echo` output does not animate
/// an extra blank line before the closing newline.
fn trim_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// On Ctrl-C, leave the terminal in the default color before exiting.
#[cfg(not(tarpaulin_include))]
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let mut out = io::stdout();
        let _ = writeln!(out, "{}", RESET);
        let _ = out.flush();
        std::process::exit(130);
    });

    if let Err(e) = result {
        warn!("Could not install Ctrl-C handler: {}", e);
    }
}
