//! Command implementations
//!
//! Thin line-oriented shells over the game engine. Each reads whole words from
//! stdin and feeds them to the engine one letter at a time.

pub mod duel;
pub mod menu;
pub mod play;

pub use duel::run_duel;
pub use menu::{StartMode, run_menu};
pub use play::run_play;

use crate::game::{GameEngine, PresentationSink, RoleCoordinator, SubmitOutcome};
use std::io::{self, Write};

/// Where a shell goes when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Menu,
    Quit,
}

/// Get user input with a prompt; `None` on end of input
pub(crate) fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Whether `input` asks to leave the current shell
pub(crate) fn is_quit(input: &str) -> bool {
    matches!(
        input.to_ascii_lowercase().as_str(),
        "quit" | "q" | "exit" | ":q"
    )
}

/// Type `word` into the engine and submit it
///
/// Partial input left in the row is cleared again so the next word starts
/// from an empty row.
pub(crate) fn enter_word<S: PresentationSink>(
    engine: &mut GameEngine<'_, S>,
    word: &str,
) -> SubmitOutcome {
    for letter in word.chars() {
        engine.press_letter(letter);
    }
    let outcome = engine.submit();
    if outcome == SubmitOutcome::Ignored {
        while engine.backspace() {}
    }
    outcome
}

/// Type `word` for the current guesser and submit it through the coordinator
///
/// Clears a rejected partial row the same way [`enter_word`] does.
pub(crate) fn enter_duel_guess<S: PresentationSink>(
    coordinator: &mut RoleCoordinator<'_, S>,
    word: &str,
) -> SubmitOutcome {
    for letter in word.chars() {
        coordinator.press_letter(letter);
    }
    let outcome = coordinator.submit();
    if outcome == SubmitOutcome::Ignored {
        while coordinator.backspace() {}
    }
    outcome
}
