//! Interactive game session
//!
//! Rounds repeat until the player declines to play again. After each round the
//! player may save the remaining attempt count to the score book.

use crate::interactive::Console;
use crate::output::formatters::{
    GOODBYE, INTRO, REPLAY_QUESTION, SAVE_QUESTION, WELCOME, feedback_line, hint_line,
    secret_line,
};
use crate::output::round_result_line;
use crate::round::{RoundEngine, RoundResult, TurnOutcome};
use crate::scorebook::{DEFAULT_SCORES_FILE, ScoreEntry, append_score};
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Settings for a play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    pub scores_file: PathBuf,
    /// Print the secret after a lost round (off by default)
    pub reveal_secret: bool,
}

impl PlayConfig {
    #[must_use]
    pub fn new(scores_file: impl Into<PathBuf>) -> Self {
        Self {
            scores_file: scores_file.into(),
            reveal_secret: false,
        }
    }

    #[must_use]
    pub const fn with_reveal_secret(mut self, reveal: bool) -> Self {
        self.reveal_secret = reveal;
        self
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCORES_FILE)
    }
}

/// Tally of a finished session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub scores_saved: usize,
}

/// Run a full session: welcome, rounds, goodbye
///
/// # Errors
///
/// Returns an I/O error if the console fails, the input ends mid-prompt, or
/// the score file cannot be written.
pub fn run_play<R, I, O>(
    config: &PlayConfig,
    engine: &mut RoundEngine<R>,
    console: &mut Console<I, O>,
) -> io::Result<SessionSummary>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    console.say(WELCOME)?;
    console.say(INTRO)?;

    let mut summary = SessionSummary::default();

    loop {
        let result = play_round(config, engine, console)?;
        summary.rounds_played += 1;
        if result == RoundResult::Won {
            summary.rounds_won += 1;
        }

        if save_result(config, engine.attempts_remaining(), console)?.is_some() {
            summary.scores_saved += 1;
        }

        engine.reset();

        if !console.ask_yes_no(REPLAY_QUESTION)? {
            break;
        }
    }

    console.say(GOODBYE)?;
    info!(
        "Session over: {} of {} rounds won",
        summary.rounds_won, summary.rounds_played
    );
    Ok(summary)
}

/// Play guesses until the round ends
///
/// # Errors
///
/// Returns an I/O error if the console fails or the input ends.
pub fn play_round<R, I, O>(
    config: &PlayConfig,
    engine: &mut RoundEngine<R>,
    console: &mut Console<I, O>,
) -> io::Result<RoundResult>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    loop {
        let guess = console.read_guess(!engine.hint_used())?;

        match engine.submit_guess(&guess) {
            TurnOutcome::Hint(peg) => console.say(hint_line(peg))?,
            TurnOutcome::Feedback(feedback) => console.say(feedback_line(feedback))?,
            TurnOutcome::Finished(result) => {
                console.say(round_result_line(result))?;
                if result == RoundResult::Lost && config.reveal_secret {
                    console.say(secret_line(engine.secret()))?;
                }
                return Ok(result);
            }
        }
    }
}

/// Offer to save the result; appends to the score book on yes
///
/// # Errors
///
/// Returns an I/O error if the console fails or the score file cannot be
/// written.
pub fn save_result<I, O>(
    config: &PlayConfig,
    attempts: u8,
    console: &mut Console<I, O>,
) -> io::Result<Option<ScoreEntry>>
where
    I: BufRead,
    O: Write,
{
    if !console.ask_yes_no(SAVE_QUESTION)? {
        return Ok(None);
    }

    let entry = ScoreEntry::new(console.read_name()?, attempts);
    append_score(&config.scores_file, &entry)?;
    Ok(Some(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use crate::output::formatters::{LOSS, NAME_PROMPT, NOT_UNDERSTOOD, WIN, guess_prompt};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn scratch_scores(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "codebreaker-play-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    fn engine(values: [u8; 4]) -> RoundEngine<StdRng> {
        RoundEngine::with_secret(
            StdRng::seed_from_u64(3),
            Code::from_values(values).unwrap(),
        )
    }

    fn run(
        config: &PlayConfig,
        engine: &mut RoundEngine<StdRng>,
        input: &str,
    ) -> (io::Result<SessionSummary>, String) {
        colored::control::set_override(false);
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let result = run_play(config, engine, &mut console);
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn session_win_without_saving() {
        let config = PlayConfig::new(scratch_scores("unused"));
        let mut engine = engine([1, 2, 3, 4]);

        let (summary, text) = run(&config, &mut engine, "1234\nn\nn\n");
        let summary = summary.unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                rounds_played: 1,
                rounds_won: 1,
                scores_saved: 0
            }
        );

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                WELCOME,
                INTRO,
                guess_prompt(true).as_str(),
                WIN,
                SAVE_QUESTION,
                REPLAY_QUESTION,
                GOODBYE
            ]
        );
        assert!(!config.scores_file.exists());
    }

    #[test]
    fn session_feedback_hint_and_loss() {
        let config = PlayConfig::new(scratch_scores("loss")).with_reveal_secret(true);
        let mut engine = engine([1, 2, 3, 4]);

        let input = "3245\nhint\nbad\n5555\n6666\nn\nn\n";
        let (summary, text) = run(&config, &mut engine, input);
        let summary = summary.unwrap();

        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.rounds_won, 0);

        assert!(text.contains("Good try. Your result +--\n"));
        assert!(text.contains("I hint: "));
        assert!(text.contains(&format!("{NOT_UNDERSTOOD}\n")));
        assert!(text.contains("Good try. Your result \n"));
        assert!(text.contains(&format!("{LOSS}\nThe code was 1234\n")));

        // Hint wording disappears from the prompt once the hint is spent
        assert_eq!(text.matches(&guess_prompt(true)).count(), 2);
        assert_eq!(text.matches(&guess_prompt(false)).count(), 3);
    }

    #[test]
    fn session_loss_hides_secret_by_default() {
        let config = PlayConfig::new(scratch_scores("noreveal"));
        let mut engine = engine([1, 2, 3, 4]);

        let (summary, text) = run(&config, &mut engine, "5555\n5555\n5555\nn\nn\n");
        assert!(summary.is_ok());
        assert!(text.contains(&format!("{LOSS}\n{SAVE_QUESTION}\n")));
        assert!(!text.contains("The code was"));
    }

    #[test]
    fn session_saves_score_and_replays() {
        let path = scratch_scores("save");
        let config = PlayConfig::new(&path);
        let mut engine = engine([1, 2, 3, 4]);

        // Round one: win on the first guess and save. Round two runs against a
        // freshly generated secret, so lose it with letter-only guesses.
        let input = "1234\ny\nLesha\ny\nhhhh\nhhhh\nhhhh\nn\nn\n";
        let (summary, text) = run(&config, &mut engine, input);
        let summary = summary.unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                rounds_played: 2,
                rounds_won: 1,
                scores_saved: 1
            }
        );
        assert_eq!(text.matches(NAME_PROMPT).count(), 1);
        assert_eq!(text.matches(WELCOME).count(), 1);
        assert_eq!(text.matches(GOODBYE).count(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Lesha: 2\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn session_resets_between_rounds() {
        let config = PlayConfig::new(scratch_scores("reset"));
        let mut engine = engine([1, 2, 3, 4]);

        let input = "hint\n1234\nn\ny\nhint\nhhhh\nhhhh\nhhhh\nn\nn\n";
        let (summary, text) = run(&config, &mut engine, input);

        assert_eq!(summary.unwrap().rounds_played, 2);
        // The hint is offered again in the second round
        assert_eq!(text.matches("I hint: ").count(), 2);
        assert_eq!(engine.attempts_remaining(), 3);
        assert!(!engine.hint_used());
    }

    #[test]
    fn session_ends_with_error_on_closed_input() {
        let config = PlayConfig::new(scratch_scores("eof"));
        let mut engine = engine([1, 2, 3, 4]);

        let (summary, text) = run(&config, &mut engine, "5555\n");
        let err = summary.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(!text.contains(GOODBYE));
    }

    #[test]
    fn save_result_writes_attempts_left() {
        let path = scratch_scores("direct");
        let config = PlayConfig::new(&path);
        let mut console = Console::new("x\ny\nAnn\n".as_bytes(), Vec::new());

        let entry = save_result(&config, 1, &mut console).unwrap();
        assert_eq!(entry, Some(ScoreEntry::new("Ann", 1)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Ann: 1\n");

        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(text.matches(SAVE_QUESTION).count(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_result_declined() {
        let config = PlayConfig::new(scratch_scores("declined"));
        let mut console = Console::new("n\n".as_bytes(), Vec::new());

        assert_eq!(save_result(&config, 2, &mut console).unwrap(), None);
        assert!(!config.scores_file.exists());
    }

    #[test]
    fn default_config_uses_scores_file() {
        let config = PlayConfig::default();
        assert_eq!(config.scores_file, PathBuf::from("scores"));
        assert!(!config.reveal_secret);
    }
}
