//! Console message text
//!
//! Every line the game prints lives here so the driver and the tests agree on
//! the exact wording.

use crate::core::{Code, Feedback, HINT_WORD, Peg};

pub const WELCOME: &str = "Welcome to CodeBreaker!";
pub const INTRO: &str = "Try to guess what I propose";
pub const NOT_UNDERSTOOD: &str = "I don't understand... Try again";
pub const WIN: &str = "Congratulate! You won!";
pub const LOSS: &str = "You lose, unfortunately...";
pub const SAVE_QUESTION: &str = "Do you want to save your result? (y / n)";
pub const NAME_PROMPT: &str = "Enter your name:";
pub const REPLAY_QUESTION: &str = "Do you want to play again? (y / n)";
pub const GOODBYE: &str = "See you soon";
pub const NO_SCORES: &str = "No scores saved yet";

/// Prompt for the next guess; mentions the hint only while it is available
#[must_use]
pub fn guess_prompt(hint_available: bool) -> String {
    let hint = if hint_available {
        format!(" or '{HINT_WORD}'")
    } else {
        String::new()
    };
    format!("Enter your guess (four numbers between 1 and 6{hint}):")
}

#[must_use]
pub fn hint_line(peg: Peg) -> String {
    format!("I hint: {peg} exist")
}

/// Line shown after a miss that leaves attempts
#[must_use]
pub fn feedback_line(feedback: Feedback) -> String {
    format!("Good try. Your result {feedback}")
}

/// Line revealing the secret after a lost round
#[must_use]
pub fn secret_line(secret: &Code) -> String {
    format!("The code was {secret}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guess;

    #[test]
    fn guess_prompt_with_hint() {
        assert_eq!(
            guess_prompt(true),
            "Enter your guess (four numbers between 1 and 6 or 'hint'):"
        );
    }

    #[test]
    fn guess_prompt_without_hint() {
        assert_eq!(
            guess_prompt(false),
            "Enter your guess (four numbers between 1 and 6):"
        );
    }

    #[test]
    fn hint_line_names_peg() {
        assert_eq!(hint_line(Peg::new(3).unwrap()), "I hint: 3 exist");
    }

    #[test]
    fn feedback_line_renders_sorted_symbols() {
        let secret = Code::from_values([1, 2, 3, 4]).unwrap();
        let feedback = Feedback::calculate(&secret, &Guess::parse("1235").unwrap());
        assert_eq!(feedback_line(feedback), "Good try. Your result +++");
    }

    #[test]
    fn feedback_line_empty() {
        assert_eq!(feedback_line(Feedback::default()), "Good try. Your result ");
    }

    #[test]
    fn secret_line_shows_digits() {
        let secret = Code::from_values([6, 1, 6, 2]).unwrap();
        assert_eq!(secret_line(&secret), "The code was 6162");
    }
}
