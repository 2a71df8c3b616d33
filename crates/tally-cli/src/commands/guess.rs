use std::io::{self, BufRead, Write};

use tally_core::domain::guess::{GuessGame, GuessHint, Scoreboard, MAX_SECRET, MIN_SECRET};

use crate::console::Console;

/// Draw a secret in `[MIN_SECRET, MAX_SECRET]` from the OS random source.
pub fn random_secret() -> io::Result<i64> {
    let mut buf = [0u8; 4];
    getrandom::getrandom(&mut buf)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("random source failed: {}", e)))?;
    let span = (MAX_SECRET - MIN_SECRET + 1) as u32;
    Ok(MIN_SECRET + i64::from(u32::from_le_bytes(buf) % span))
}

/// Play rounds until the player declines another or input ends.
pub fn run<R, W, F>(console: &mut Console<R, W>, mut draw_secret: F) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> io::Result<i64>,
{
    let mut board = Scoreboard::new();

    loop {
        let mut game = GuessGame::new(draw_secret()?);
        console.banner(&format!(
            "\nI picked a number between {} and {}. Try to guess it!",
            MIN_SECRET, MAX_SECRET
        ))?;

        loop {
            let Some(line) = console.prompt("Your guess: ")? else {
                return Ok(());
            };
            let Ok(n) = line.trim().parse::<i64>() else {
                console.error(&format!(
                    "'{}' is not a number between {} and {}",
                    line.trim(),
                    MIN_SECRET,
                    MAX_SECRET
                ))?;
                continue;
            };
            match game.guess(n) {
                Err(err) => console.error(&err.to_string())?,
                Ok(GuessHint::Correct { attempts }) => {
                    console.say(&GuessHint::Correct { attempts }.to_string())?;
                    if board.record(attempts) {
                        console.info(&format!("New personal best: {} attempts", attempts))?;
                    } else if let Some(best) = board.best() {
                        console.info(&format!("Best so far: {} attempts", best))?;
                    }
                    break;
                }
                Ok(hint) => console.say(&hint.to_string())?,
            }
        }

        let again = console.prompt_text("Play again? (y/n): ")?;
        if !again.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{console, output};

    #[test]
    fn test_random_secret_in_range() {
        for _ in 0..50 {
            let secret = random_secret().unwrap();
            assert!((MIN_SECRET..=MAX_SECRET).contains(&secret));
        }
    }

    #[test]
    fn test_two_rounds_track_best() {
        let mut c = console("50\n0\nabc\n25\ny\n25\nn\n");
        run(&mut c, || Ok(25)).unwrap();
        let out = output(c);
        assert!(out.contains("The secret number is lower"));
        assert!(out.contains("The guess must be between 1 and 100 (got 0)"));
        assert!(out.contains("'abc' is not a number"));
        assert!(out.contains("Correct! You found it in 2 attempts"));
        assert!(out.contains("New personal best: 2 attempts"));
        assert!(out.contains("Correct! You found it in 1 attempts"));
        assert!(out.contains("New personal best: 1 attempts"));
    }

    #[test]
    fn test_eof_mid_round_ends_game() {
        let mut c = console("10\n");
        run(&mut c, || Ok(90)).unwrap();
        assert!(output(c).contains("The secret number is higher"));
    }
}
