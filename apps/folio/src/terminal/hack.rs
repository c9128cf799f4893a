//! The scripted `hack` animation: six themed status lines with a fixed
//! delay between each. No real effect.

use std::time::Duration;

const STEP_DELAY: Duration = Duration::from_secs(1);

pub const HACK_LINES: [&str; 6] = [
    "Initializing hack sequence...",
    "Bypassing security protocols...",
    "Accessing mainframe...",
    "Decrypting data...",
    "Injecting payload...",
    "Hack complete! Just kidding, this is a demo 😉",
];

/// Timed-step iterator over the hack script. Each call to `next_line`
/// waits one delay step, then yields the next line. Dropping the sequence
/// between calls abandons the remaining steps; that drop point is where an
/// abort control would hook in if one is ever needed.
pub struct HackSequence {
    steps: std::slice::Iter<'static, &'static str>,
    delay: Duration,
}

impl HackSequence {
    pub fn new() -> Self {
        Self {
            steps: HACK_LINES.iter(),
            delay: STEP_DELAY,
        }
    }

    pub async fn next_line(&mut self) -> Option<&'static str> {
        let line = self.steps.next()?;
        tokio::time::sleep(self.delay).await;
        Some(line)
    }
}

impl Default for HackSequence {
    fn default() -> Self {
        Self::new()
    }
}
