//! Interactive stdin prompts.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

/// Print `message`, then read one line from stdin with the line ending
/// stripped.
pub fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("reading from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Interpret an agent-count answer.  Blank means `recommended`.
pub fn parse_agent_count(answer: &str, recommended: usize) -> Result<usize> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(recommended);
    }
    let n: usize = answer
        .parse()
        .with_context(|| format!("'{answer}' is not a valid number of agents"))?;
    if n == 0 {
        bail!("number of agents must be at least 1");
    }
    Ok(n)
}
