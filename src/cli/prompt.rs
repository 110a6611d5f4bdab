//! Interactive platform selection.

use crate::error::{Result, SamError};
use crate::output::Palette;
use crate::platform::Selector;
use clap::ValueEnum;
use std::io::{BufRead, Write};

/// Ask which platform to install for and read a single line of input.
///
/// Accepts a menu number or a platform name. Blocks until a line (or EOF)
/// arrives; EOF and empty answers mean no selection.
pub fn select_platform<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    palette: &Palette,
) -> Result<Selector> {
    let choices = Selector::value_variants();

    writeln!(output, "{}", palette.info("  Select a platform to install SAM for:"))?;
    for (index, selector) in choices.iter().enumerate() {
        let help = selector
            .to_possible_value()
            .and_then(|value| value.get_help().map(|help| help.to_string()))
            .unwrap_or_default();
        writeln!(output, "    {}) {:<8} {}", index + 1, selector, help)?;
    }
    write!(output, "  Platform [1-{}]: ", choices.len())?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Err(SamError::NoPlatformSelected);
    }

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(SamError::NoPlatformSelected);
    }

    if let Ok(number) = answer.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| choices.get(index))
            .copied()
            .ok_or_else(|| SamError::UnknownPlatform(answer.to_string()));
    }

    Selector::parse(answer)
}
