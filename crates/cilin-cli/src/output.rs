use cilin_core::CilinResult;
use serde::Serialize;

/// Render `value` as pretty JSON, or fall back to the human rendering.
pub fn render<T: Serialize>(json: bool, value: &T, human: impl FnOnce() -> String) -> CilinResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(human())
    }
}

/// Print the rendering of `value` to stdout.
pub fn emit<T: Serialize>(json: bool, value: &T, human: impl FnOnce() -> String) -> CilinResult<()> {
    println!("{}", render(json, value, human)?);
    Ok(())
}
