use serde::Serialize;
use titro_core::error::TitroError;

pub fn print<T: Serialize>(value: &T) -> Result<(), TitroError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
