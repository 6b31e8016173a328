use serde::Serialize;
use shortlist_core::error::ShortlistError;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), ShortlistError> {
    println!("{}", to_string(value)?);
    Ok(())
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, ShortlistError> {
    Ok(serde_json::to_string_pretty(value)?)
}
