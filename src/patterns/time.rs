/// `H:MM` or `HH:MM` on a 24-hour clock, with an optional am/pm marker in any
/// case and an optional space before it.
pub const TIME_PATTERN: &str = r"\b(?:[01]?\d|2[0-3]):[0-5]\d(?:\s?[AaPp][Mm])?\b";
