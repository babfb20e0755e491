pub mod number_formatter;

pub use number_formatter::format_with_separators;
