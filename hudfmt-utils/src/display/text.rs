//! Plain text helpers

/// Keep only the ASCII digits `0`-`9` of `input`, in order
pub fn filter_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
