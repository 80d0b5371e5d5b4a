/// Boolean as the gateway writes it: the literal `true` is true, anything else
/// (including `false`, `1`, an empty string) is false.
///
/// Every boolean-bearing field goes through this function so the truthiness
/// rule stays identical across resources.
pub fn decode_flag(raw: &str) -> bool {
    raw.trim() == "true"
}

#[cfg(test)]
mod tests {
    use super::decode_flag;

    #[test]
    fn only_literal_true_is_true() {
        assert!(decode_flag("true"));
        assert!(decode_flag(" true "));
        assert!(!decode_flag("false"));
        assert!(!decode_flag("TRUE"));
        assert!(!decode_flag("1"));
        assert!(!decode_flag(""));
    }
}
