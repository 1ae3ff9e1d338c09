use std::collections::HashMap;

/// Values keyed by leading digits of an E.164 number (without `+`); lookups
/// return the entry with the longest matching prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMap<T> {
    entries: HashMap<String, T>,
    longest: usize,
}

impl<T> PrefixMap<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            longest: 0,
        }
    }

    /// Returns `false` when `prefix` is empty or not all digits.
    pub fn insert(&mut self, prefix: &str, value: T) -> bool {
        let prefix = prefix.trim().trim_start_matches('+');
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        self.longest = self.longest.max(prefix.len());
        self.entries.insert(prefix.to_string(), value);
        true
    }

    pub fn longest_match(&self, digits: &str) -> Option<&T> {
        let digits = digits.trim_start_matches('+');
        if !digits.is_ascii() {
            return None;
        }
        let upper = self.longest.min(digits.len());
        (1..=upper)
            .rev()
            .find_map(|len| self.entries.get(&digits[..len]))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for PrefixMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::PrefixMap;

    #[test]
    fn longest_prefix_wins() {
        let mut map = PrefixMap::new();
        assert!(map.insert("1", "NANP"));
        assert!(map.insert("1415", "San Francisco, CA"));
        assert!(map.insert("+1415555", "Test exchange"));

        assert_eq!(map.longest_match("14155552671"), Some(&"Test exchange"));
        assert_eq!(map.longest_match("+14156660000"), Some(&"San Francisco, CA"));
        assert_eq!(map.longest_match("12125550123"), Some(&"NANP"));
        assert_eq!(map.longest_match("442079460958"), None);
    }

    #[test]
    fn short_input_does_not_overrun() {
        let mut map = PrefixMap::new();
        map.insert("14155", "x");
        assert_eq!(map.longest_match("14"), None);
        assert_eq!(map.longest_match(""), None);
    }

    #[test]
    fn insert_rejects_non_digit_prefixes() {
        let mut map = PrefixMap::new();
        assert!(!map.insert("", 1));
        assert!(!map.insert("1-415", 1));
        assert!(map.is_empty());
    }
}
