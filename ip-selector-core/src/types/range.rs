use serde::{Deserialize, Serialize};

use super::BlankLinePolicy;

/// Ordered CIDR ranges exactly as the operator typed them.
///
/// No dedup and no CIDR validation; the backend rejects what it cannot use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressRangeList(Vec<String>);

impl AddressRangeList {
    /// Trim the whole text, then split it into lines.
    ///
    /// An empty editor yields a single empty string under
    /// [`BlankLinePolicy::Preserve`].
    pub fn parse(raw: &str, policy: BlankLinePolicy) -> Self {
        let lines = raw
            .trim()
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line));

        let ranges = match policy {
            BlankLinePolicy::Preserve => lines.map(str::to_string).collect(),
            BlankLinePolicy::Skip => lines
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        };
        Self(ranges)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for AddressRangeList {
    fn from(ranges: Vec<String>) -> Self {
        Self(ranges)
    }
}

impl<'a> IntoIterator for &'a AddressRangeList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_blank_lines() {
        let list = AddressRangeList::parse(
            "  1.1.1.0/24\n\n104.16.0.0/13\n  \n172.64.0.0/13\n\n",
            BlankLinePolicy::Preserve,
        );
        assert_eq!(
            list.as_slice(),
            ["1.1.1.0/24", "", "104.16.0.0/13", "  ", "172.64.0.0/13"]
        );
    }

    #[test]
    fn skip_policy_drops_blank_lines_only() {
        let list = AddressRangeList::parse(
            "1.1.1.0/24\n\n  \n 104.16.0.0/13",
            BlankLinePolicy::Skip,
        );
        assert_eq!(list.as_slice(), ["1.1.1.0/24", " 104.16.0.0/13"]);
    }

    #[test]
    fn empty_input() {
        let preserved = AddressRangeList::parse("   \n ", BlankLinePolicy::Preserve);
        assert_eq!(preserved.as_slice(), [""]);

        let skipped = AddressRangeList::parse("", BlankLinePolicy::Skip);
        assert!(skipped.is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let list = AddressRangeList::parse("1.1.1.0/24\r\n1.0.0.0/24", BlankLinePolicy::Preserve);
        assert_eq!(list.as_slice(), ["1.1.1.0/24", "1.0.0.0/24"]);
    }

    #[test]
    fn serializes_as_json_array() {
        let list = AddressRangeList::from(vec!["1.1.1.0/24".to_string(), String::new()]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["1.1.1.0/24",""]"#);
    }
}
