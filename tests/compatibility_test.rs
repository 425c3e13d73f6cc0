use mixsort::core::StrAccessor;
use mixsort::prelude::*;

// Simulate an external struct with flat storage (like an arrow string array)
struct MockStringArray {
    data: String,
    offsets: Vec<usize>,
}

impl MockStringArray {
    fn new(strings: &[&str]) -> Self {
        let mut data = String::new();
        let mut offsets = vec![0];
        for s in strings {
            data.push_str(s);
            offsets.push(data.len());
        }
        Self { data, offsets }
    }
}

// Implement StrAccessor for the external struct.
// This proves the trait is implementable by "outside crates".
impl StrAccessor for MockStringArray {
    fn get_str(&self, index: usize) -> &str {
        let start = self.offsets[index];
        let end = self.offsets[index + 1];
        &self.data[start..end]
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mock = MockStringArray::new(&["part10", "part2", "part1"]);
    let indices = mixsort(&mock);

    // natural order: part1 (2), part2 (1), part10 (0)
    assert_eq!(indices, vec![2, 1, 0]);
}

#[test]
fn test_external_struct_tie_break() {
    // Equal mixed keys fall back to lexicographic order of the raw strings.
    let mock = MockStringArray::new(&["part1", "part01", "part001"]);
    let indices = mixsort(&mock);

    assert_eq!(indices, vec![2, 1, 0]);
}
