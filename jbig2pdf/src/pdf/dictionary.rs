use fnv::FnvHashMap;

use super::{Name, Value};

/// Dictionary that keeps its entries in insertion order.
///
/// The order only matters for reproducible output, readers don't care about
/// it. Overwriting a key keeps the position of the first insertion.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(Name, Value)>,
    index: FnvHashMap<Name, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert or overwrite an entry. Returns the previous value.
    ///
    /// Values are not validated, raw token text must already be valid PDF
    /// syntax.
    pub fn set(&mut self, name: impl Into<Name>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        if let Some(&i) = self.index.get(&name) {
            Some(std::mem::replace(&mut self.entries[i].1, value))
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
            None
        }
    }

    /// Builder variant of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &[u8]) -> Option<&Value> {
        self.index
            .get(&Name::from(name))
            .map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, name: &[u8]) -> Option<&mut Value> {
        match self.index.get(&Name::from(name)) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    pub fn contains_key(&self, name: &[u8]) -> bool {
        self.index.contains_key(&Name::from(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<N: Into<Name>, V: Into<Value>> FromIterator<(N, V)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (name, value) in iter {
            dict.set(name, value);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let dict = Dictionary::new()
            .with("Type", Name::from("Pages"))
            .with("Count", 0u32)
            .with("Kids", Vec::<Value>::new());

        let keys: Vec<String> = dict.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(keys, vec!["Type", "Count", "Kids"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut dict = Dictionary::new().with("Count", 0u32).with("Kids", "[]");

        let previous = dict.set("Count", 2u32);
        assert_eq!(previous, Some(Value::Integer(0)));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get(b"Count"), Some(&Value::Integer(2)));
        assert_eq!(dict.iter().next().map(|(n, _)| n.to_string()), Some("Count".to_owned()));
    }

    #[test]
    fn lookup() {
        let dict: Dictionary = [("Length", 10u32)].into_iter().collect();
        assert!(dict.contains_key(b"Length"));
        assert!(!dict.contains_key(b"Filter"));
        assert_eq!(dict.get(b"Length").and_then(Value::integer), Some(10));
    }

    #[test]
    fn equality_ignores_index() {
        let a = Dictionary::new().with("A", 1u32).with("B", 2u32);
        let mut b = Dictionary::with_capacity(8);
        b.set("A", 1u32);
        b.set("B", 2u32);
        assert_eq!(a, b);

        let c = Dictionary::new().with("B", 2u32).with("A", 1u32);
        assert_ne!(a, c);
    }
}
