//! Browser-style session history: a list of visited locations and a cursor.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new location, dropping anything ahead of the cursor.
    pub fn push(&mut self, url: &str) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(url.to_string());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Overwrite the current location, or push when history is empty.
    pub fn replace(&mut self, url: &str) {
        match self.cursor {
            Some(c) => self.entries[c] = url.to_string(),
            None => self.push(url),
        }
    }

    pub fn back(&mut self) -> Option<&str> {
        let c = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(c);
        Some(&self.entries[c])
    }

    pub fn forward(&mut self) -> Option<&str> {
        let c = self.cursor? + 1;
        if c >= self.entries.len() {
            return None;
        }
        self.cursor = Some(c);
        Some(&self.entries[c])
    }

    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|c| self.entries[c].as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new();
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);

        history.push("/");
        history.push("/pastes");
        history.push("/paste/ab12");

        assert_eq!(history.back(), Some("/pastes"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), Some("/"));
        assert_eq!(history.forward(), Some("/pastes"));
        assert_eq!(history.forward(), Some("/paste/ab12"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = History::new();
        history.push("/");
        history.push("/pastes");
        history.back();
        history.push("/about");

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some("/about"));
        assert_eq!(history.forward(), None);
        assert_eq!(history.back(), Some("/"));
    }

    #[test]
    fn test_replace() {
        let mut history = History::new();
        history.replace("/");
        assert_eq!(history.current(), Some("/"));

        history.push("/pastes");
        history.replace("/about");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some("/about"));
    }
}
