/// A single statement row decoded from the workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub description: String,
    /// Signed: negative = expense, positive = income.
    pub amount: f64,
    /// MM/DD/YYYY, as the statement format renders dates.
    pub date: String,
    /// Running balance carried on the row, trusted verbatim. No arithmetic
    /// relationship with `amount` across rows is enforced.
    pub savings: f64,
}

/// Category label -> accumulated amount, keyed by the exact label text.
///
/// Keys keep first-appearance order so the breakdown renders stably across
/// runs. Labels are not normalized: "Food" and "food" are two categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str, amount: f64) {
        if let Some((_, total)) = self.entries.iter_mut().find(|(l, _)| l == label) {
            *total += amount;
        } else {
            self.entries.push((label.to_string(), amount));
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, t)| *t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, t)| (l.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-user record persisted as `key=value` lines, keyed by phone number.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub mobile_number: String,
    pub name: String,
    pub email: String,
    pub profile_picture_uri: String,
}
