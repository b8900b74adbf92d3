use serde::{Deserialize, Serialize};

/// A catalog entry. The field names serialize in camelCase to match the
/// persisted `library_books` layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub description: String,
    pub cover_url: String,
    pub publish_year: i32,
    pub total_copies: u32,
    pub available_copies: u32,
    pub rating: f64,
}

impl Book {
    /// Apply a copy-count change, clamped so that
    /// `0 <= available_copies <= total_copies` always holds.
    pub fn adjust_available(&mut self, delta: i32) {
        let adjusted = i64::from(self.available_copies) + i64::from(delta);
        self.available_copies = adjusted.clamp(0, i64::from(self.total_copies)) as u32;
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book {
            id: "1".to_string(),
            title: "Test".to_string(),
            author: "Author".to_string(),
            isbn: "000".to_string(),
            genre: "Fantasy".to_string(),
            description: String::new(),
            cover_url: String::new(),
            publish_year: 2000,
            total_copies: 3,
            available_copies: 2,
            rating: 4.0,
        }
    }

    #[test]
    fn adjust_clamps_at_total_copies() {
        let mut b = book();
        b.adjust_available(1);
        assert_eq!(b.available_copies, 3);
        b.adjust_available(1);
        assert_eq!(b.available_copies, 3);
        b.adjust_available(5);
        assert_eq!(b.available_copies, 3);
    }

    #[test]
    fn adjust_clamps_at_zero() {
        let mut b = book();
        b.adjust_available(-2);
        assert_eq!(b.available_copies, 0);
        assert!(!b.is_available());
        b.adjust_available(-1);
        assert_eq!(b.available_copies, 0);
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(book()).unwrap();
        assert_eq!(json["availableCopies"], 2);
        assert_eq!(json["totalCopies"], 3);
        assert_eq!(json["publishYear"], 2000);
        assert!(json.get("coverUrl").is_some());
    }
}
