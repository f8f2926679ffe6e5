//! Story model
//!
//! A single entry of the story list.

use serde::{Deserialize, Serialize};

/// A story as delivered by the story source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    /// Link target of the title
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
    /// Identifier, unique within a story list
    #[serde(rename = "objectID")]
    pub object_id: u64,
}

#[cfg(test)]
impl Story {
    pub fn new(object_id: u64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            author: String::new(),
            num_comments: 0,
            points: 0,
            object_id,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_stats(mut self, num_comments: u32, points: u32) -> Self {
        self.num_comments = num_comments;
        self.points = points;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_uses_wire_name() {
        let story = Story::new(7, "Tokio", "https://tokio.rs/");
        let json = serde_json::to_string(&story).unwrap();
        assert!(json.contains("\"objectID\":7"));
        assert!(!json.contains("object_id"));
    }

    #[test]
    fn test_deserialize_from_wire_format() {
        let json = r#"{
            "title": "Redux",
            "url": "https://redux.js.org/",
            "author": "Dan Abramov, Andrew Clark",
            "num_comments": 2,
            "points": 5,
            "objectID": 1
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.object_id, 1);
        assert_eq!(story.title, "Redux");
        assert_eq!(story.num_comments, 2);
        assert_eq!(story.points, 5);
    }
}
