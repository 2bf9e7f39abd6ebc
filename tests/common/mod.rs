#![allow(dead_code)]

pub mod cli;

pub const TRANSLATIONS: &str = r#"{
  "en": {"greeting": "Hello", "thanks": "Thank you", "farewell": "Goodbye"},
  "fr": {"greeting": "Bonjour", "thanks": "Merci", "farewell": "Au revoir"},
  "es": {"greeting": "Hola", "thanks": "Gracias"}
}"#;

pub const ISSUES: &str = r#"[
  {"id": 1, "title": "Already implemented feature", "status": "open", "implemented": true, "priority": "P1"},
  {"id": 2, "title": "Missing functionality", "status": "open", "implemented": false, "priority": "P2"},
  {"id": 3, "title": "Old request", "status": "Closed", "implemented": true, "notes": "Done long ago"}
]"#;
