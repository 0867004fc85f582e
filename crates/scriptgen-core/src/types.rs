use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSection {
    pub title: String,
    pub content: String,
    pub sub_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedScript {
    pub title: String,
    pub hook: String,
    pub introduction: String,
    pub main_sections: Vec<ScriptSection>,
    pub conclusion: String,
    pub tags: Vec<String>,
    pub estimated_duration: String,
}

/// Counts shown in the metadata view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStats {
    pub sections: usize,
    pub sub_points: usize,
    pub tags: usize,
}

impl GeneratedScript {
    pub fn total_sub_points(&self) -> usize {
        self.main_sections.iter().map(|s| s.sub_points.len()).sum()
    }

    pub fn stats(&self) -> ScriptStats {
        ScriptStats {
            sections: self.main_sections.len(),
            sub_points: self.total_sub_points(),
            tags: self.tags.len(),
        }
    }
}
