//! Stage catalog for the live pipeline track

/// One phase of the external research pipeline, as shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub model: &'static str,
    /// Hex color token, e.g. `#c8f7a0`
    pub color: &'static str,
}

pub const STAGES: [StageDescriptor; 5] = [
    StageDescriptor {
        id: "task",
        label: "Task Agent",
        icon: "⬡",
        description: "Decomposes query into 3–5 research tasks",
        model: "llama-3.1-8b-instant",
        color: "#c8f7a0",
    },
    StageDescriptor {
        id: "retrieval",
        label: "Retriever",
        icon: "◈",
        description: "Fetches web sources via Tavily for each task",
        model: "llama-3.1-8b-instant + Tavily",
        color: "#a0d4f7",
    },
    StageDescriptor {
        id: "synthesis",
        label: "Synthesizer",
        icon: "◎",
        description: "Merges findings into unified summaries",
        model: "llama-3.1-8b-instant",
        color: "#f7d6a0",
    },
    StageDescriptor {
        id: "gap",
        label: "Gap Detector",
        icon: "◑",
        description: "Identifies missing coverage and weak areas",
        model: "llama-3.1-8b-instant",
        color: "#f7a0c8",
    },
    StageDescriptor {
        id: "report",
        label: "Report Agent",
        icon: "▣",
        description: "Generates structured final research report",
        model: "llama-3.1-8b-instant",
        color: "#c8a0f7",
    },
];

pub fn stage_count() -> usize {
    STAGES.len()
}
