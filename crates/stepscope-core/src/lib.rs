pub mod analyzer;
pub mod extractor;
pub mod graph;
pub mod style;
pub mod types;

// Re-export main types and functions
pub use analyzer::analyze;
pub use extractor::{extract, Extraction};
pub use graph::{build, DEFAULT_ROOT_HINT};
pub use style::{edge_style, highlight_stylesheet, StyleRule};

// Re-export types explicitly
pub use types::{
    // Issue codes
    issue_codes,
    // Request types
    AnalysisOptions,
    AnalyzeRequest,
    // Response types
    AnalyzeResult,
    EdgeElement,
    EdgeStyle,
    ElementList,
    FileSource,
    Issue,
    IssueCount,
    LineageEdge,
    NodeElement,
    RelationKind,
    Severity,
    Summary,
};
