//! Types for the SAS lineage analysis API.
//!
//! This module defines the request and response types for the Stepscope
//! analysis API. The API accepts SAS DATA step code and returns the extracted
//! dataset lineage as a renderer-agnostic graph element list.

mod common;
mod request;
mod response;

// Re-export all public types
pub use common::{issue_codes, Issue, IssueCount, Severity, Summary};
pub use request::{AnalysisOptions, AnalyzeRequest, FileSource};
pub use response::{
    AnalyzeResult, EdgeElement, EdgeStyle, ElementList, LineageEdge, NodeElement, RelationKind,
};
