//! Error types for the frame builder

use thiserror::Error;

use crate::ids::{MemberId, NodeId, SectionId};

/// Main error type for model-building operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Node {0} not found in model")]
    NodeNotFound(NodeId),

    #[error("Member {0} not found in model")]
    MemberNotFound(MemberId),

    #[error("Section {0} not found in model")]
    SectionNotFound(SectionId),

    #[error("Material '{0}' not found in model")]
    MaterialNotFound(String),

    #[error("Split distance {distance} is outside member length {length}")]
    SplitOutOfRange { distance: f64, length: f64 },

    #[error("Node {node} is not part of member {member}")]
    NodeNotInMember { node: NodeId, member: MemberId },

    #[error("Cannot split {direction} from the {endpoint} node {node}")]
    SplitPastEndpoint {
        node: NodeId,
        direction: &'static str,
        endpoint: &'static str,
    },

    #[error("Point projects outside member span (t = {0})")]
    OutsideSpan(f64),

    #[error("Members {0} and {1} do not share a node")]
    NoSharedNode(MemberId, MemberId),

    #[error("No member spans the point ({0}, {1}, {2})")]
    NoMemberSpansPoint(f64, f64, f64),

    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("Member would have zero length: both ends are node {0}")]
    DegenerateMember(NodeId),

    #[error("Area loads need at least 3 nodes, got {0}")]
    TooFewAreaLoadNodes(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for frame-building operations
pub type FrameResult<T> = Result<T, FrameError>;
