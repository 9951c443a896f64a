//! Named phases of the chain walk, used only for tracing spans and
//! debug assertions — never branched on for correctness.

/// Where the walk currently is, for `tracing::Span::record` and
/// `debug_assert!` messages. Not part of the public API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum MergeState {
    HullMerge,
    IncomingRay,
    ChainWalk,
    OutgoingRay,
    Assemble,
}

impl MergeState {
    pub(super) fn as_str(self) -> &'static str {
        match self {
            MergeState::HullMerge => "hull_merge",
            MergeState::IncomingRay => "incoming_ray",
            MergeState::ChainWalk => "chain_walk",
            MergeState::OutgoingRay => "outgoing_ray",
            MergeState::Assemble => "assemble",
        }
    }
}
