pub mod manual;
pub mod node;
pub mod overrides;

pub use manual::{
    CALLOUT_ONLY_OVERVIEW, DEFAULT_DEPARTMENT, Grade, ManualDocument, RESTRICTED_MARKER, Status,
};
pub use node::Node;
pub use overrides::{DocumentOverride, HeadingLabel, OverrideTable, SectionKind, canonical_headings};
