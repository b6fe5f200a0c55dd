//! Core types for referee game-card schedule imports.
//!
//! Defines the canonical [`Game`] record, the loosely typed [`RawGame`] every
//! extractor emits, the [`ScheduleParser`] trait, the field normalizer and the
//! crew labelling rule shared by extractors and card rendering.

pub mod crew;
pub mod datetime;
pub mod error;
pub mod game;
pub mod normalize;
pub mod parser;
pub mod raw;
pub mod saved;
pub mod util;

pub use crew::{RoleKind, assign_slots, infer_referee_role_labels, labeled_crew};
pub use error::ParseError;
pub use game::{Contact, Game, Official};
pub use normalize::{CANONICAL_KEYS, normalize, normalize_raw};
pub use parser::{Diagnostics, ParserFn, ScheduleParser};
pub use raw::RawGame;
pub use saved::{MappingProfile, SavedSchedule};
