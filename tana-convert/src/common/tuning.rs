//! Named tunable constants
//!
//! Every heuristic threshold used by the converter lives here under a name,
//! never inline at the call site. The values are inherited from the source
//! material without a documented derivation; they are defaults, not claims of
//! optimality. The operationally interesting ones (chunk sizes, detector
//! minimums) are also surfaced through the `tana-config` crate.

/// Columns counted for one literal tab when measuring indentation.
pub const TAB_COLUMNS: usize = 2;

/// Maximum size in bytes of one transcript chunk.
pub const TRANSCRIPT_CHUNK_MAX: usize = 7_000;

/// Chunks below this size are avoided when more text remains.
pub const TRANSCRIPT_CHUNK_MIN: usize = 100;

/// Cap on the boundary-search window around a chunk's target cut position.
pub const CHUNK_WINDOW_CAP: usize = 500;

/// Rendered pastes above this size are split into multiple headed pieces.
pub const PASTE_SPLIT_SIZE: usize = 90_000;

/// Fingerprint lines required before the Pendant renderer claims an input.
pub const PENDANT_MIN_LINES: usize = 3;

/// Weekday+time stamp lines required before the App renderer claims an input.
pub const APP_MIN_TIMESTAMPS: usize = 2;

/// Name-then-blank line pairs required before the App renderer claims an input.
pub const APP_MIN_SPEAKER_LINES: usize = 2;

/// A speaker-name line has at most this many words.
pub const APP_SPEAKER_MAX_WORDS: usize = 4;

/// A field key has at most this many words.
pub const FIELD_KEY_MAX_WORDS: usize = 3;

/// A short field value has at most this many words.
pub const FIELD_VALUE_MAX_WORDS: usize = 3;

/// A capitalized field value has at most this many words.
pub const FIELD_CAPITALIZED_VALUE_MAX_WORDS: usize = 5;

/// Bare 4-digit tokens outside this window are not treated as years.
pub const YEAR_MIN: i32 = 1900;
/// See [`YEAR_MIN`].
pub const YEAR_MAX: i32 = 2099;
