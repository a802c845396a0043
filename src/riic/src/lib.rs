//! # riic
//!
//! Game data preparation for the riic base planner.
//!
//! This library provides functionality to:
//! - Fetch the character, building and constants tables from the game-data mirror
//! - Filter out tokens, traps and unobtainable characters
//! - Flatten base skill tiers, inline or through a shared skill table
//! - Extract facility stats, text colors and glossary terms
//! - Cache operator, skill, elite, facility and item icons as lossy WebP
//!
//! ## Example
//!
//! ```no_run
//! use riic::{Config, UreqSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let source = UreqSource::new(config.timeout(), config.user_agent.as_deref());
//!
//! let summary = riic::run(&config, &source)?;
//! println!("{} operators, {} images saved", summary.operators, summary.images.saved);
//! # Ok(())
//! # }
//! ```

mod de;

pub mod asset;
pub mod config;
pub mod error;
pub mod facility;
pub mod image_cache;
pub mod operator;
pub mod output;
pub mod pipeline;
pub mod reference;
pub mod skill;
pub mod source;
pub mod terms;

// Re-export commonly used items
#[doc(inline)]
pub use asset::AssetCategory;
#[doc(inline)]
pub use config::{Config, ConfigError, SkillLayout};
#[doc(inline)]
pub use error::DataError;
#[doc(inline)]
pub use image_cache::{CacheError, CacheOutcome, CacheStats, ImageCache};
#[doc(inline)]
pub use operator::{is_operator, CharacterKind, CharacterRecord, Operator, Profession};
#[doc(inline)]
pub use output::WriteError;
#[doc(inline)]
pub use pipeline::{run, PipelineError, Summary};
#[doc(inline)]
pub use source::{FetchError, GameTable, HttpSource, Server, UreqSource};
