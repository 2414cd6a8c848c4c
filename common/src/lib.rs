//! Gallery Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態遷移

pub mod catalog;
pub mod effect;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod selection;
pub mod view;

pub use catalog::{Catalog, Category, Identified, ImageRecord};
pub use effect::{PresentationEffect, ScopedEffect, Theme};
pub use error::{Error, Result};
pub use fallback::{ImageSource, SourceState};
pub use filter::{filter, filter_with, FilterState, MatchOptions};
pub use selection::{NavigationInfo, Selection};
pub use view::{CardView, Credit, ViewerKey, ViewerView, EMPTY_STATE_MESSAGE};
