//! silhouette-region - Region processing on masks
//!
//! This crate provides seed fill operations:
//!
//! - [`floodfill`] repaints the connected region around a seed in place
//! - [`background_reachable`] marks every background pixel connected to a
//!   seed, the first step of closing the holes inside a silhouette outline
//!
//! # Examples
//!
//! ```
//! use silhouette_region::{floodfill, ConnectivityType};
//! use silhouette_core::{Channels, Image};
//!
//! let image = Image::new(10, 10, Channels::Gray).unwrap();
//! let mut image_mut = image.try_into_mut().unwrap();
//!
//! // Fill from seed point
//! let count = floodfill(&mut image_mut, 5, 5, 255, ConnectivityType::FourWay).unwrap();
//! assert_eq!(count, 100); // All 100 pixels filled
//! ```

mod error;
pub mod seedfill;

pub use error::{RegionError, RegionResult};
pub use seedfill::{ConnectivityType, background_reachable, floodfill};
