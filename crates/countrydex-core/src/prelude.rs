//! countrydex prelude: bring common types and traits into scope.

pub use crate::carousel::{next_index, Carousel, DEFAULT_INTERVAL};
#[cfg(feature = "driver")]
pub use crate::carousel::CarouselDriver;
#[cfg(feature = "fetch")]
pub use crate::client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use crate::details::{CountryDetails, DetailState};
pub use crate::error::{DexError, Result};
pub use crate::filter::{filter, Criteria};
pub use crate::group::{group, regions, ALL_REGIONS};
pub use crate::model::{Country, Directory, DirectoryStats};
pub use crate::page::{paginate, PageInfo, PAGE_SIZE};
pub use crate::state::{Action, DirectoryState, DirectoryView, LoadStatus, Notice, RegionSection};
pub use crate::text::MatchMode;
pub use crate::traits::{CountrySearch, NameMatch};
