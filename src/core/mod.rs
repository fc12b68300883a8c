pub mod layout;
pub mod overlay;
pub mod plot_area;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod stats;
pub mod types;

pub use layout::{BarLayout, HorizontalLayout, LineLayout, MarkerSpan};
pub use overlay::{FillBand, OverlayMarkers, percentile_markers, value_line_markers};
pub use plot_area::{Padding, PlotArea};
pub use scale::{ScalePolicy, VerticalScale};
pub use series::DataSeries;
pub use stats::{Extent, order_statistic, rank_index};
pub use types::{BarRect, ScaledPoint, Viewport};
