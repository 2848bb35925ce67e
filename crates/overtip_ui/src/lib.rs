//! GPUI window host, tooltip views and theming for overtip.

pub mod host;
pub mod layout;
pub mod theme;
pub mod tooltip;

pub use host::GpuiHost;
pub use theme::{OvertipTheme, ThemeColors};
pub use tooltip::{RichTooltip, TooltipView};
