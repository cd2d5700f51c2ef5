// Template catalog, layout family mapping and theme resolution.

pub mod handlers;
pub mod registry;
pub mod theme;

pub use registry::{family_for, LayoutFamily};
pub use theme::Theme;
