//! The five layout families. Each exposes `render(data, theme) -> Markup`
//! producing the page content; the page wrapper is added by `render::render_family`.

pub mod bold;
pub mod classic;
pub mod minimal;
pub mod modern;
pub mod sidebar;
