pub mod bootstrap;
pub mod canonical_link;
pub mod menu_renderer;
