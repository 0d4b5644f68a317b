pub mod renderer;
pub mod result_node;
pub mod results_render;

// Re-export public types
pub use renderer::{LinkRenderer, ResultRenderer, TitleRenderer, renderer_for};
pub use result_node::ResultNode;
