pub mod view_context;

pub use view_context::ViewContext;
