mod surfaces;

pub use surfaces::{apply_control_input, update_control_surfaces};
