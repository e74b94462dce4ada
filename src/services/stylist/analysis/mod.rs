pub mod color;
pub mod descriptor;
pub mod design;
pub mod garment;
pub mod pattern;
pub mod scoring;
