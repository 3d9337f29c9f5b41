// Presentation layer - the surface the engine draws onto
pub mod console;
pub mod surface;
