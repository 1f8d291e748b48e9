pub mod extrema;
pub mod interpolation;
pub mod smoothing;
pub mod velocity;
