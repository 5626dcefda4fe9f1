//! Amplitude and spectrogram plots of labeled segments.

mod layout;
mod reduce;
mod renderer;

pub use layout::{PlotLayout, PlotSettings};
pub use reduce::{amplitude_points, spectrogram_columns};
pub use renderer::Plotter;
