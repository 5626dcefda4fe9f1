//! Segment plot rendering with plotly.
//!
//! Each segment becomes one self-contained HTML document holding an amplitude
//! panel and a spectrogram panel.

use std::fs;
use std::path::{Path, PathBuf};

use plotly::common::{ColorScale, ColorScalePalette, Font, Mode, Title};
use plotly::layout::{Axis, GridPattern, Layout, LayoutGrid};
use plotly::{HeatMap, Plot, Scatter};
use tracing::debug;

use super::reduce::{amplitude_points, spectrogram_columns};
use super::{PlotLayout, PlotSettings};
use crate::audio::{SpectrogramConfig, compute_spectrogram};
use crate::constants::PLOT_EXTENSION;
use crate::constants::plot::{
    AMPLITUDE_X_LABEL, AMPLITUDE_Y_LABEL, SPECTROGRAM_X_LABEL, SPECTROGRAM_Y_LABEL,
    TITLE_FONT_SIZE,
};
use crate::error::{Error, Result};

/// Renders labeled segments to HTML plots.
#[derive(Debug, Clone)]
pub struct Plotter {
    /// Directory receiving the plot files.
    output_dir: PathBuf,
    /// Panel arrangement.
    layout: PlotLayout,
    /// Spectrogram window settings.
    spectrogram: SpectrogramConfig,
    /// Figure sizing.
    settings: PlotSettings,
}

impl Plotter {
    /// Create a plotter writing into `output_dir` with default settings.
    #[must_use]
    pub fn new(output_dir: PathBuf, layout: PlotLayout) -> Self {
        Self {
            output_dir,
            layout,
            spectrogram: SpectrogramConfig::default(),
            settings: PlotSettings::default(),
        }
    }

    /// Use different spectrogram window settings.
    #[must_use]
    pub const fn with_spectrogram(mut self, spectrogram: SpectrogramConfig) -> Self {
        self.spectrogram = spectrogram;
        self
    }

    /// Use different figure settings.
    #[must_use]
    pub const fn with_settings(mut self, settings: PlotSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Use a different panel arrangement.
    #[must_use]
    pub const fn with_layout(mut self, layout: PlotLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Panel arrangement in use.
    pub const fn layout(&self) -> PlotLayout {
        self.layout
    }

    /// Path the plot for `label` will be written to.
    pub fn plot_path(&self, label: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{PLOT_EXTENSION}", sanitize_filename(label)))
    }

    /// Render `samples` under `label` and return the written file.
    ///
    /// # Errors
    ///
    /// Returns an error if the spectrogram settings are invalid, or the output
    /// directory or file cannot be written.
    pub fn render(&self, label: &str, samples: &[f32], sample_rate: u32) -> Result<PathBuf> {
        let plot = self.build_plot(label, samples, sample_rate)?;

        fs::create_dir_all(&self.output_dir).map_err(|e| Error::OutputDirCreateFailed {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let path = self.plot_path(label);
        write_html(&path, &plot.to_html())?;

        debug!(
            "Rendered '{label}' ({} samples, {}) to {}",
            samples.len(),
            self.layout,
            path.display()
        );

        Ok(path)
    }

    fn build_plot(&self, label: &str, samples: &[f32], sample_rate: u32) -> Result<Plot> {
        let spectrogram = spectrogram_columns(
            compute_spectrogram(samples, sample_rate, &self.spectrogram)?,
            self.settings.max_spectrogram_frames,
        );
        let (xs, ys) = amplitude_points(samples, self.settings.max_amplitude_points);

        let amplitude = Scatter::new(xs, ys)
            .mode(Mode::Lines)
            .name("amplitude")
            .x_axis("x")
            .y_axis("y");

        let heatmap = HeatMap::new(
            spectrogram.times,
            spectrogram.frequencies,
            spectrogram.power_db,
        )
        .name("spectrogram")
        .color_scale(ColorScale::Palette(ColorScalePalette::Viridis))
        .x_axis("x2")
        .y_axis("y2");

        let (rows, columns) = self.layout.grid();
        let (width, height) = self.settings.size_for(self.layout);

        let title = format!("<b>{label}</b>");
        let layout = Layout::new()
            .title(
                Title::with_text(&title)
                    .font(Font::new().size(TITLE_FONT_SIZE)),
            )
            .width(width)
            .height(height)
            .show_legend(false)
            .grid(
                LayoutGrid::new()
                    .rows(rows)
                    .columns(columns)
                    .pattern(GridPattern::Independent),
            )
            .x_axis(Axis::new().title(Title::with_text(AMPLITUDE_X_LABEL)))
            .y_axis(Axis::new().title(Title::with_text(AMPLITUDE_Y_LABEL)))
            .x_axis2(Axis::new().title(Title::with_text(SPECTROGRAM_X_LABEL)))
            .y_axis2(Axis::new().title(Title::with_text(SPECTROGRAM_Y_LABEL)));

        let mut plot = Plot::new();
        plot.add_trace(amplitude);
        plot.add_trace(heatmap);
        plot.set_layout(layout);

        Ok(plot)
    }
}

fn write_html(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|e| Error::PlotWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Sanitize a label for use as a file name.
///
/// Replaces characters that are invalid in file names across platforms and
/// prevents path traversal.
fn sanitize_filename(label: &str) -> String {
    let sanitized: String = label
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            _ => c,
        })
        .collect();

    let sanitized = sanitized.replace("..", "__");
    if sanitized.is_empty() {
        "segment".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Koel"), "Koel");
        assert_eq!(sanitize_filename("All three birds"), "All three birds");
        assert_eq!(sanitize_filename("a/b:c*d"), "a_b_c_d");
        assert_eq!(sanitize_filename("../etc"), "___etc");
        assert_eq!(sanitize_filename("  "), "segment");
    }

    #[test]
    fn test_render_writes_html_with_labels() {
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(dir.path().join("out"), PlotLayout::SideBySide);
        let samples: Vec<f32> = (0..2_000).map(|i| ((i % 50) as f32 / 50.0) - 0.5).collect();

        let path = plotter.render("Koel", &samples, 8_000).unwrap();

        assert_eq!(path, dir.path().join("out").join("Koel.html"));
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("Koel"));
        assert!(html.contains("Amplitude"));
        assert!(html.contains("Frequency"));
        assert!(html.contains("heatmap"));
    }

    #[test]
    fn test_render_empty_segment() {
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(dir.path().to_path_buf(), PlotLayout::Stacked);

        let path = plotter.render("Nothing", &[], 44_100).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_rejects_bad_spectrogram_settings() {
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(dir.path().to_path_buf(), PlotLayout::Stacked)
            .with_spectrogram(SpectrogramConfig { nfft: 64, overlap: 64 });

        let result = plotter.render("Bad", &[0.0; 100], 1_000);
        assert!(matches!(
            result,
            Err(Error::InvalidSpectrogramConfig { .. })
        ));
    }

    #[test]
    fn test_long_segment_spectrogram_is_bounded() {
        let dir = TempDir::new().unwrap();
        #[allow(clippy::cast_precision_loss)]
        let samples: Vec<f32> = (0..240_000).map(|i| (i as f32 * 0.37).sin() * 0.5).collect();

        let settings = PlotSettings {
            max_spectrogram_frames: 100,
            ..PlotSettings::default()
        };
        let bounded = Plotter::new(dir.path().join("bounded"), PlotLayout::Stacked)
            .with_settings(settings)
            .render("Long", &samples, 8_000)
            .unwrap();

        let settings = PlotSettings {
            max_spectrogram_frames: 0,
            ..PlotSettings::default()
        };
        let full = Plotter::new(dir.path().join("full"), PlotLayout::Stacked)
            .with_settings(settings)
            .render("Long", &samples, 8_000)
            .unwrap();

        let bounded_len = fs::metadata(&bounded).unwrap().len();
        let full_len = fs::metadata(&full).unwrap().len();
        assert!(
            bounded_len * 4 < full_len,
            "bounded {bounded_len} bytes vs full {full_len} bytes"
        );
    }
}
