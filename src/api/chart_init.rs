use std::path::Path;

use tracing::{debug, error};

use crate::core::{Axis, Dataset, build_scale};
use crate::data::load_dataset;
use crate::error::ScatterResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::animation::{AxisTrack, PointTrack};
use super::point_render::project_coords;
use super::{ChartConfig, ChartLayout, ScatterChart};

impl<R: Renderer> ScatterChart<R> {
    /// Creates an empty chart; nothing is drawn until a dataset is loaded.
    pub fn new(mut renderer: R, config: ChartConfig) -> ScatterResult<Self> {
        let plot = config.validate()?;
        renderer.mount(&config.mount_selector)?;
        let interaction = InteractionState::with_selection(config.selection);

        Ok(Self {
            renderer,
            config,
            plot,
            interaction,
            clock_ms: 0.0,
            layout: None,
        })
    }

    /// Loads the dataset at `path` and lays the chart out.
    ///
    /// Failures are logged and leave the chart uninitialized; the return value
    /// reports whether the chart is ready.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(()) => true,
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to load chart data");
                false
            }
        }
    }

    /// Loads from the configured `data_path`.
    pub fn load_configured(&mut self) -> bool {
        let path = self.config.data_path.clone();
        self.load(path)
    }

    pub fn try_load(&mut self, path: impl AsRef<Path>) -> ScatterResult<()> {
        let dataset = load_dataset(path)?;
        self.set_dataset(dataset)
    }

    /// Fetches the dataset from `url` and lays the chart out; failures are
    /// logged like [`ScatterChart::load`].
    #[cfg(feature = "http-source")]
    pub fn load_url(&mut self, url: &str) -> bool {
        let result = crate::data::fetch_dataset(url).and_then(|dataset| self.set_dataset(dataset));
        match result {
            Ok(()) => true,
            Err(err) => {
                error!(url, error = %err, "failed to fetch chart data");
                false
            }
        }
    }

    /// Installs `dataset` and places every point at its final position
    /// without animation.
    ///
    /// On error the previous layout, if any, is kept.
    pub fn set_dataset(&mut self, dataset: Dataset) -> ScatterResult<()> {
        let selection = self.interaction.selection();
        let x_metric = selection.metric(Axis::X);
        let y_metric = selection.metric(Axis::Y);

        let x_scale = build_scale(&dataset, x_metric, self.plot.x_range(), self.config.x_padding)?;
        let y_scale = build_scale(&dataset, y_metric, self.plot.y_range(), self.config.y_padding)?;

        let x_points = PointTrack::settled(project_coords(&dataset, x_metric, x_scale));
        let y_points = PointTrack::settled(project_coords(&dataset, y_metric, y_scale));

        debug!(
            records = dataset.len(),
            x = %x_metric,
            y = %y_metric,
            "chart layout initialized"
        );
        self.layout = Some(ChartLayout {
            dataset,
            x_axis: AxisTrack::settled(x_metric, x_scale),
            y_axis: AxisTrack::settled(y_metric, y_scale),
            x_points,
            y_points,
        });
        self.interaction.on_pointer_leave();
        Ok(())
    }
}
