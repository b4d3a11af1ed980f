use tracing::debug;

use crate::core::{NumericBackend, Series};
use crate::error::{PlotError, PlotResult};
use crate::render::DrawingSurface;

use super::{Plot, SeriesId};

impl<S: DrawingSurface, B: NumericBackend> Plot<S, B> {
    /// Registers a series on top of the existing ones.
    pub fn add_series(&mut self, series: Series<B::Value>) -> SeriesId {
        let id = SeriesId(self.next_series_id);
        self.next_series_id += 1;
        debug!(
            series_id = id.get(),
            kind = series.kind().name(),
            points = series.len(),
            "add series"
        );
        self.series.insert(id, series);
        self.changed = true;
        id
    }

    /// Replaces a series in place, keeping its paint order.
    pub fn replace_series(&mut self, id: SeriesId, series: Series<B::Value>) -> PlotResult<()> {
        let slot = self.series.get_mut(&id).ok_or_else(|| unknown_series(id))?;
        *slot = series;
        self.changed = true;
        Ok(())
    }

    /// Mutates a series through `update`; the plot is marked changed on success.
    pub fn update_series<T>(
        &mut self,
        id: SeriesId,
        update: impl FnOnce(&mut Series<B::Value>) -> PlotResult<T>,
    ) -> PlotResult<T> {
        let series = self.series.get_mut(&id).ok_or_else(|| unknown_series(id))?;
        let value = update(series)?;
        self.changed = true;
        Ok(value)
    }

    pub fn remove_series(&mut self, id: SeriesId) -> Option<Series<B::Value>> {
        let removed = self.series.shift_remove(&id);
        if removed.is_some() {
            debug!(series_id = id.get(), "remove series");
            self.changed = true;
        }
        removed
    }

    pub fn clear_series(&mut self) {
        if !self.series.is_empty() {
            debug!(count = self.series.len(), "clear series");
            self.series.clear();
            self.changed = true;
        }
    }

    #[must_use]
    pub fn series(&self, id: SeriesId) -> Option<&Series<B::Value>> {
        self.series.get(&id)
    }

    /// Series ids in paint order.
    pub fn series_ids(&self) -> impl Iterator<Item = SeriesId> + '_ {
        self.series.keys().copied()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

fn unknown_series(id: SeriesId) -> PlotError {
    PlotError::InvalidData(format!("unknown series id {}", id.get()))
}
