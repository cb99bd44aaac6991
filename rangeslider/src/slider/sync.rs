use tracing::{debug, trace, warn};

use crate::{
    error::SliderError,
    host::{ChangeEvent, HostElement, INPUT_EVENT},
    range::{DomainRange, cap, parse_number},
    surface::Surface,
};

use super::{EventOutcome, Geometry, RangeSlider, render};

impl<H: HostElement, S: Surface> RangeSlider<H, S> {
    /// Re-syncs geometry and value with the host.
    ///
    /// Pixel geometry is re-measured every time. With `force_reread` the
    /// `min`, `max`, `step`, value and secondary indicator are read from the
    /// host again, missing or malformed ones falling back to the defaults.
    /// Always re-renders at the current value.
    #[tracing::instrument(level = "debug", skip(self), fields(id = %self.id))]
    pub fn update(&mut self, force_reread: bool) -> Result<(), SliderError> {
        self.ensure_mounted()?;

        let announce = force_reread && self.reread_attributes();
        self.geometry = Geometry::measure(&mut self.surface);
        if self.geometry.content_width().raw() == 0 {
            warn!(geometry = ?self.geometry, "track has no room for the handle to move");
        }
        self.position = self.range.value_to_position(self.value);

        render::render_disabled(
            &mut self.surface,
            &self.options.classes,
            self.host.is_disabled(),
        );
        self.render();
        if announce {
            self.write_host();
        }
        Ok(())
    }

    /// Programmatically moves the slider to `value`, snapped onto the step
    /// grid.
    ///
    /// Returns `false` without rendering or notifying when the snapped value
    /// equals the current one.
    pub fn set_value(&mut self, value: f64) -> Result<bool, SliderError> {
        self.ensure_mounted()?;
        let value = self.range.quantize(value);
        if value == self.value && !self.host_value_is_empty() {
            trace!(value, "set_value unchanged");
            return Ok(false);
        }
        self.apply_value(value);
        Ok(true)
    }

    /// Moves the secondary indicator; the primary value is untouched.
    pub fn set_secondary_value(&mut self, value: f64) -> Result<(), SliderError> {
        self.ensure_mounted()?;
        self.secondary = cap(value, self.range.min(), self.range.max());
        self.render();
        Ok(())
    }

    pub(super) fn on_host_change(&mut self, change: &ChangeEvent) -> EventOutcome {
        if change.is_echo_of(self.id) {
            trace!(name = %change.name, "ignoring own echo");
            return EventOutcome::Ignored;
        }

        let raw = self.host.value();
        let value = parse_number(Some(raw.as_str())).unwrap_or_else(|| self.range.midpoint());
        self.value = self.range.quantize(value);
        self.position = self.range.value_to_position(self.value);
        self.render();
        debug!(value = self.value, "synced external change");
        EventOutcome::Handled
    }

    pub(super) fn on_resize(&mut self) -> EventOutcome {
        match self.update(false) {
            Ok(()) => EventOutcome::Handled,
            Err(_) => EventOutcome::Ignored,
        }
    }

    /// Renders `value` and writes it to the host if it differs from what the
    /// host already shows.
    pub(super) fn apply_value(&mut self, value: f64) {
        let changed = value != self.value || self.host_value_is_empty();
        self.value = value;
        self.position = self.range.value_to_position(value);
        self.render();
        if changed {
            self.write_host();
        }
    }

    /// Reads the host attributes. Returns whether the host had no value and
    /// must be told about the defaulted one.
    fn reread_attributes(&mut self) -> bool {
        let attr = |name: &str| self.host.attribute(name);
        self.range = DomainRange::from_attributes(
            attr("min").as_deref(),
            attr("max").as_deref(),
            attr("step").as_deref(),
        );

        let raw = self.host.value();
        let value = parse_number(Some(raw.as_str())).unwrap_or_else(|| self.range.midpoint());
        self.value = self.range.quantize(value);

        let secondary = self.host.secondary_value(&self.options.secondary_attribute);
        self.secondary = parse_number(secondary.as_deref())
            .map(|v| cap(v, self.range.min(), self.range.max()))
            .unwrap_or_else(|| self.range.min());

        raw.trim().is_empty()
    }

    fn write_host(&mut self) {
        self.host.set_value(&format_value(self.value));
        self.host.dispatch(ChangeEvent::from_slider(INPUT_EVENT, self.id));
    }

    fn host_value_is_empty(&self) -> bool {
        self.host.value().trim().is_empty()
    }
}

/// Shortest text that parses back to `value`; `-0` is written as `0`.
fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_an_input_value() {
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(0.3), "0.3");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(-2.5), "-2.5");
    }
}
